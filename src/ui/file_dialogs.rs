use std::path::Path;

use fltk::dialog::{FileDialogType, NativeFileChooser};

/// Filter shown in the native pickers. FLTK format is
/// "Description\tPattern" with one filter per line; the all-files entry is
/// the fallback the pickers always need.
fn text_files_filter() -> String {
    ["Arquivos de Texto\t*.txt", "Todos os Arquivos\t*"].join("\n")
}

pub fn native_open_dialog() -> Option<String> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseFile);
    nfc.set_filter(&text_files_filter());
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

pub fn native_save_dialog() -> Option<String> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
    nfc.set_filter(&text_files_filter());
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// New saves default to ".txt"; a name typed with any extension is kept.
pub fn ensure_txt_extension(path: &str) -> String {
    if Path::new(path).extension().is_some() {
        path.to_string()
    } else {
        format!("{}.txt", path)
    }
}
