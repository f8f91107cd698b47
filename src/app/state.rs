use std::path::PathBuf;

use fltk::{
    dialog,
    enums::{Color, Font},
    prelude::*,
    text::{TextBuffer, TextEditor},
};

use super::session::{has_unsaved_content, DocumentSession};
use super::settings::EditorSettings;
use crate::ui::dialogs::{about, font_chooser};
use crate::ui::file_dialogs::{ensure_txt_extension, native_open_dialog, native_save_dialog};
use crate::ui::theme::{parse_color, rgb_to_hex};

/// Owns the editing surface plus all mutable application state, and
/// implements one method per menu command. Every handler runs to completion
/// on the UI thread; dialogs are modal.
pub struct AppState {
    pub editor: TextEditor,
    pub settings: EditorSettings,
    pub session: DocumentSession,
}

impl AppState {
    pub fn new(editor: TextEditor, settings: EditorSettings) -> Self {
        Self {
            editor,
            settings,
            session: DocumentSession::new(),
        }
    }

    fn buffer(&self) -> TextBuffer {
        self.editor.buffer().expect("editor has no buffer")
    }

    /// Push the current settings into the text widget.
    pub fn apply_appearance(&mut self) {
        self.editor.set_text_font(Font::by_name(&self.settings.font_family));
        self.editor.set_text_size(self.settings.font_size as i32);
        self.editor
            .set_text_color(parse_color(&self.settings.text_color).unwrap_or(Color::Black));
        self.editor
            .set_color(parse_color(&self.settings.bg_color).unwrap_or(Color::White));
        self.editor.redraw();
    }

    /// Settings failures never reach the user; the in-memory values stay
    /// authoritative for the rest of the session.
    fn persist_settings(&self) {
        if let Err(e) = self.settings.save() {
            eprintln!("Failed to save settings: {}", e);
        }
    }

    // --- Arquivo ---

    pub fn file_new(&mut self) {
        if has_unsaved_content(&self.buffer().text()) {
            let choice = dialog::choice2_default(
                "Deseja salvar o arquivo atual?",
                "Salvar",
                "Descartar",
                "Cancelar",
            );
            match choice {
                Some(0) => self.file_save(),
                Some(1) => {}
                _ => return,
            }
        }
        self.buffer().set_text("");
        self.session.clear();
    }

    pub fn file_open(&mut self) {
        let Some(path) = native_open_dialog() else {
            return;
        };
        match self.session.open(PathBuf::from(path)) {
            Ok(contents) => {
                self.buffer().set_text(&contents);
                dialog::message_default("Arquivo aberto com sucesso!");
            }
            Err(e) => dialog::alert_default(&format!("Erro ao abrir o arquivo: {}", e)),
        }
    }

    pub fn file_save(&mut self) {
        if !self.session.has_path() {
            self.file_save_as();
            return;
        }
        match self.session.save(&self.buffer().text()) {
            Ok(()) => dialog::message_default("Arquivo salvo com sucesso!"),
            Err(e) => dialog::alert_default(&format!("Erro ao salvar o arquivo: {}", e)),
        }
    }

    pub fn file_save_as(&mut self) {
        let Some(path) = native_save_dialog() else {
            return;
        };
        let path = PathBuf::from(ensure_txt_extension(&path));
        match self.session.save_as(path, &self.buffer().text()) {
            Ok(()) => dialog::message_default("Arquivo salvo com sucesso!"),
            Err(e) => dialog::alert_default(&format!("Erro ao salvar o arquivo: {}", e)),
        }
    }

    // --- Opcao ---

    pub fn change_font(&mut self) {
        if let Some(family) = font_chooser::show_font_chooser(&self.settings.font_family) {
            self.settings.font_family = family;
            self.apply_appearance();
            self.persist_settings();
        }
    }

    pub fn change_text_color(&mut self) {
        if let Some((r, g, b)) = dialog::color_chooser("Cor de Texto", dialog::ColorMode::Byte) {
            self.settings.text_color = rgb_to_hex(r, g, b);
            self.apply_appearance();
            self.persist_settings();
        }
    }

    pub fn change_bg_color(&mut self) {
        if let Some((r, g, b)) = dialog::color_chooser("Cor de Fundo", dialog::ColorMode::Byte) {
            self.settings.bg_color = rgb_to_hex(r, g, b);
            self.apply_appearance();
            self.persist_settings();
        }
    }

    // --- Ajuda ---

    pub fn show_help(&self) {
        dialog::message_default("É um bloco de notas, faça história");
    }

    pub fn show_about(&self) {
        about::show_about_dialog();
    }
}
