/// All commands that can be sent through the FLTK channel.
/// Each menu item sends one of these; the dispatch loop in main routes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // Arquivo
    FileNew,
    FileOpen,
    FileSave,
    FileSaveAs,
    FileClose,
    FileQuit,

    // Opcao
    ChangeFont,
    ChangeTextColor,
    ChangeBgColor,

    // Ajuda
    ShowHelp,
    ShowAbout,
}
