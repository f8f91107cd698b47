use fltk::{app, prelude::*};

use editor_texto::app::{AppState, EditorSettings, Message};
use editor_texto::ui::{build_main_window, build_menu};

fn main() {
    // load_system_fonts so the font chooser can enumerate the host fonts
    let app = app::App::default().load_system_fonts();
    let (sender, receiver) = app::channel::<Message>();

    let settings = EditorSettings::load();

    let mut widgets = build_main_window();
    build_menu(&mut widgets.menu, &sender);

    let mut state = AppState::new(widgets.text_editor, settings);
    state.apply_appearance();

    widgets.wind.show();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::FileNew => state.file_new(),
                Message::FileOpen => state.file_open(),
                Message::FileSave => state.file_save(),
                Message::FileSaveAs => state.file_save_as(),
                // Fechar and Sair both quit immediately, without a save
                // prompt. Only Novo asks about unsaved content.
                Message::FileClose | Message::FileQuit => app.quit(),
                Message::ChangeFont => state.change_font(),
                Message::ChangeTextColor => state.change_text_color(),
                Message::ChangeBgColor => state.change_bg_color(),
                Message::ShowHelp => state.show_help(),
                Message::ShowAbout => state.show_about(),
            }
        }
    }
}
