use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::messages::Message;

/// Declarative menu table: every item sends exactly one `Message` through
/// the channel, the dispatch loop in main does the rest.
pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = sender;

    // Arquivo
    menu.add("Arquivo/Novo", Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileNew) });
    menu.add("Arquivo/Abrir", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("Arquivo/Salvar", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add("Arquivo/Salvar como...", Shortcut::Ctrl | Shortcut::Shift | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSaveAs) });
    menu.add("Arquivo/Fechar", Shortcut::Ctrl | 'w', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::FileClose) });
    menu.add("Arquivo/Sair", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // Opcao
    menu.add("Opcao/Fonte do Texto", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ChangeFont) });
    menu.add("Opcao/Cor de Texto", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ChangeTextColor) });
    menu.add("Opcao/Cor de Fundo", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ChangeBgColor) });

    // Ajuda
    menu.add("Ajuda/Ajuda", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowHelp) });
    menu.add("Ajuda/Sobre", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}
