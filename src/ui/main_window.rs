use fltk::{
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub text_editor: TextEditor,
}

/// One resizable 700x500 window: a menu bar on top and a single
/// word-wrapping text surface filling the rest.
pub fn build_main_window() -> MainWidgets {
    let mut wind = Window::new(100, 100, 700, 500, "Editor de Texto");
    wind.set_xclass("EditorDeTexto");

    let mut flex = Flex::new(0, 0, 700, 500, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_margin(10);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(TextBuffer::default());
    text_editor.wrap_mode(WrapMode::AtBounds, 0);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    MainWidgets {
        wind,
        menu,
        text_editor,
    }
}
