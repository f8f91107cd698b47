use fltk::{
    app,
    button::Button,
    enums::{Color, Font},
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

/// Show the Sobre dialog
pub fn show_about_dialog() {
    let version = env!("CARGO_PKG_VERSION");
    let mut dialog = Window::default()
        .with_size(360, 220)
        .with_label("Sobre")
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 340, 200, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(10);

    let mut title = Frame::default();
    title.set_label("Editor de Texto");
    title.set_label_size(22);
    title.set_label_font(Font::HelveticaBold);
    flex.fixed(&title, 35);

    let mut version_frame = Frame::default();
    version_frame.set_label(&format!("Versão {}", version));
    version_frame.set_label_size(13);
    flex.fixed(&version_frame, 25);

    let mut desc_frame = Frame::default();
    desc_frame.set_label("Um editor de texto simples escrito em Rust e FLTK");
    desc_frame.set_label_size(12);
    desc_frame.set_label_color(Color::from_rgb(100, 100, 100));
    flex.fixed(&desc_frame, 40);

    let mut close_btn = Button::default().with_label("Fechar");
    flex.fixed(&close_btn, 30);

    flex.end();
    dialog.end();

    let mut dialog_close = dialog.clone();
    close_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    dialog.show();
    while dialog.shown() {
        app::wait();
    }
}
