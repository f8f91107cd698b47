use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    app,
    browser::HoldBrowser,
    button::Button,
    enums::Font,
    frame::Frame,
    prelude::*,
    window::Window,
};

/// Secondary window listing every font FLTK loaded from the host system
/// (`main` calls `load_system_fonts()` before any dialog can run).
///
/// The preview label renders at a fixed size 12 and follows the selection
/// live. Returns the chosen family, or `None` when the dialog was cancelled
/// or confirmed with nothing selected.
pub fn show_font_chooser(current_family: &str) -> Option<String> {
    let fonts = app::fonts();

    let mut win = Window::default()
        .with_size(320, 420)
        .with_label("Escolher Fonte")
        .center_screen();
    win.make_modal(true);

    let mut browser = HoldBrowser::new(10, 10, 300, 300, "");
    for name in &fonts {
        browser.add(name);
    }
    if let Some(idx) = fonts.iter().position(|f| f == current_family) {
        browser.select(idx as i32 + 1);
    }

    let mut preview = Frame::new(10, 320, 300, 40, "Visualização");
    preview.set_label_size(12);
    preview.set_label_font(Font::by_name(current_family));

    let mut apply_btn = Button::new(60, 375, 90, 30, "Aplicar");
    let mut cancel_btn = Button::new(170, 375, 90, 30, "Cancelar");

    win.end();
    win.make_resizable(false);
    win.show();

    let mut preview_cb = preview.clone();
    browser.set_callback(move |b| {
        let line = b.value();
        if line > 0 {
            // Browser lines are 1-based, font indices 0-based.
            preview_cb.set_label_font(Font::by_index(line as usize - 1));
            preview_cb.redraw();
        }
    });

    let chosen: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));

    let chosen_apply = chosen.clone();
    let browser_apply = browser.clone();
    let win_apply = win.clone();
    apply_btn.set_callback(move |_| {
        let line = browser_apply.value();
        if line > 0 {
            if let Some(name) = browser_apply.text(line) {
                *chosen_apply.borrow_mut() = Some(name);
            }
        }
        win_apply.clone().hide();
    });

    let win_cancel = win.clone();
    cancel_btn.set_callback(move |_| {
        win_cancel.clone().hide();
    });

    let win_x = win.clone();
    win.set_callback(move |_| {
        win_x.clone().hide();
    });

    while win.shown() {
        app::wait();
    }

    chosen.take()
}
