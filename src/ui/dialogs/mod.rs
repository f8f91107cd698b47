pub mod about;
pub mod font_chooser;
