pub mod dialogs;
pub mod file_dialogs;
pub mod main_window;
pub mod menu;
pub mod theme;

pub use main_window::build_main_window;
pub use menu::build_menu;
