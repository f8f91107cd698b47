//! Application layer.
//!
//! - `settings` - persisted appearance configuration
//! - `session` - buffer-to-file association and document I/O
//! - `messages` - commands sent through the FLTK channel
//! - `state` - main application coordinator
//! - `error` - crate-wide error type

pub mod error;
pub mod messages;
pub mod session;
pub mod settings;
pub mod state;

pub use error::AppError;
pub use messages::Message;
pub use session::DocumentSession;
pub use settings::EditorSettings;
pub use state::AppState;
