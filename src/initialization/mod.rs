//! Application initialization.
//!
//! Sets up process-wide resources before any command runs. Today that is the
//! logger; storage is opened per command by [`AppState`](crate::app::AppState).

mod logger;

// Re-export public API
pub use logger::init_logger_with;
