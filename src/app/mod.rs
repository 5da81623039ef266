//! Application layer.
//!
//! This module provides the live [`AppState`], the CLI command handlers, and
//! the user-facing summaries they print.

pub mod commands;
pub mod state;
pub mod summary;

// Re-export public API
pub use commands::{prompt_yes_no, run};
pub use state::AppState;
pub use summary::{format_import_summary, format_reports, format_sites};
