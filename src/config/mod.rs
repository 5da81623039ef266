//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (storage keys, column schemas, date arithmetic)
//! - The library [`Config`] and logging option types
//! - CLI argument types and parsing

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::{
    Cli, Command, ExportReportsArgs, ExportSitesArgs, ImportArgs, ReportArgs, ReportsCommand,
    SiteArgs, SitesCommand, ThemeCommand,
};
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
