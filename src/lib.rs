//! site_tracker library: network site inventory and daily problem reports
//!
//! This library provides the pieces behind the `site_tracker` CLI:
//! - Date normalization between display formats and canonical ISO dates
//! - Spreadsheet/CSV import with per-row reconciliation and a staged
//!   confirm/cancel step
//! - CSV, JSONL and XLSX export
//! - Directory-backed persistence of reports, sites and the theme preference
//!
//! # Example
//!
//! ```no_run
//! use site_tracker::import::{read_table, ImportOptions};
//! use site_tracker::{AppState, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let mut state = AppState::open(&config)?;
//!
//! let table = read_table(std::path::Path::new("daily.xlsx")).await?;
//! let opts = ImportOptions::new(config.date_format, config.missing_date_policy);
//! let staged = state.stage_import(&table, &opts)?;
//! println!("{} reports staged", staged.reports.len());
//!
//! let applied = state.confirm_import()?;
//! println!("{} reports in the collection", applied.total);
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod config;
pub mod dates;
pub mod error_handling;
pub mod export;
pub mod forms;
pub mod import;
pub mod initialization;
pub mod models;
pub mod storage;
pub mod store;

// Re-export public API
pub use app::AppState;
pub use config::{Cli, Config, LogFormat, LogLevel};
pub use dates::{to_display, to_iso, DateFormat};
pub use models::{ProblemReport, ReportStatus, Site, Theme, UserGroup};
