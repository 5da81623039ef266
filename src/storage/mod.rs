//! On-disk persistence of collections and preferences.
//!
//! A directory of small files, one per key. Collections are stored as JSON
//! arrays; the theme is stored as a plain string.

mod local;
mod persist;

// Re-export public API
pub use local::LocalStorage;
pub use persist::{load_reports, load_sites, load_theme, save_reports, save_sites, save_theme};
