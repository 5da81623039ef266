//! Error handling and import statistics.
//!
//! This module provides:
//! - Error type definitions for every layer (dates, forms, store, storage, import)
//! - Row-level issue kinds and their per-import counters
//!
//! Failures are categorized into:
//! - **Errors**: abort the current operation with no partial mutation
//! - **Row issues**: recorded against a single import row; the batch continues

mod stats;
mod types;

// Re-export public API
pub use stats::ImportStats;
pub use types::{
    DateError, ImportError, InitializationError, IssueKind, StorageError, StoreError,
    ValidationError,
};
