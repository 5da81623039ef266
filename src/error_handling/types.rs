//! Error type definitions.
//!
//! This module defines all error and row-issue types used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Reasons a date string could not be normalized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Nothing to parse.
    #[error("date is empty")]
    Empty,

    /// The value is not shaped like a date in the expected format.
    #[error("\"{value}\" does not match {expected}")]
    Malformed {
        /// The rejected input (trimmed)
        value: String,
        /// Display pattern that was expected
        expected: &'static str,
    },

    /// Month component outside 1-12.
    #[error("month {0} is out of range")]
    MonthOutOfRange(u32),

    /// Day component outside 1-31.
    #[error("day {0} is out of range")]
    DayOutOfRange(u32),

    /// The components do not name a real day (e.g. February 30th).
    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    NotACalendarDate {
        /// Resolved year
        year: i32,
        /// Month (1-12)
        month: u32,
        /// Day (1-31)
        day: u32,
    },
}

/// Errors raised when a manually submitted form is rejected.
///
/// Nothing is mutated when a submission fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was left blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Status other than UP or DOWN.
    #[error("Invalid status \"{0}\". Expected UP or DOWN")]
    InvalidStatus(String),

    /// A date field could not be converted to ISO form.
    #[error("Invalid {field}: \"{value}\". Please use a valid {expected} format ({source})")]
    InvalidDate {
        /// Field label
        field: &'static str,
        /// Value as typed
        value: String,
        /// Display pattern the user should follow
        expected: &'static str,
        /// Underlying normalization failure
        #[source]
        source: DateError,
    },
}

/// Errors from the in-memory record store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A record with this id already exists (or appears twice in a batch).
    #[error("Duplicate record id: {0}")]
    DuplicateId(String),

    /// No record with this id.
    #[error("No record with id: {0}")]
    UnknownId(String),
}

/// Errors from the on-disk key/value store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing a key file failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value could not be encoded or decoded.
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that abort an import before anything is staged, or that prevent a
/// staged import from being applied.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The selected file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that was selected
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file extension is not one of the supported table formats.
    #[error("Unsupported file type: {0} (expected .csv, .xls or .xlsx)")]
    UnsupportedFileType(String),

    /// The CSV parser rejected the file.
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// The workbook parser rejected the file.
    #[error("Workbook parse error: {0}")]
    Workbook(#[from] calamine::Error),

    /// The workbook has no worksheets.
    #[error("The workbook contains no sheets.")]
    NoSheets,

    /// The table has no rows at all.
    #[error("The imported file is empty.")]
    EmptyFile,

    /// The header row lacks one or more expected columns.
    #[error(
        "Invalid file format. Expected headers: {}. Missing: {}",
        crate::config::REPORT_HEADERS.join(", "),
        missing.join(", ")
    )]
    MissingHeaders {
        /// Expected headers not found in the first row
        missing: Vec<String>,
    },

    /// A header row but no data rows.
    #[error("The imported file contains no data rows.")]
    NoDataRows,

    /// Every data row was skipped.
    #[error("No valid reports found in the file ({data_rows} data rows checked). Please check the data format.")]
    NoValidReports {
        /// Number of data rows examined
        data_rows: usize,
    },

    /// Another import is already awaiting confirmation.
    #[error("An import is already staged; confirm or cancel it first")]
    ImportPending,

    /// Confirm was requested with nothing staged.
    #[error("There is no staged import to confirm")]
    NothingStaged,

    /// Applying the staged reports conflicted with the live collection.
    #[error("Failed to apply import: {0}")]
    Store(#[from] StoreError),
}

/// Kinds of problems found in individual import rows.
///
/// Row problems never abort a batch: skipping kinds drop the row, warning kinds
/// keep it with a fallback value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum IssueKind {
    /// Status cell is not UP or DOWN (row skipped)
    InvalidStatus,
    /// Site Name cell is blank (row skipped)
    MissingSiteName,
    /// Ticket ID cell is blank (row skipped)
    MissingTicketId,
    /// A date cell held a value that is not a date (row kept)
    UnparseableDate,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::InvalidStatus => "Invalid status",
            IssueKind::MissingSiteName => "Missing site name",
            IssueKind::MissingTicketId => "Missing ticket ID",
            IssueKind::UnparseableDate => "Unparseable date",
        }
    }

    /// Whether this issue drops the row from the staged set.
    pub fn skips_row(&self) -> bool {
        !matches!(self, IssueKind::UnparseableDate)
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
