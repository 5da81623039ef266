//! Import policies, options and results.

use chrono::{NaiveDate, Utc};
use clap::ValueEnum;

use crate::dates::{format_iso, DateFormat};
use crate::error_handling::{ImportStats, IssueKind};
use crate::models::ProblemReport;

/// What a confirmed import does to the live report collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ImportPolicy {
    /// The staged reports become the whole collection
    #[default]
    Replace,
    /// The staged reports are added after the existing ones
    Append,
}

/// Value given to an imported date cell that holds no usable date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MissingDatePolicy {
    /// Leave the date empty
    #[default]
    Empty,
    /// Use the import day
    Today,
}

impl MissingDatePolicy {
    pub(crate) fn fallback(&self, today: NaiveDate) -> String {
        match self {
            MissingDatePolicy::Empty => String::new(),
            MissingDatePolicy::Today => format_iso(today),
        }
    }
}

/// Settings for one reconciliation pass.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Display format used to read text dates
    pub date_format: DateFormat,
    /// Fallback for blank or unparseable date cells
    pub missing_date_policy: MissingDatePolicy,
    /// Milliseconds timestamp shared by every id in the batch
    pub batch_timestamp: i64,
    /// Calendar day used by [`MissingDatePolicy::Today`]
    pub today: NaiveDate,
}

impl ImportOptions {
    /// Options stamped with the current time.
    pub fn new(date_format: DateFormat, missing_date_policy: MissingDatePolicy) -> Self {
        let now = Utc::now();
        Self {
            date_format,
            missing_date_policy,
            batch_timestamp: now.timestamp_millis(),
            today: chrono::Local::now().date_naive(),
        }
    }

    /// Replaces the clock values, for reproducible batches.
    pub fn with_clock(mut self, batch_timestamp: i64, today: NaiveDate) -> Self {
        self.batch_timestamp = batch_timestamp;
        self.today = today;
        self
    }
}

/// A problem found in one data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowIssue {
    /// 1-based sheet row number (the header is row 1)
    pub row_number: usize,
    pub kind: IssueKind,
    /// Header of the offending column
    pub field: &'static str,
    /// The cell content as text
    pub value: String,
}

impl std::fmt::Display for RowIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "row {}: {} in {} (\"{}\")",
            self.row_number, self.kind, self.field, self.value
        )
    }
}

/// Reports that passed reconciliation and await confirmation.
#[derive(Debug, Clone)]
pub struct StagedImport {
    /// Timestamp embedded in every staged id
    pub batch_timestamp: i64,
    /// Reports in sheet order
    pub reports: Vec<ProblemReport>,
    /// Skipped rows and per-cell warnings, in sheet order
    pub issues: Vec<RowIssue>,
    /// Non-blank data rows examined
    pub data_rows: usize,
}

impl StagedImport {
    pub fn stats(&self) -> ImportStats {
        ImportStats::from_kinds(self.issues.iter().map(|i| i.kind))
    }

    /// Data rows that did not make it into the staged set.
    pub fn skipped_rows(&self) -> usize {
        self.data_rows - self.reports.len()
    }
}

/// Outcome of confirming a staged import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedImport {
    pub policy: ImportPolicy,
    /// Reports added by the import
    pub imported: usize,
    /// Size of the live collection afterwards
    pub total: usize,
}
