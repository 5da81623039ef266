//! Row coercion and staging.
//!
//! Turns a parsed [`Table`] into a [`StagedImport`]: headers are validated
//! first, then every data row is coerced on its own. A bad row is logged and
//! skipped; it never aborts the batch.

use chrono::NaiveDate;
use log::{debug, warn};

use super::headers::{validate_headers, HeaderIndex};
use super::table::{CellValue, Table};
use super::types::{ImportOptions, RowIssue, StagedImport};
use crate::config::IMPORTED_ID_PREFIX;
use crate::dates::{format_iso, is_iso_year, parse_date, serial_to_date, DateFormat};
use crate::error_handling::{ImportError, IssueKind};
use crate::models::{ProblemReport, ReportStatus};

const SITE_NAME: &str = "Site Name";
const TICKET_ID: &str = "Ticket ID";
const STATUS: &str = "Status";
const REASON: &str = "Reason";
const LAST_UPDATE: &str = "Last Update";
const ISSUE_DATE: &str = "Issue Date";
const LAST_FOLLOW_UP: &str = "Last Follow Up";

/// Result of reading one date cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CoercedDate {
    Date(NaiveDate),
    Blank,
    Unparseable,
}

/// Reads a date cell, trying in order: a native date value, a display or ISO
/// string, then a positive spreadsheet serial.
pub(crate) fn coerce_date(cell: &CellValue, format: DateFormat) -> CoercedDate {
    match cell {
        CellValue::DateTime(dt) if is_iso_year(dt.date()) => CoercedDate::Date(dt.date()),
        CellValue::DateTime(_) => CoercedDate::Unparseable,
        CellValue::Empty => CoercedDate::Blank,
        CellValue::Text(s) if s.trim().is_empty() => CoercedDate::Blank,
        CellValue::Text(s) => parse_date(s, format)
            .map(CoercedDate::Date)
            .unwrap_or(CoercedDate::Unparseable),
        CellValue::Number(n) if *n > 0.0 => serial_to_date(*n)
            .map(CoercedDate::Date)
            .unwrap_or(CoercedDate::Unparseable),
        CellValue::Number(_) | CellValue::Bool(_) => CoercedDate::Unparseable,
    }
}

/// Builds the id of the `index`-th data row of a batch.
pub fn imported_id(batch_timestamp: i64, index: usize) -> String {
    format!("{}-{}-{}", IMPORTED_ID_PREFIX, batch_timestamp, index)
}

struct RowContext<'a> {
    row: &'a [CellValue],
    index: usize,
    headers: &'a HeaderIndex,
    opts: &'a ImportOptions,
    issues: Vec<RowIssue>,
}

impl<'a> RowContext<'a> {
    fn row_number(&self) -> usize {
        self.index + 2
    }

    fn cell(&self, header: &str) -> &'a CellValue {
        self.headers.cell(self.row, header)
    }

    fn issue(&mut self, kind: IssueKind, field: &'static str) {
        let value = self.cell(field).to_text();
        if kind.skips_row() {
            warn!(
                "{} \"{}\" on row {}. Skipping.",
                kind,
                value,
                self.row_number()
            );
        } else {
            warn!(
                "{} \"{}\" in {} on row {}",
                kind,
                value,
                field,
                self.row_number()
            );
        }
        self.issues.push(RowIssue {
            row_number: self.row_number(),
            kind,
            field,
            value,
        });
    }

    fn date(&mut self, field: &'static str) -> String {
        let fallback = self.opts.missing_date_policy.fallback(self.opts.today);
        match coerce_date(self.cell(field), self.opts.date_format) {
            CoercedDate::Date(date) => format_iso(date),
            CoercedDate::Blank => fallback,
            CoercedDate::Unparseable => {
                self.issue(IssueKind::UnparseableDate, field);
                fallback
            }
        }
    }

    fn into_report(mut self) -> (Option<ProblemReport>, Vec<RowIssue>) {
        let Some(status) = ReportStatus::parse(&self.cell(STATUS).to_text()) else {
            self.issue(IssueKind::InvalidStatus, STATUS);
            return (None, self.issues);
        };

        let site_name = self.cell(SITE_NAME).to_text();
        if site_name.trim().is_empty() {
            self.issue(IssueKind::MissingSiteName, SITE_NAME);
            return (None, self.issues);
        }
        let ticket_id = self.cell(TICKET_ID).to_text();
        if ticket_id.trim().is_empty() {
            self.issue(IssueKind::MissingTicketId, TICKET_ID);
            return (None, self.issues);
        }

        let issue_date = self.date(ISSUE_DATE);
        let last_follow_up = self.date(LAST_FOLLOW_UP);

        let report = ProblemReport {
            id: imported_id(self.opts.batch_timestamp, self.index),
            site_name,
            ticket_id,
            status,
            reason: self.cell(REASON).to_text(),
            last_update: self.cell(LAST_UPDATE).to_text(),
            issue_date,
            last_follow_up,
        };
        (Some(report), self.issues)
    }
}

/// Validates, coerces and stages a parsed table.
///
/// # Errors
///
/// - [`ImportError::EmptyFile`] if the table has no rows at all
/// - [`ImportError::MissingHeaders`] if the first row lacks an expected column
/// - [`ImportError::NoDataRows`] if only the header row is present
/// - [`ImportError::NoValidReports`] if every data row was skipped
pub fn reconcile(table: &Table, opts: &ImportOptions) -> Result<StagedImport, ImportError> {
    let header = table.header().ok_or(ImportError::EmptyFile)?;
    let headers = validate_headers(header)?;
    debug!("Import headers validated");

    let data_rows = table.data_rows();
    if data_rows.is_empty() {
        return Err(ImportError::NoDataRows);
    }

    let mut reports = Vec::with_capacity(data_rows.len());
    let mut issues = Vec::new();
    for (index, row) in data_rows.iter().enumerate() {
        let ctx = RowContext {
            row,
            index,
            headers: &headers,
            opts,
            issues: Vec::new(),
        };
        let (report, row_issues) = ctx.into_report();
        reports.extend(report);
        issues.extend(row_issues);
    }
    debug!(
        "Import rows coerced: {} of {} kept",
        reports.len(),
        data_rows.len()
    );

    if reports.is_empty() {
        return Err(ImportError::NoValidReports {
            data_rows: data_rows.len(),
        });
    }

    Ok(StagedImport {
        batch_timestamp: opts.batch_timestamp,
        reports,
        issues,
        data_rows: data_rows.len(),
    })
}
