//! Export of reports and sites.
//!
//! This module serializes the live collections into files or stdout:
//! reports as CSV (for spreadsheets) or JSONL (for scripts), sites as an
//! `.xlsx` workbook or CSV.

mod csv;
mod jsonl;
mod output;
mod sites;
mod types;

pub use self::csv::{export_reports_csv, reports_to_csv, write_reports_csv};
pub use jsonl::{export_reports_jsonl, write_reports_jsonl};
pub use sites::{export_sites, site_row, sites_to_csv, sites_to_xlsx};
pub use types::{ReportExportFormat, SiteExportFormat};

use std::path::Path;

use anyhow::Result;

use crate::dates::DateFormat;
use crate::models::ProblemReport;

/// Exports reports in `format` to `output` (stdout if `None`).
///
/// Returns the number of reports written.
pub fn export_reports(
    reports: &[ProblemReport],
    format: ReportExportFormat,
    date_format: DateFormat,
    output: Option<&Path>,
) -> Result<usize> {
    match format {
        ReportExportFormat::Csv => export_reports_csv(reports, date_format, output),
        ReportExportFormat::Jsonl => export_reports_jsonl(reports, output),
    }
}
