//! CSV export of problem reports.
//!
//! The file opens in spreadsheet applications without an import wizard:
//! UTF-8 BOM, comma delimiter, CRLF row terminator, the seven report columns,
//! and dates in the configured display format.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};
use log::info;

use super::output::open_output;
use crate::config::{REPORT_HEADERS, UTF8_BOM};
use crate::dates::{to_display, DateFormat};
use crate::models::ProblemReport;

/// Writes `reports` as CSV to `writer`, BOM included.
///
/// Returns the number of data rows written.
pub fn write_reports_csv<W: Write>(
    mut writer: W,
    reports: &[ProblemReport],
    date_format: DateFormat,
) -> Result<usize> {
    writer.write_all(UTF8_BOM)?;
    let mut csv = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    csv.write_record(REPORT_HEADERS)?;
    for report in reports {
        let status = report.status.to_string();
        let issue_date = to_display(&report.issue_date, date_format);
        let last_follow_up = to_display(&report.last_follow_up, date_format);
        csv.write_record([
            report.site_name.as_str(),
            report.ticket_id.as_str(),
            status.as_str(),
            report.reason.as_str(),
            report.last_update.as_str(),
            issue_date.as_str(),
            last_follow_up.as_str(),
        ])?;
    }
    csv.flush()?;
    Ok(reports.len())
}

/// Serializes `reports` to CSV bytes.
pub fn reports_to_csv(reports: &[ProblemReport], date_format: DateFormat) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_reports_csv(&mut buf, reports, date_format)?;
    Ok(buf)
}

/// Exports reports as CSV to `output` (stdout if `None`).
pub fn export_reports_csv(
    reports: &[ProblemReport],
    date_format: DateFormat,
    output: Option<&Path>,
) -> Result<usize> {
    let writer = open_output(output)?;
    let count =
        write_reports_csv(writer, reports, date_format).context("Failed to write CSV export")?;
    if let Some(path) = output {
        info!("Exported {} reports to {}", count, path.display());
    }
    Ok(count)
}
