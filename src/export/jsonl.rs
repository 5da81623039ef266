//! JSONL export of problem reports.
//!
//! Each line is one report in its persisted shape (camelCase keys, ISO dates),
//! ready for `jq` or bulk loading.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use super::output::open_output;
use crate::models::ProblemReport;

/// Writes one JSON object per report to `writer`.
pub fn write_reports_jsonl<W: Write>(mut writer: W, reports: &[ProblemReport]) -> Result<usize> {
    for report in reports {
        serde_json::to_writer(&mut writer, report)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(reports.len())
}

/// Exports reports as JSONL to `output` (stdout if `None`).
pub fn export_reports_jsonl(reports: &[ProblemReport], output: Option<&Path>) -> Result<usize> {
    let writer = open_output(output)?;
    let count = write_reports_jsonl(writer, reports).context("Failed to write JSONL export")?;
    if let Some(path) = output {
        info!("Exported {} reports to {}", count, path.display());
    }
    Ok(count)
}
