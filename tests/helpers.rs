// Shared test helpers for building reports, tables and input files.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::path::PathBuf;

use site_tracker::config::REPORT_HEADERS;
use site_tracker::{ProblemReport, ReportStatus};
use tempfile::TempDir;

/// Builds a report with the given identity and canonical dates.
#[allow(dead_code)] // Used by other test files
pub fn report(
    id: &str,
    site_name: &str,
    ticket_id: &str,
    status: ReportStatus,
    issue_date: &str,
    last_follow_up: &str,
) -> ProblemReport {
    ProblemReport {
        id: id.to_string(),
        site_name: site_name.to_string(),
        ticket_id: ticket_id.to_string(),
        status,
        reason: String::new(),
        last_update: String::new(),
        issue_date: issue_date.to_string(),
        last_follow_up: last_follow_up.to_string(),
    }
}

/// A small collection exercising quoting, empty dates and both statuses.
#[allow(dead_code)] // Used by other test files
pub fn sample_reports() -> Vec<ProblemReport> {
    let mut fiber = report("1", "Cairo HQ", "INC-1001", ReportStatus::Down, "2025-01-21", "1999-12-31");
    fiber.reason = "Fiber cut, \"major\" outage".to_string();
    fiber.last_update = "Crew on site\nETA 4h".to_string();

    let mut power = report("2", "Alexandria DC", "INC-1002", ReportStatus::Up, "2024-02-29", "");
    power.reason = "Power restored".to_string();

    let router = report("3", "Giza Branch", "0042", ReportStatus::Down, "", "2099-12-31");
    vec![fiber, power, router]
}

/// The seven report headers joined as a CSV header line.
#[allow(dead_code)] // Used by other test files
pub fn header_line() -> String {
    REPORT_HEADERS.join(",")
}

/// Writes `content` to `name` inside `dir` and returns the path.
#[allow(dead_code)] // Used by other test files
pub fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}

/// Strips ids so collections can be compared by content.
#[allow(dead_code)] // Used by other test files
pub fn without_ids(reports: &[ProblemReport]) -> Vec<ProblemReport> {
    reports
        .iter()
        .cloned()
        .map(|mut r| {
            r.id.clear();
            r
        })
        .collect()
}
