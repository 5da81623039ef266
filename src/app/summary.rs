//! User-facing text: import summaries and collection listings.

use colored::*;
use strum::IntoEnumIterator;

use crate::dates::{to_display, DateFormat};
use crate::error_handling::IssueKind;
use crate::import::StagedImport;
use crate::models::{ProblemReport, ReportStatus, Site};

/// Describes a staged import: how many reports will be applied, how many
/// rows were skipped and why, and the per-row issues.
pub fn format_import_summary(staged: &StagedImport) -> String {
    let stats = staged.stats();
    let mut lines = vec![format!(
        "{} of {} data row{} ready to import",
        staged.reports.len(),
        staged.data_rows,
        if staged.data_rows == 1 { "" } else { "s" }
    )];

    let skipped = stats.total_skipped();
    if skipped > 0 {
        lines.push(format!("Skipped rows ({} total):", skipped));
        for kind in IssueKind::iter().filter(IssueKind::skips_row) {
            let count = stats.get_count(kind);
            if count > 0 {
                lines.push(format!("   {}: {}", kind, count));
            }
        }
    }

    let warnings = stats.total_warnings();
    if warnings > 0 {
        lines.push(format!("Warnings ({} total):", warnings));
        for kind in IssueKind::iter().filter(|k| !k.skips_row()) {
            let count = stats.get_count(kind);
            if count > 0 {
                lines.push(format!("   {}: {}", kind, count));
            }
        }
    }

    for issue in &staged.issues {
        lines.push(format!("   - {}", issue));
    }
    lines.join("\n")
}

fn colored_status(status: ReportStatus) -> ColoredString {
    match status {
        ReportStatus::Up => status.to_string().green(),
        ReportStatus::Down => status.to_string().red(),
    }
}

/// One line per report, dates in the display format.
pub fn format_reports(reports: &[ProblemReport], date_format: DateFormat) -> String {
    if reports.is_empty() {
        return "No reports.".to_string();
    }
    reports
        .iter()
        .map(|r| {
            format!(
                "{}  {} [{}] {}  issued {}  follow-up {}  {}",
                r.id.dimmed(),
                r.site_name.bold(),
                r.ticket_id,
                colored_status(r.status),
                or_dash(&to_display(&r.issue_date, date_format)),
                or_dash(&to_display(&r.last_follow_up, date_format)),
                r.reason
            )
            .trim_end()
            .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per site with its identifying fields.
pub fn format_sites(sites: &[&Site]) -> String {
    if sites.is_empty() {
        return "No sites.".to_string();
    }
    sites
        .iter()
        .map(|s| {
            format!(
                "{}  {}  {}  SD-WAN {}  LAN {}",
                s.id.dimmed(),
                s.site_location_name.bold(),
                s.device_name,
                s.sdwan_site_id,
                s.lan_ip
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::RowIssue;

    fn report(id: &str) -> ProblemReport {
        ProblemReport {
            id: id.to_string(),
            site_name: "Hurghada".to_string(),
            ticket_id: "INC-3".to_string(),
            status: ReportStatus::Down,
            reason: "Flapping link".to_string(),
            last_update: String::new(),
            issue_date: "2025-01-21".to_string(),
            last_follow_up: String::new(),
        }
    }

    #[test]
    fn test_import_summary_lists_skips_and_warnings() {
        colored::control::set_override(false);
        let staged = StagedImport {
            batch_timestamp: 1,
            reports: vec![report("a")],
            issues: vec![
                RowIssue {
                    row_number: 3,
                    kind: IssueKind::InvalidStatus,
                    field: "Status",
                    value: "maybe".to_string(),
                },
                RowIssue {
                    row_number: 2,
                    kind: IssueKind::UnparseableDate,
                    field: "Issue Date",
                    value: "soon".to_string(),
                },
            ],
            data_rows: 2,
        };
        let summary = format_import_summary(&staged);
        assert!(summary.starts_with("1 of 2 data rows ready to import"));
        assert!(summary.contains("Skipped rows (1 total):"));
        assert!(summary.contains("   Invalid status: 1"));
        assert!(summary.contains("Warnings (1 total):"));
        assert!(summary.contains("row 3: Invalid status in Status (\"maybe\")"));
    }

    #[test]
    fn test_listing_uses_display_dates() {
        colored::control::set_override(false);
        let text = format_reports(&[report("r1")], DateFormat::MonthDayShortYear);
        assert!(text.contains("issued 01/21/25"));
        assert!(text.contains("follow-up -"));
        assert_eq!(format_reports(&[], DateFormat::MonthDayYear), "No reports.");
        assert_eq!(format_sites(&[]), "No sites.");
    }
}
