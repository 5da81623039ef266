//! Problem report records.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Ticket status of a site problem.
///
/// Parsing is case-insensitive; the canonical form is uppercase.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum ReportStatus {
    #[default]
    Up,
    Down,
}

impl ReportStatus {
    /// Parses a user or spreadsheet supplied status, ignoring surrounding
    /// whitespace and case.
    pub fn parse(value: &str) -> Option<Self> {
        value.trim().parse().ok()
    }
}

/// A daily problem report for one site ticket.
///
/// `issue_date` and `last_follow_up` hold canonical ISO dates (`yyyy-mm-dd`) or
/// are empty; display formats never reach this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemReport {
    pub id: String,
    pub site_name: String,
    pub ticket_id: String,
    pub status: ReportStatus,
    pub reason: String,
    pub last_update: String,
    pub issue_date: String,
    pub last_follow_up: String,
}

impl ProblemReport {
    /// Returns true if both date fields are empty or real ISO calendar dates.
    pub fn has_canonical_dates(&self) -> bool {
        [&self.issue_date, &self.last_follow_up]
            .iter()
            .all(|d| d.is_empty() || crate::dates::is_iso_date(d))
    }
}
