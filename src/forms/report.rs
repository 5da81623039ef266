//! Problem report form.

use chrono::NaiveDate;

use super::required;
use crate::dates::{to_display, to_iso, today_for_display, DateFormat};
use crate::error_handling::ValidationError;
use crate::models::{ProblemReport, ReportStatus};

/// Report fields as entered by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportForm {
    pub site_name: String,
    pub ticket_id: String,
    pub status: String,
    pub reason: String,
    pub last_update: String,
    /// Display-format date
    pub issue_date: String,
    /// Display-format date
    pub last_follow_up: String,
}

impl ReportForm {
    /// A new-report form: status `UP`, both dates set to `today`.
    pub fn blank(today: NaiveDate, format: DateFormat) -> Self {
        let today = today_for_display(today, format);
        Self {
            status: ReportStatus::Up.to_string(),
            issue_date: today.clone(),
            last_follow_up: today,
            ..Default::default()
        }
    }

    /// Pre-fills the form for editing an existing report.
    pub fn from_report(report: &ProblemReport, format: DateFormat) -> Self {
        Self {
            site_name: report.site_name.clone(),
            ticket_id: report.ticket_id.clone(),
            status: report.status.to_string(),
            reason: report.reason.clone(),
            last_update: report.last_update.clone(),
            issue_date: to_display(&report.issue_date, format),
            last_follow_up: to_display(&report.last_follow_up, format),
        }
    }

    /// Validates the form and builds a report with the given id.
    ///
    /// Checks run in order: Site Name, Ticket ID, Status, Issue Date,
    /// Last Follow Up. The first failure is returned.
    pub fn into_report(
        self,
        id: impl Into<String>,
        format: DateFormat,
    ) -> Result<ProblemReport, ValidationError> {
        required(&self.site_name, "Site Name")?;
        required(&self.ticket_id, "Ticket ID")?;
        required(&self.status, "Status")?;
        let status = ReportStatus::parse(&self.status)
            .ok_or_else(|| ValidationError::InvalidStatus(self.status.clone()))?;
        let issue_date = convert_date(&self.issue_date, "Issue Date", format)?;
        let last_follow_up = convert_date(&self.last_follow_up, "Last Follow Up", format)?;

        Ok(ProblemReport {
            id: id.into(),
            site_name: self.site_name.trim().to_string(),
            ticket_id: self.ticket_id.trim().to_string(),
            status,
            reason: self.reason,
            last_update: self.last_update,
            issue_date,
            last_follow_up,
        })
    }
}

fn convert_date(
    value: &str,
    field: &'static str,
    format: DateFormat,
) -> Result<String, ValidationError> {
    required(value, field)?;
    to_iso(value, format).map_err(|source| ValidationError::InvalidDate {
        field,
        value: value.to_string(),
        expected: format.pattern(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::DateError;

    const FMT: DateFormat = DateFormat::MonthDayShortYear;

    fn filled() -> ReportForm {
        ReportForm {
            site_name: "Giza DC".to_string(),
            ticket_id: "INC-7".to_string(),
            status: "down".to_string(),
            reason: "Router reboot loop".to_string(),
            last_update: "Vendor engaged".to_string(),
            issue_date: "10/14/26".to_string(),
            last_follow_up: "10/16/2026".to_string(),
        }
    }

    #[test]
    fn test_blank_form_defaults() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let form = ReportForm::blank(today, FMT);
        assert_eq!(form.status, "UP");
        assert_eq!(form.issue_date, "10/16/26");
        assert_eq!(form.last_follow_up, "10/16/26");
        assert!(form.site_name.is_empty());
    }

    #[test]
    fn test_submit_converts_dates_and_status() {
        let report = filled().into_report("1", FMT).unwrap();
        assert_eq!(report.id, "1");
        assert_eq!(report.status, ReportStatus::Down);
        assert_eq!(report.issue_date, "2026-10-14");
        assert_eq!(report.last_follow_up, "2026-10-16");
        assert!(report.has_canonical_dates());
    }

    #[test]
    fn test_required_fields() {
        let mut form = filled();
        form.site_name = "  ".to_string();
        assert_eq!(
            form.into_report("1", FMT),
            Err(ValidationError::MissingField("Site Name"))
        );

        let mut form = filled();
        form.ticket_id.clear();
        assert_eq!(
            form.into_report("1", FMT),
            Err(ValidationError::MissingField("Ticket ID"))
        );

        let mut form = filled();
        form.last_follow_up.clear();
        assert_eq!(
            form.into_report("1", FMT),
            Err(ValidationError::MissingField("Last Follow Up"))
        );
    }

    #[test]
    fn test_rejects_unknown_status() {
        let mut form = filled();
        form.status = "degraded".to_string();
        assert_eq!(
            form.into_report("1", FMT),
            Err(ValidationError::InvalidStatus("degraded".to_string()))
        );
    }

    #[test]
    fn test_rejects_impossible_date() {
        let mut form = filled();
        form.issue_date = "02/30/24".to_string();
        match form.into_report("1", FMT) {
            Err(ValidationError::InvalidDate {
                field,
                expected,
                source,
                ..
            }) => {
                assert_eq!(field, "Issue Date");
                assert_eq!(expected, "mm/dd/yy");
                assert!(matches!(source, DateError::NotACalendarDate { .. }));
            }
            other => panic!("expected invalid date, got {:?}", other),
        }
    }

    #[test]
    fn test_edit_round_trip_keeps_values() {
        let report = filled().into_report("abc", FMT).unwrap();
        let form = ReportForm::from_report(&report, FMT);
        assert_eq!(form.issue_date, "10/14/26");
        assert_eq!(form.status, "DOWN");
        assert_eq!(form.into_report("abc", FMT).unwrap(), report);
    }
}
