//! Live application state.
//!
//! [`AppState`] owns the in-memory collections for one session. Every
//! successful mutation is written back to [`LocalStorage`] right away; a failed
//! write is logged and the in-memory state stays authoritative.

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::config::Config;
use crate::dates::{is_iso_date, to_iso, DateFormat};
use crate::error_handling::{ImportError, StorageError};
use crate::forms::{ReportForm, SiteForm};
use crate::import::{AppliedImport, ImportOptions, ImportSession, StagedImport, Table};
use crate::models::{search_sites, ProblemReport, Site, Theme};
use crate::storage::{
    load_reports, load_sites, load_theme, save_reports, save_sites, save_theme, LocalStorage,
};
use crate::store::{Record, RecordStore, ReportStore, SiteStore};

/// Builds a store from loaded records, dropping later duplicates of an id.
fn store_from_loaded<T: Record>(records: Vec<T>, key: &str) -> RecordStore<T> {
    let mut store = RecordStore::new();
    for record in records {
        let id = record.id().to_string();
        if store.insert(record).is_err() {
            warn!("Dropping duplicate {} record with id {}", key, id);
        }
    }
    store
}

/// Brings loaded report dates back to ISO form.
///
/// Dates that are not ISO are read in `date_format`; a report whose dates
/// cannot be read at all is dropped.
fn canonical_reports(records: Vec<ProblemReport>, date_format: DateFormat) -> Vec<ProblemReport> {
    records
        .into_iter()
        .filter_map(|mut report| {
            if report.has_canonical_dates() {
                return Some(report);
            }
            for date in [&mut report.issue_date, &mut report.last_follow_up] {
                if date.is_empty() || is_iso_date(date) {
                    continue;
                }
                match to_iso(date, date_format) {
                    Ok(iso) => {
                        warn!("Stored report {}: rewrote date {:?} as {}", report.id, date, iso);
                        *date = iso;
                    }
                    Err(e) => {
                        warn!("Dropping stored report {}: {}", report.id, e);
                        return None;
                    }
                }
            }
            Some(report)
        })
        .collect()
}

pub struct AppState {
    storage: LocalStorage,
    date_format: DateFormat,
    reports: ReportStore,
    sites: SiteStore,
    theme: Theme,
    import: ImportSession,
}

impl AppState {
    /// Opens the data directory and loads every persisted key.
    ///
    /// Missing or corrupt values load as empty collections; only an
    /// unusable data directory is an error.
    pub fn open(config: &Config) -> Result<Self, StorageError> {
        let storage = LocalStorage::open(&config.data_dir)?;
        let reports = store_from_loaded(
            canonical_reports(load_reports(&storage), config.date_format),
            "report",
        );
        let sites = store_from_loaded(load_sites(&storage), "site");
        let theme = load_theme(&storage);
        debug!(
            "Loaded {} reports, {} sites, theme {}",
            reports.len(),
            sites.len(),
            theme
        );
        Ok(Self {
            storage,
            date_format: config.date_format,
            reports,
            sites,
            theme,
            import: ImportSession::new(config.import_policy),
        })
    }

    pub fn date_format(&self) -> DateFormat {
        self.date_format
    }

    pub fn reports(&self) -> &[ProblemReport] {
        self.reports.records()
    }

    pub fn report(&self, id: &str) -> Option<&ProblemReport> {
        self.reports.get(id)
    }

    pub fn sites(&self) -> &[Site] {
        self.sites.records()
    }

    pub fn site(&self, id: &str) -> Option<&Site> {
        self.sites.get(id)
    }

    pub fn search_sites(&self, term: &str) -> Vec<&Site> {
        search_sites(self.sites.records(), term)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    // Write failures are logged by the storage layer.
    fn persist_reports(&self) {
        let _ = save_reports(&self.storage, self.reports.records());
    }

    fn persist_sites(&self) {
        let _ = save_sites(&self.storage, self.sites.records());
    }

    /// Validates `form` and appends a new report with a fresh timestamp id.
    pub fn add_report(&mut self, form: ReportForm, now_millis: i64) -> Result<&ProblemReport> {
        let id = self.reports.next_id(now_millis);
        let report = form
            .into_report(id.clone(), self.date_format)
            .context("Report not saved")?;
        self.reports.insert(report)?;
        self.persist_reports();
        self.reports
            .get(&id)
            .context("Inserted report is missing from the store")
    }

    /// Replaces the report `id` with the submitted form.
    pub fn edit_report(&mut self, id: &str, form: ReportForm) -> Result<()> {
        let report = form
            .into_report(id, self.date_format)
            .context("Report not saved")?;
        self.reports.update(report)?;
        self.persist_reports();
        Ok(())
    }

    /// Deletes the report `id`; an unknown id is a no-op returning `None`.
    pub fn delete_report(&mut self, id: &str) -> Option<ProblemReport> {
        let removed = self.reports.remove(id)?;
        self.persist_reports();
        Some(removed)
    }

    pub fn add_site(&mut self, form: SiteForm, now_millis: i64) -> Result<&Site> {
        let id = self.sites.next_id(now_millis);
        let site = form.into_site(id.clone()).context("Site not saved")?;
        self.sites.insert(site)?;
        self.persist_sites();
        self.sites
            .get(&id)
            .context("Inserted site is missing from the store")
    }

    pub fn edit_site(&mut self, id: &str, form: SiteForm) -> Result<()> {
        let site = form.into_site(id).context("Site not saved")?;
        self.sites.update(site)?;
        self.persist_sites();
        Ok(())
    }

    pub fn delete_site(&mut self, id: &str) -> Option<Site> {
        let removed = self.sites.remove(id)?;
        self.persist_sites();
        Some(removed)
    }

    /// Reconciles `table` and holds the result until confirmed or cancelled.
    pub fn stage_import(
        &mut self,
        table: &Table,
        opts: &ImportOptions,
    ) -> Result<&StagedImport, ImportError> {
        self.import.stage(table, opts)
    }

    pub fn staged_import(&self) -> Option<&StagedImport> {
        self.import.staged()
    }

    /// Applies the staged import to the live reports and persists them.
    pub fn confirm_import(&mut self) -> Result<AppliedImport, ImportError> {
        let applied = self.import.confirm(&mut self.reports)?;
        self.persist_reports();
        Ok(applied)
    }

    pub fn cancel_import(&mut self) -> Option<StagedImport> {
        self.import.cancel()
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        let _ = save_theme(&self.storage, theme);
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::{ImportPolicy, MissingDatePolicy};
    use crate::models::ReportStatus;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn config(dir: &TempDir) -> Config {
        Config {
            data_dir: dir.path().to_path_buf(),
            ..Default::default()
        }
    }

    fn form(site: &str) -> ReportForm {
        ReportForm {
            site_name: site.to_string(),
            ticket_id: "INC-1".to_string(),
            status: "UP".to_string(),
            issue_date: "01/21/25".to_string(),
            last_follow_up: "01/22/25".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_mutations_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let mut state = AppState::open(&config(&dir)).unwrap();
        let id = state.add_report(form("Suez"), 1_000).unwrap().id.clone();
        assert_eq!(id, "1000");
        state.add_report(form("Port Said"), 1_000).unwrap();
        state.toggle_theme();

        let reopened = AppState::open(&config(&dir)).unwrap();
        assert_eq!(reopened.reports().len(), 2);
        assert_eq!(reopened.reports()[1].id, "1001");
        assert_eq!(reopened.report("1000").unwrap().issue_date, "2025-01-21");
        assert_eq!(reopened.theme(), Theme::Light);
    }

    #[test]
    fn test_invalid_form_mutates_nothing() {
        let dir = TempDir::new().unwrap();
        let mut state = AppState::open(&config(&dir)).unwrap();
        let mut bad = form("Suez");
        bad.status = "maybe".to_string();
        assert!(state.add_report(bad, 1).is_err());
        assert!(state.reports().is_empty());
        assert!(!dir.path().join("dailyReports").exists());
    }

    #[test]
    fn test_edit_and_delete_report() {
        let dir = TempDir::new().unwrap();
        let mut state = AppState::open(&config(&dir)).unwrap();
        state.add_report(form("Suez"), 5).unwrap();

        let mut edited = form("Suez");
        edited.status = "down".to_string();
        state.edit_report("5", edited).unwrap();
        assert_eq!(state.report("5").unwrap().status, ReportStatus::Down);
        assert!(state.edit_report("404", form("x")).is_err());

        assert!(state.delete_report("404").is_none());
        assert_eq!(state.delete_report("5").unwrap().site_name, "Suez");
        assert!(state.reports().is_empty());
    }

    #[test]
    fn test_import_confirm_persists() {
        let dir = TempDir::new().unwrap();
        let mut state = AppState::open(&config(&dir)).unwrap();
        state.add_report(form("Old"), 1).unwrap();

        let table = Table::from_text_rows(vec![
            vec!["Site Name", "Ticket ID", "Status", "Reason", "Last Update", "Issue Date", "Last Follow Up"],
            vec!["Qena", "INC-2", "down", "", "", "03/04/25", ""],
        ]);
        let opts = ImportOptions::new(DateFormat::MonthDayShortYear, MissingDatePolicy::Empty)
            .with_clock(42, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        state.stage_import(&table, &opts).unwrap();
        assert_eq!(state.reports().len(), 1);

        let applied = state.confirm_import().unwrap();
        assert_eq!(applied.policy, ImportPolicy::Replace);
        assert!(state.staged_import().is_none());

        let reopened = AppState::open(&config(&dir)).unwrap();
        assert_eq!(reopened.reports().len(), 1);
        assert_eq!(reopened.reports()[0].id, "imported-42-0");
        assert_eq!(reopened.reports()[0].issue_date, "2025-03-04");
    }

    fn stored_report(id: &str) -> ProblemReport {
        ProblemReport {
            id: id.to_string(),
            site_name: "Minya".to_string(),
            ticket_id: "T".to_string(),
            status: ReportStatus::Up,
            reason: String::new(),
            last_update: String::new(),
            issue_date: String::new(),
            last_follow_up: String::new(),
        }
    }

    #[test]
    fn test_duplicate_ids_on_disk_are_dropped() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::open(dir.path()).unwrap();
        let report = stored_report("7");
        save_reports(&storage, &[report.clone(), report]).unwrap();
        let state = AppState::open(&config(&dir)).unwrap();
        assert_eq!(state.reports().len(), 1);
    }

    #[test]
    fn test_stored_dates_are_brought_to_iso_on_load() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::open(dir.path()).unwrap();

        let mut display = stored_report("1");
        display.issue_date = "06/12/25".to_string();
        display.last_follow_up = "2025-06-13".to_string();
        let mut impossible = stored_report("2");
        impossible.issue_date = "2024-02-30".to_string();
        let mut garbage = stored_report("3");
        garbage.last_follow_up = "next week".to_string();
        save_reports(&storage, &[display, impossible, garbage, stored_report("4")]).unwrap();

        let mut state = AppState::open(&config(&dir)).unwrap();
        let ids: Vec<&str> = state.reports().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1", "4"]);
        assert_eq!(state.report("1").unwrap().issue_date, "2025-06-12");
        assert!(state.reports().iter().all(ProblemReport::has_canonical_dates));

        // The next save writes only canonical dates back
        state.delete_report("4").unwrap();
        let reloaded = load_reports(&storage);
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].issue_date, "2025-06-12");
    }

    #[test]
    fn test_sites_add_search_delete() {
        let dir = TempDir::new().unwrap();
        let mut state = AppState::open(&config(&dir)).unwrap();
        let site_form = SiteForm {
            site_location_name: "Sohag".to_string(),
            device_name: "FG-60F".to_string(),
            sdwan_site_id: "77".to_string(),
            lan_ip: "10.77.0.1".to_string(),
            ..Default::default()
        };
        let id = state.add_site(site_form, 9).unwrap().id.clone();
        assert_eq!(state.search_sites("sohag").len(), 1);
        assert!(state.search_sites("cairo").is_empty());
        assert!(state.delete_site(&id).is_some());
        assert!(AppState::open(&config(&dir)).unwrap().sites().is_empty());
    }
}
