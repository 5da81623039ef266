//! Tests for state persistence across sessions.

use site_tracker::config::{REPORTS_KEY, THEME_KEY};
use site_tracker::forms::{ReportForm, SiteForm};
use site_tracker::storage::{save_reports, LocalStorage};
use site_tracker::{AppState, Config, Theme};
use tempfile::TempDir;

#[path = "helpers.rs"]
mod helpers;

use helpers::sample_reports;

fn config(temp_dir: &TempDir) -> Config {
    Config {
        data_dir: temp_dir.path().join("data"),
        ..Default::default()
    }
}

#[test]
fn test_fresh_directory_starts_empty_and_dark() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let state = AppState::open(&config(&temp_dir)).unwrap();
    assert!(state.reports().is_empty());
    assert!(state.sites().is_empty());
    assert_eq!(state.theme(), Theme::Dark);
    assert!(temp_dir.path().join("data").is_dir());
}

#[test]
fn test_corrupt_values_degrade_gracefully() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = config(&temp_dir);
    let storage = LocalStorage::open(&config.data_dir).unwrap();
    storage.set_item(REPORTS_KEY, "[{\"id\": 1}]").unwrap();
    storage.set_item(THEME_KEY, "sepia").unwrap();

    let state = AppState::open(&config).unwrap();
    assert!(state.reports().is_empty());
    assert_eq!(state.theme(), Theme::Dark);
}

#[test]
fn test_delete_removes_exactly_one_entry() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = config(&temp_dir);
    let storage = LocalStorage::open(&config.data_dir).unwrap();
    save_reports(&storage, &sample_reports()).unwrap();

    let mut state = AppState::open(&config).unwrap();
    assert_eq!(state.reports().len(), 3);
    assert!(state.delete_report("does-not-exist").is_none());
    assert_eq!(state.reports().len(), 3);

    let removed = state.delete_report("2").unwrap();
    assert_eq!(removed.site_name, "Alexandria DC");
    let ids: Vec<&str> = state.reports().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);

    let reopened = AppState::open(&config).unwrap();
    assert_eq!(reopened.reports().len(), 2);
    assert!(reopened.report("2").is_none());
}

#[test]
fn test_reports_sites_and_theme_survive_restart() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = config(&temp_dir);

    {
        let mut state = AppState::open(&config).unwrap();
        let form = ReportForm {
            site_name: "Luxor".to_string(),
            ticket_id: "INC-77".to_string(),
            status: "DOWN".to_string(),
            issue_date: "03/01/25".to_string(),
            last_follow_up: "03/02/25".to_string(),
            ..Default::default()
        };
        state.add_report(form, 1_735_689_600_000).unwrap();
        let site = SiteForm {
            site_location_name: "Luxor".to_string(),
            device_name: "FG-100F".to_string(),
            sdwan_site_id: "12".to_string(),
            lan_ip: "10.12.0.1".to_string(),
            el_l2_ip: "172.16.12.2".to_string(),
            ..Default::default()
        };
        state.add_site(site, 1_735_689_600_000).unwrap();
        state.set_theme(Theme::Light);
    }

    let state = AppState::open(&config).unwrap();
    let report = &state.reports()[0];
    assert_eq!(report.id, "1735689600000");
    assert_eq!(report.issue_date, "2025-03-01");
    assert!(report.has_canonical_dates());
    assert_eq!(
        state.sites()[0].el_info.l2_ip.as_deref(),
        Some("172.16.12.2")
    );
    assert_eq!(state.theme(), Theme::Light);
}
