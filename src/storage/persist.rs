//! Typed load/save of the persisted keys.
//!
//! Loading never fails: missing or corrupt values degrade to an empty
//! collection (or the default theme) and the problem is logged. Saving logs
//! failures and returns them; the in-memory state stays authoritative.

use log::{error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::LocalStorage;
use crate::config::{REPORTS_KEY, SITES_KEY, THEME_KEY};
use crate::error_handling::StorageError;
use crate::models::{ProblemReport, Site, Theme};

fn load_collection<T: DeserializeOwned>(storage: &LocalStorage, key: &str) -> Vec<T> {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            error!("Failed to read {}: {}", key, e);
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(records) => records,
        Err(e) => {
            error!("Stored {} is corrupt, starting empty: {}", key, e);
            Vec::new()
        }
    }
}

fn save_collection<T: Serialize>(
    storage: &LocalStorage,
    key: &str,
    records: &[T],
) -> Result<(), StorageError> {
    let result = serde_json::to_string(records)
        .map_err(StorageError::from)
        .and_then(|json| storage.set_item(key, &json));
    if let Err(e) = &result {
        error!("Failed to save {}: {}", key, e);
    }
    result
}

pub fn load_reports(storage: &LocalStorage) -> Vec<ProblemReport> {
    load_collection(storage, REPORTS_KEY)
}

pub fn save_reports(storage: &LocalStorage, reports: &[ProblemReport]) -> Result<(), StorageError> {
    save_collection(storage, REPORTS_KEY, reports)
}

pub fn load_sites(storage: &LocalStorage) -> Vec<Site> {
    load_collection(storage, SITES_KEY)
}

pub fn save_sites(storage: &LocalStorage, sites: &[Site]) -> Result<(), StorageError> {
    save_collection(storage, SITES_KEY, sites)
}

/// Reads the theme preference; anything but `light` or `dark` yields the default.
pub fn load_theme(storage: &LocalStorage) -> Theme {
    match storage.get_item(THEME_KEY) {
        Ok(Some(raw)) => Theme::from_stored(raw.trim()).unwrap_or_else(|| {
            warn!("Ignoring unknown stored theme {:?}", raw);
            Theme::default()
        }),
        Ok(None) => Theme::default(),
        Err(e) => {
            error!("Failed to read {}: {}", THEME_KEY, e);
            Theme::default()
        }
    }
}

pub fn save_theme(storage: &LocalStorage, theme: Theme) -> Result<(), StorageError> {
    let result = storage.set_item(THEME_KEY, theme.as_str());
    if let Err(e) = &result {
        error!("Failed to save {}: {}", THEME_KEY, e);
    }
    result
}
