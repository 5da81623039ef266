//! In-memory record collections.
//!
//! A [`RecordStore`] is the single owner of a live collection. It keeps
//! insertion order, guarantees id uniqueness and bumps a version counter on
//! every successful mutation so callers can tell when state must be persisted
//! or re-rendered. Batch operations are all-or-nothing.

use std::collections::HashSet;

use crate::error_handling::StoreError;
use crate::models::{ProblemReport, Site};

/// Anything with a stable unique id.
pub trait Record: Clone {
    fn id(&self) -> &str;
}

impl Record for ProblemReport {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Site {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Owned, version-stamped collection of records with unique ids.
#[derive(Debug, Clone)]
pub struct RecordStore<T: Record> {
    records: Vec<T>,
    version: u64,
}

/// Live problem report collection.
pub type ReportStore = RecordStore<ProblemReport>;
/// Live site collection.
pub type SiteStore = RecordStore<Site>;

impl<T: Record> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> RecordStore<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            version: 0,
        }
    }

    /// Builds a store from previously persisted records.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if two records share an id.
    pub fn from_records(records: Vec<T>) -> Result<Self, StoreError> {
        check_unique(&records, &HashSet::new())?;
        Ok(Self {
            records,
            version: 0,
        })
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of successful mutations since the store was created.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Appends a new record.
    pub fn insert(&mut self, record: T) -> Result<(), StoreError> {
        if self.contains(record.id()) {
            return Err(StoreError::DuplicateId(record.id().to_string()));
        }
        self.records.push(record);
        self.bump();
        Ok(())
    }

    /// Replaces the record with the same id, keeping its position.
    pub fn update(&mut self, record: T) -> Result<(), StoreError> {
        let slot = self
            .records
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or_else(|| StoreError::UnknownId(record.id().to_string()))?;
        *slot = record;
        self.bump();
        Ok(())
    }

    /// Removes the record with `id`, returning it.
    ///
    /// Removing an unknown id is a no-op and leaves the version unchanged.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.records.iter().position(|r| r.id() == id)?;
        let removed = self.records.remove(index);
        self.bump();
        Some(removed)
    }

    /// Replaces the whole collection.
    pub fn replace_all(&mut self, records: Vec<T>) -> Result<(), StoreError> {
        check_unique(&records, &HashSet::new())?;
        self.records = records;
        self.bump();
        Ok(())
    }

    /// Appends a batch, rejecting it entirely if any id collides.
    pub fn append(&mut self, records: Vec<T>) -> Result<(), StoreError> {
        let existing: HashSet<&str> = self.records.iter().map(|r| r.id()).collect();
        check_unique(&records, &existing)?;
        self.records.extend(records);
        self.bump();
        Ok(())
    }

    /// Generates a timestamp id that is not in use.
    ///
    /// Starts at `now_millis` and counts upward past any taken ids.
    pub fn next_id(&self, now_millis: i64) -> String {
        let mut candidate = now_millis;
        loop {
            let id = candidate.to_string();
            if !self.contains(&id) {
                return id;
            }
            candidate += 1;
        }
    }

    fn bump(&mut self) {
        self.version += 1;
    }
}

fn check_unique<T: Record>(records: &[T], existing: &HashSet<&str>) -> Result<(), StoreError> {
    let mut seen = HashSet::new();
    for record in records {
        let id = record.id();
        if existing.contains(id) || !seen.insert(id) {
            return Err(StoreError::DuplicateId(id.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReportStatus;

    fn report(id: &str) -> ProblemReport {
        ProblemReport {
            id: id.to_string(),
            site_name: format!("Site {}", id),
            ticket_id: format!("T-{}", id),
            status: ReportStatus::Up,
            reason: String::new(),
            last_update: String::new(),
            issue_date: "2025-01-01".to_string(),
            last_follow_up: String::new(),
        }
    }

    fn store_with(ids: &[&str]) -> ReportStore {
        RecordStore::from_records(ids.iter().map(|id| report(id)).collect()).unwrap()
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let mut store = store_with(&["a"]);
        assert_eq!(
            store.insert(report("a")),
            Err(StoreError::DuplicateId("a".to_string()))
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn test_update_keeps_position_and_id() {
        let mut store = store_with(&["a", "b", "c"]);
        let mut edited = report("b");
        edited.status = ReportStatus::Down;
        store.update(edited).unwrap();
        assert_eq!(store.records()[1].status, ReportStatus::Down);
        assert_eq!(store.records()[1].id, "b");
        assert_eq!(store.version(), 1);
    }

    #[test]
    fn test_update_unknown_id_fails() {
        let mut store = store_with(&["a"]);
        assert_eq!(
            store.update(report("z")),
            Err(StoreError::UnknownId("z".to_string()))
        );
    }

    #[test]
    fn test_remove_exactly_one() {
        let mut store = store_with(&["a", "b", "c"]);
        let removed = store.remove("b").unwrap();
        assert_eq!(removed.id, "b");
        let ids: Vec<&str> = store.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut store = store_with(&["a", "b"]);
        assert!(store.remove("nope").is_none());
        assert_eq!(store.len(), 2);
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn test_replace_all_rejects_duplicates_atomically() {
        let mut store = store_with(&["a"]);
        let result = store.replace_all(vec![report("x"), report("x")]);
        assert!(result.is_err());
        assert_eq!(store.records()[0].id, "a");

        store.replace_all(vec![report("x"), report("y")]).unwrap();
        assert_eq!(store.len(), 2);
        assert!(!store.contains("a"));
    }

    #[test]
    fn test_append_rejects_collision_with_live_set() {
        let mut store = store_with(&["a", "b"]);
        assert_eq!(
            store.append(vec![report("c"), report("b")]),
            Err(StoreError::DuplicateId("b".to_string()))
        );
        assert_eq!(store.len(), 2);

        store.append(vec![report("c"), report("d")]).unwrap();
        assert_eq!(store.len(), 4);
        assert_eq!(store.records()[3].id, "d");
    }

    #[test]
    fn test_from_records_rejects_duplicates() {
        let result = ReportStore::from_records(vec![report("a"), report("a")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_next_id_skips_taken_timestamps() {
        let store = store_with(&["1000", "1001"]);
        assert_eq!(store.next_id(1000), "1002");
        assert_eq!(store.next_id(5000), "5000");
    }

    #[test]
    fn test_version_counts_mutations() {
        let mut store = ReportStore::new();
        store.insert(report("a")).unwrap();
        store.insert(report("b")).unwrap();
        store.remove("a");
        assert_eq!(store.version(), 3);
    }
}
