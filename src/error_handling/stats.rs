//! Import issue statistics.
//!
//! Counts row-level issues by kind so an import can be summarized without
//! walking the full issue list.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::IssueKind;

/// Per-kind counters of row issues found during one import.
///
/// All kinds are initialized to zero on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStats {
    counts: HashMap<IssueKind, usize>,
}

impl ImportStats {
    pub fn new() -> Self {
        let mut counts = HashMap::new();
        for kind in IssueKind::iter() {
            counts.insert(kind, 0);
        }
        ImportStats { counts }
    }

    /// Builds statistics from a sequence of issue kinds.
    pub fn from_kinds(kinds: impl IntoIterator<Item = IssueKind>) -> Self {
        let mut stats = Self::new();
        for kind in kinds {
            stats.increment(kind);
        }
        stats
    }

    pub fn increment(&mut self, kind: IssueKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
    }

    pub fn get_count(&self, kind: IssueKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Rows dropped from the staged set.
    pub fn total_skipped(&self) -> usize {
        IssueKind::iter()
            .filter(IssueKind::skips_row)
            .map(|k| self.get_count(k))
            .sum()
    }

    /// Issues that kept their row.
    pub fn total_warnings(&self) -> usize {
        IssueKind::iter()
            .filter(|k| !k.skips_row())
            .map(|k| self.get_count(k))
            .sum()
    }

    /// Non-zero counters in declaration order.
    pub fn non_zero(&self) -> Vec<(IssueKind, usize)> {
        IssueKind::iter()
            .map(|k| (k, self.get_count(k)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

impl Default for ImportStats {
    fn default() -> Self {
        Self::new()
    }
}
