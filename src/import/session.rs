//! Staged import lifecycle.
//!
//! ```text
//! Idle --stage--> Staged --confirm--> Applied (Idle)
//!                    \----cancel----> Cancelled (Idle)
//! ```
//!
//! The live collection is only touched by [`ImportSession::confirm`], and
//! only one import can be staged at a time.

use log::{debug, info};

use super::reconcile::reconcile;
use super::table::Table;
use super::types::{AppliedImport, ImportOptions, ImportPolicy, StagedImport};
use crate::error_handling::ImportError;
use crate::store::ReportStore;

/// Drives one import at a time from a parsed table to the live collection.
#[derive(Debug, Clone, Default)]
pub struct ImportSession {
    policy: ImportPolicy,
    staged: Option<StagedImport>,
}

impl ImportSession {
    pub fn new(policy: ImportPolicy) -> Self {
        Self {
            policy,
            staged: None,
        }
    }

    pub fn policy(&self) -> ImportPolicy {
        self.policy
    }

    pub fn staged(&self) -> Option<&StagedImport> {
        self.staged.as_ref()
    }

    pub fn is_staged(&self) -> bool {
        self.staged.is_some()
    }

    /// Reconciles `table` and holds the result for confirmation.
    ///
    /// # Errors
    ///
    /// [`ImportError::ImportPending`] if an import is already staged, or any
    /// reconciliation error. The session stays idle on failure.
    pub fn stage(
        &mut self,
        table: &Table,
        opts: &ImportOptions,
    ) -> Result<&StagedImport, ImportError> {
        if self.is_staged() {
            return Err(ImportError::ImportPending);
        }
        let staged = reconcile(table, opts)?;
        debug!(
            "Import staged: {} reports, {} rows skipped",
            staged.reports.len(),
            staged.skipped_rows()
        );
        Ok(self.staged.insert(staged))
    }

    /// Applies the staged reports to `store` according to the policy.
    ///
    /// # Errors
    ///
    /// [`ImportError::NothingStaged`] when idle. If the store rejects the
    /// batch the live collection is unchanged and the import stays staged.
    pub fn confirm(&mut self, store: &mut ReportStore) -> Result<AppliedImport, ImportError> {
        let staged = self.staged.take().ok_or(ImportError::NothingStaged)?;

        let imported = staged.reports.len();
        let result = match self.policy {
            ImportPolicy::Replace => store.replace_all(staged.reports.clone()),
            ImportPolicy::Append => store.append(staged.reports.clone()),
        };
        if let Err(e) = result {
            self.staged = Some(staged);
            return Err(e.into());
        }

        info!(
            "{} reports imported successfully ({:?})",
            imported, self.policy
        );
        Ok(AppliedImport {
            policy: self.policy,
            imported,
            total: store.len(),
        })
    }

    /// Discards the staged import, if any, without touching the live collection.
    pub fn cancel(&mut self) -> Option<StagedImport> {
        let staged = self.staged.take()?;
        debug!("Import cancelled: {} reports discarded", staged.reports.len());
        Some(staged)
    }
}
