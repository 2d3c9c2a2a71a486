use crate::changeset::ChangeSet;
use crate::context::Context;
use crate::errors::MigrateError;
use crate::history::HistorySource;
use crate::model::{
    ChangeSetResult, ChangeSetStatus, HistoryRecord, MigrationOutcome, RecordStatus,
};
use std::collections::HashSet;

/// Reconciliation and application engine.
///
/// One invocation reads the ledger once, aligns it positionally against the
/// declared list, executes whatever is still pending in declared order with
/// fail-fast-skip semantics, and persists a record per executed step.
/// Structural divergence between ledger and list aborts the run before any
/// execution or write. Callers must serialize invocations per ledger; the
/// engine assumes single-writer access.
pub struct Schema<H: HistorySource> {
    history: H,
}

impl<H: HistorySource> Schema<H> {
    pub fn new(history: H) -> Self {
        Self { history }
    }

    pub async fn apply<C: Context>(
        &self,
        context: &C,
        change_sets: &[Box<dyn ChangeSet<C>>],
    ) -> Result<MigrationOutcome, MigrateError> {
        let mut seen = HashSet::new();
        for change_set in change_sets {
            if !seen.insert(change_set.id().clone()) {
                return Err(MigrateError::usage(&format!(
                    "duplicate change set id: {}",
                    change_set.id()
                )));
            }
        }

        let history = self.history.history().await?;

        let mut verified: Vec<HistoryRecord> = Vec::new();
        let mut pending: Vec<&dyn ChangeSet<C>> = Vec::new();

        for i in 0..history.len().max(change_sets.len()) {
            let change_set = change_sets.get(i).map(|c| c.as_ref());

            let Some(record) = history.get(i) else {
                if let Some(change_set) = change_set {
                    pending.push(change_set);
                }
                continue;
            };

            // The ledger records an execution the declared list no longer
            // carries at this position.
            let Some(change_set) = change_set else {
                return Ok(MigrationOutcome::MissingChangeSet {
                    history_id: record.id.clone(),
                    history_checksum: record.checksum.clone(),
                    change_set_id: None,
                    change_set_checksum: None,
                });
            };

            if record.id != *change_set.id() {
                return Ok(MigrationOutcome::MissingChangeSet {
                    history_id: record.id.clone(),
                    history_checksum: record.checksum.clone(),
                    change_set_id: Some(change_set.id().clone()),
                    change_set_checksum: change_set.checksum().map(str::to_string),
                });
            }

            if !change_set.skip_checksum_validation()
                && record.checksum.as_deref() != change_set.checksum()
            {
                return Ok(MigrationOutcome::ChecksumMismatch {
                    history_id: record.id.clone(),
                    history_checksum: record.checksum.clone(),
                    change_set_id: change_set.id().clone(),
                    change_set_checksum: change_set.checksum().map(str::to_string),
                });
            }

            // A previously failed id is due for retry.
            if record.status == RecordStatus::Failed {
                pending.push(change_set);
                continue;
            }

            verified.push(record.clone());
        }

        tracing::debug!(
            target: "driftbase::migrate",
            verified = verified.len(),
            pending = pending.len(),
            "reconciled declared change sets against history"
        );

        let (failed, applied) = self.apply_pending(context, &pending).await?;

        let results: Vec<ChangeSetResult> = verified
            .into_iter()
            .map(|record| {
                ChangeSetResult::new(
                    record.id,
                    ChangeSetStatus::AlreadyApplied,
                    record.executed_at,
                )
            })
            .chain(applied)
            .collect();

        if failed {
            Ok(MigrationOutcome::ApplicationFailed { results })
        } else {
            Ok(MigrationOutcome::Success { results })
        }
    }

    /// Executes the pending subset in order. After the first failure the
    /// remaining entries are reported skipped and left out of the ledger, so
    /// the next run reconciles them as never attempted.
    async fn apply_pending<C: Context>(
        &self,
        context: &C,
        pending: &[&dyn ChangeSet<C>],
    ) -> Result<(bool, Vec<ChangeSetResult>), MigrateError> {
        let mut results = Vec::with_capacity(pending.len());
        let mut failed = false;

        for change_set in pending {
            if failed {
                results.push(ChangeSetResult::new(
                    change_set.id().clone(),
                    ChangeSetStatus::Skipped,
                    None,
                ));
                continue;
            }

            let result = match change_set.apply(context).await {
                Ok(result) => result,
                Err(err) => {
                    tracing::warn!(
                        target: "driftbase::migrate",
                        id = change_set.id().as_str(),
                        "change set mutation failed: {err}"
                    );
                    ChangeSetResult::new(change_set.id().clone(), ChangeSetStatus::Failed, None)
                }
            };
            failed = result.status == ChangeSetStatus::Failed;

            self.history
                .save_record(HistoryRecord::new(
                    change_set.id().clone(),
                    result.executed_at,
                    if failed {
                        RecordStatus::Failed
                    } else {
                        RecordStatus::Success
                    },
                    change_set.checksum().map(str::to_string),
                ))
                .await?;

            results.push(result);
        }

        Ok((failed, results))
    }
}
