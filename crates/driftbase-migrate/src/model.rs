use driftbase_types::prelude::{Id, Timestamp};
use serde::{Deserialize, Serialize};

/// Ledger status of one recorded execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    Success,
    Failed,
}

/// Durable record of one change set's last known execution outcome. Never
/// mutated after creation; a retry of a previously failed id overwrites the
/// whole record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: Id,
    pub executed_at: Option<Timestamp>,
    pub status: RecordStatus,
    pub checksum: Option<String>,
}

impl HistoryRecord {
    pub fn new(
        id: Id,
        executed_at: Option<Timestamp>,
        status: RecordStatus,
        checksum: Option<String>,
    ) -> Self {
        Self {
            id,
            executed_at,
            status,
            checksum,
        }
    }
}

/// Per-step status, both as returned by `mutate` and as reported back to the
/// caller. The engine branches only on `Failed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeSetStatus {
    Applied,
    AlreadyApplied,
    Skipped,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSetResult {
    pub id: Id,
    pub status: ChangeSetStatus,
    pub executed_at: Option<Timestamp>,
}

impl ChangeSetResult {
    pub fn new(id: Id, status: ChangeSetStatus, executed_at: Option<Timestamp>) -> Self {
        Self {
            id,
            status,
            executed_at,
        }
    }
}

/// Outcome of one engine invocation, produced exactly once per run.
///
/// The structural variants report the first position where the ledger and
/// the declared list disagree; they carry no per-step results because the
/// run aborts before any execution. Payload fields always order the ledger
/// side before the declared side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MigrationOutcome {
    Success {
        results: Vec<ChangeSetResult>,
    },
    ApplicationFailed {
        results: Vec<ChangeSetResult>,
    },
    MissingChangeSet {
        history_id: Id,
        history_checksum: Option<String>,
        change_set_id: Option<Id>,
        change_set_checksum: Option<String>,
    },
    ChecksumMismatch {
        history_id: Id,
        history_checksum: Option<String>,
        change_set_id: Id,
        change_set_checksum: Option<String>,
    },
}

impl MigrationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, MigrationOutcome::Success { .. })
    }

    /// Per-step results, present on `Success` and `ApplicationFailed` only.
    pub fn results(&self) -> Option<&[ChangeSetResult]> {
        match self {
            MigrationOutcome::Success { results }
            | MigrationOutcome::ApplicationFailed { results } => Some(results),
            _ => None,
        }
    }
}
