pub use crate::changeset::{ChangeSet, FnChangeSet};
pub use crate::checksum::{ChecksumCalculator, Sha256ChecksumCalculator};
pub use crate::context::{BasicContext, Clock, Context, SystemClock};
pub use crate::errors::MigrateError;
pub use crate::history::HistorySource;
pub use crate::model::{
    ChangeSetResult, ChangeSetStatus, HistoryRecord, MigrationOutcome, RecordStatus,
};
pub use crate::schema::Schema;

#[cfg(feature = "memory")]
pub use crate::memory::InMemoryHistorySource;
