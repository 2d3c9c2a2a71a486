use crate::errors::MigrateError;
use crate::model::HistoryRecord;
use async_trait::async_trait;

/// Ledger of past change-set executions.
///
/// `history` must reflect every previously saved record, ascending by id and
/// consistent with the order of the declared change-set list: the engine
/// aligns ledger and list positionally, never by id lookup. `save_record` is
/// an upsert keyed by id. Medium failures surface as errors and abort the
/// calling run; the engine does not retry them.
#[async_trait]
pub trait HistorySource: Send + Sync {
    async fn history(&self) -> Result<Vec<HistoryRecord>, MigrateError>;

    async fn save_record(&self, record: HistoryRecord) -> Result<(), MigrateError>;
}
