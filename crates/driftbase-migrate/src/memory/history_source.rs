use crate::errors::MigrateError;
use crate::history::HistorySource;
use crate::model::HistoryRecord;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

/// History ledger held in memory, insertion ordered. Useful for tests and
/// for rehearsing a migration without a durable medium.
#[derive(Default, Clone)]
pub struct InMemoryHistorySource {
    inner: Arc<RwLock<Vec<HistoryRecord>>>,
}

impl InMemoryHistorySource {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistorySource for InMemoryHistorySource {
    async fn history(&self) -> Result<Vec<HistoryRecord>, MigrateError> {
        Ok(self.inner.read().clone())
    }

    async fn save_record(&self, record: HistoryRecord) -> Result<(), MigrateError> {
        let mut guard = self.inner.write();
        if let Some(existing) = guard.iter_mut().find(|r| r.id == record.id) {
            *existing = record;
        } else {
            guard.push(record);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordStatus;
    use driftbase_types::prelude::{Id, Timestamp};

    #[tokio::test]
    async fn save_record_upserts_in_place() {
        let source = InMemoryHistorySource::new();

        let first = HistoryRecord::new(
            Id("1".into()),
            None,
            RecordStatus::Failed,
            Some("cs1".into()),
        );
        let second = HistoryRecord::new(
            Id("2".into()),
            Some(Timestamp(5)),
            RecordStatus::Success,
            Some("cs2".into()),
        );
        source.save_record(first).await.unwrap();
        source.save_record(second.clone()).await.unwrap();

        let retried = HistoryRecord::new(
            Id("1".into()),
            Some(Timestamp(9)),
            RecordStatus::Success,
            Some("cs1".into()),
        );
        source.save_record(retried.clone()).await.unwrap();

        // The retried record replaces the failed one at its original position.
        assert_eq!(source.history().await.unwrap(), vec![retried, second]);
    }
}
