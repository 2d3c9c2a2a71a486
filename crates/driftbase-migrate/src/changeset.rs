use crate::context::Context;
use crate::errors::MigrateError;
use crate::model::{ChangeSetResult, ChangeSetStatus};
use async_trait::async_trait;
use driftbase_types::prelude::Id;
use std::sync::Arc;

/// One declared, checksummed unit of migration work. Immutable once
/// constructed; only its effect (a history record) is ever persisted.
#[async_trait]
pub trait ChangeSet<C: Context>: Send + Sync {
    /// Identity within the declared list. The list's order is the canonical
    /// execution order; ids must be unique within one list.
    fn id(&self) -> &Id;

    /// Content fingerprint of the change set body, opaque to the engine.
    fn checksum(&self) -> Option<&str>;

    fn skip_checksum_validation(&self) -> bool {
        false
    }

    /// Executes the side-effecting operation against the target system.
    /// Failure is expressed as an error; the engine converts it into a
    /// failed result at its single call boundary.
    async fn mutate(&self, context: &C) -> Result<ChangeSetStatus, MigrateError>;

    /// Runs `mutate` and stamps the result with the context clock, read
    /// after the mutation returns so the timestamp reflects completion.
    async fn apply(&self, context: &C) -> Result<ChangeSetResult, MigrateError> {
        let status = self.mutate(context).await?;
        let executed_at = context.clock().now();
        Ok(ChangeSetResult::new(
            self.id().clone(),
            status,
            Some(executed_at),
        ))
    }
}

type MutateFn<C> = dyn Fn(&C) -> Result<ChangeSetStatus, MigrateError> + Send + Sync;

/// Closure-backed change set, the usual way to declare migration steps.
///
/// When no checksum is given the entry opts out of checksum validation;
/// `with_skip_checksum_validation` overrides that default either way.
pub struct FnChangeSet<C> {
    id: Id,
    checksum: Option<String>,
    skip_checksum_validation: bool,
    mutate: Arc<MutateFn<C>>,
}

impl<C: Context> FnChangeSet<C> {
    pub fn new(
        id: impl Into<String>,
        checksum: Option<&str>,
        mutate: impl Fn(&C) -> Result<ChangeSetStatus, MigrateError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: Id(id.into()),
            checksum: checksum.map(str::to_string),
            skip_checksum_validation: checksum.is_none(),
            mutate: Arc::new(mutate),
        }
    }

    pub fn with_skip_checksum_validation(mut self, skip: bool) -> Self {
        self.skip_checksum_validation = skip;
        self
    }
}

#[async_trait]
impl<C: Context> ChangeSet<C> for FnChangeSet<C> {
    fn id(&self) -> &Id {
        &self.id
    }

    fn checksum(&self) -> Option<&str> {
        self.checksum.as_deref()
    }

    fn skip_checksum_validation(&self) -> bool {
        self.skip_checksum_validation
    }

    async fn mutate(&self, context: &C) -> Result<ChangeSetStatus, MigrateError> {
        (self.mutate)(context)
    }
}
