use driftbase_errors::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{0:?}")]
pub struct MigrateError(pub Box<ErrorObj>);

impl MigrateError {
    pub fn into_inner(self) -> ErrorObj {
        *self.0
    }

    pub fn usage(msg: &str) -> Self {
        MigrateError(Box::new(
            ErrorBuilder::new(codes::USAGE_INVALID)
                .user_msg("Migration invocation is invalid.")
                .dev_msg(msg)
                .build(),
        ))
    }

    pub fn ledger_unavailable(msg: &str) -> Self {
        MigrateError(Box::new(
            ErrorBuilder::new(codes::LEDGER_UNAVAILABLE)
                .user_msg("Migration history ledger is unavailable.")
                .dev_msg(msg)
                .build(),
        ))
    }

    pub fn checksum_compute(msg: &str) -> Self {
        MigrateError(Box::new(
            ErrorBuilder::new(codes::CHECKSUM_COMPUTE)
                .user_msg("Change set checksum could not be computed.")
                .dev_msg(msg)
                .build(),
        ))
    }

    pub fn internal(msg: &str) -> Self {
        MigrateError(Box::new(
            ErrorBuilder::new(codes::UNKNOWN_INTERNAL)
                .user_msg("Migration failed unexpectedly.")
                .dev_msg(msg)
                .build(),
        ))
    }
}
