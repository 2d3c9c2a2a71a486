use crate::codes::ErrorCode;
use crate::retry::RetryClass;
use serde::{Deserialize, Serialize};

/// The error payload carried by every crate-level error wrapper. The user
/// message is safe to surface; the dev message carries operator detail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorObj {
    pub code: String,
    pub message_user: String,
    pub message_dev: Option<String>,
    pub retry: RetryClass,
}

pub struct ErrorBuilder {
    code: ErrorCode,
    message_user: Option<String>,
    message_dev: Option<String>,
}

impl ErrorBuilder {
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            message_user: None,
            message_dev: None,
        }
    }

    pub fn user_msg(mut self, msg: impl Into<String>) -> Self {
        self.message_user = Some(msg.into());
        self
    }

    pub fn dev_msg(mut self, msg: impl Into<String>) -> Self {
        self.message_dev = Some(msg.into());
        self
    }

    pub fn build(self) -> ErrorObj {
        ErrorObj {
            code: self.code.code.to_string(),
            message_user: self
                .message_user
                .unwrap_or_else(|| "Operation failed.".to_string()),
            message_dev: self.message_dev,
            retry: self.code.retry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes;

    #[test]
    fn builder_carries_code_and_messages() {
        let err = ErrorBuilder::new(codes::LEDGER_UNAVAILABLE)
            .user_msg("Migration history ledger is unavailable.")
            .dev_msg("connect timeout after 5s")
            .build();

        assert_eq!(err.code, "MIGRATE.LEDGER_UNAVAILABLE");
        assert_eq!(err.message_user, "Migration history ledger is unavailable.");
        assert_eq!(err.message_dev.as_deref(), Some("connect timeout after 5s"));
        assert!(err.retry.is_retryable());
        assert_eq!(err.retry.as_str(), "transient");
    }

    #[test]
    fn builder_defaults_user_message() {
        let err = ErrorBuilder::new(codes::UNKNOWN_INTERNAL).build();
        assert_eq!(err.message_user, "Operation failed.");
        assert_eq!(err.message_dev, None);
        assert_eq!(err.retry, RetryClass::None);
    }

    #[test]
    fn error_obj_roundtrips_through_json() {
        let err = ErrorBuilder::new(codes::USAGE_INVALID)
            .dev_msg("duplicate change set id: 7")
            .build();
        let json = serde_json::to_string(&err).expect("serialize");
        let parsed: ErrorObj = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, err);
    }
}
