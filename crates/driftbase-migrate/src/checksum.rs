use crate::errors::MigrateError;
use sha2::{Digest, Sha256};

/// Computes the content fingerprint declared for a change set body. The
/// engine never computes checksums itself, it only compares them; callers
/// pick the strategy and feed the result into their change sets.
pub trait ChecksumCalculator: Send + Sync {
    fn checksum(&self, body: &[u8]) -> Result<String, MigrateError>;
}

/// SHA-256 fingerprints in `sha256:<hex>` form.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256ChecksumCalculator;

impl ChecksumCalculator for Sha256ChecksumCalculator {
    fn checksum(&self, body: &[u8]) -> Result<String, MigrateError> {
        let mut hasher = Sha256::new();
        hasher.update(body);
        Ok(format!("sha256:{}", hex::encode(hasher.finalize())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_prefixed_hex() {
        let calculator = Sha256ChecksumCalculator;
        let digest = calculator.checksum(b"CREATE TYPE shipping_zone").expect("checksum");
        let hex_part = digest.strip_prefix("sha256:").expect("prefix");
        assert_eq!(hex_part.len(), 64);
        assert!(hex_part.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn digest_is_stable_and_body_sensitive() {
        let calculator = Sha256ChecksumCalculator;
        let first = calculator.checksum(b"step body").expect("checksum");
        let second = calculator.checksum(b"step body").expect("checksum");
        let other = calculator.checksum(b"step body v2").expect("checksum");
        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    struct NonEmptyCalculator;

    impl ChecksumCalculator for NonEmptyCalculator {
        fn checksum(&self, body: &[u8]) -> Result<String, MigrateError> {
            if body.is_empty() {
                return Err(MigrateError::checksum_compute("empty change set body"));
            }
            Sha256ChecksumCalculator.checksum(body)
        }
    }

    #[test]
    fn calculator_failures_carry_the_checksum_code() {
        let err = NonEmptyCalculator.checksum(b"").expect_err("empty body");
        assert_eq!(err.into_inner().code, "MIGRATE.CHECKSUM_COMPUTE");
    }
}
