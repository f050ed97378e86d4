//! Recovery utilities for cache errors

use super::types::{CacheError, RecoveryHint};

impl CacheError {
    /// Get the recovery hint for this error
    #[must_use]
    pub const fn recovery_hint(&self) -> &RecoveryHint {
        match self {
            Self::Configuration { recovery_hint, .. }
            | Self::Serialization { recovery_hint, .. }
            | Self::Io { recovery_hint, .. }
            | Self::Compression { recovery_hint, .. } => recovery_hint,
        }
    }

    /// Check if the caller can keep going with a default instead of failing
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self.recovery_hint(),
            RecoveryHint::UseDefault { .. }
                | RecoveryHint::StoreUncompressed
                | RecoveryHint::DropEntry
                | RecoveryHint::Ignore
        )
    }

    pub(crate) fn configuration(message: impl Into<String>, default: impl ToString) -> Self {
        Self::Configuration {
            message: message.into(),
            recovery_hint: RecoveryHint::UseDefault {
                value: default.to_string(),
            },
        }
    }
}
