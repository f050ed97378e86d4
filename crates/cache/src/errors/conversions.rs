//! Error conversion utilities

use super::types::{CacheError, RecoveryHint, SerializationOp};

/// Convert serde_json errors to cache errors
impl From<serde_json::Error> for CacheError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            operation: SerializationOp::Deserialize,
            source: error,
            recovery_hint: RecoveryHint::Manual {
                instructions: "Check JSON format and field types".to_string(),
            },
        }
    }
}
