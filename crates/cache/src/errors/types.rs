//! Core error types for the cache engine

use std::path::PathBuf;

/// Result type for cache operations
pub type Result<T> = std::result::Result<T, CacheError>;

/// Re-export CacheError as Error for convenience
pub use CacheError as Error;

/// Error type for the fallible parts of the cache engine
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// Invalid or out-of-range configuration
    #[error("configuration error: {message}")]
    Configuration {
        message: String,
        recovery_hint: RecoveryHint,
    },

    /// Configuration could not be encoded or decoded
    #[error("failed to {operation:?} cache configuration: {source}")]
    Serialization {
        operation: SerializationOp,
        #[source]
        source: serde_json::Error,
        recovery_hint: RecoveryHint,
    },

    /// I/O errors while reading configuration files
    #[error("I/O error during {operation} on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: std::io::Error,
        recovery_hint: RecoveryHint,
    },

    /// Compression/decompression error
    #[error("failed to {operation} cache value: {source}")]
    Compression {
        operation: &'static str,
        #[source]
        source: std::io::Error,
        recovery_hint: RecoveryHint,
    },
}

/// Recovery hints for error handling
#[derive(Debug, Clone, PartialEq)]
pub enum RecoveryHint {
    /// Use a default value
    UseDefault { value: String },

    /// Check file permissions
    CheckPermissions { path: PathBuf },

    /// Store the value uncompressed
    StoreUncompressed,

    /// Drop the entry and treat the lookup as a miss
    DropEntry,

    /// No automated recovery possible
    Manual { instructions: String },

    /// Operation can be safely ignored
    Ignore,
}

/// Serialization operation types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerializationOp {
    Serialize,
    Deserialize,
}
