//! Value compression for stored entries
//!
//! Values larger than the configured threshold are zstd-compressed when the
//! cache enables compression. A compressed form is kept only if it is
//! actually smaller; otherwise the raw bytes are stored. Size limits always
//! apply to the raw value, never to the stored form.

use crate::config::CacheConfig;
use crate::errors::{CacheError, RecoveryHint, Result};
use bytes::Bytes;
use zstd::stream::{decode_all as zstd_decode, encode_all as zstd_encode};

/// Stored form of a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Payload {
    Raw(Bytes),
    Compressed { data: Bytes, original_len: usize },
}

impl Payload {
    /// Bytes held in memory
    pub fn stored_len(&self) -> usize {
        match self {
            Self::Raw(data) | Self::Compressed { data, .. } => data.len(),
        }
    }

    /// Length of the value as the caller supplied it
    #[cfg(test)]
    pub fn original_len(&self) -> usize {
        match self {
            Self::Raw(data) => data.len(),
            Self::Compressed { original_len, .. } => *original_len,
        }
    }

    #[cfg(test)]
    pub fn is_compressed(&self) -> bool {
        matches!(self, Self::Compressed { .. })
    }
}

/// Compression settings shared by every shard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionCodec {
    /// Whether values may be compressed at all
    pub enabled: bool,
    /// Values strictly larger than this many bytes are compressed
    pub threshold: usize,
    /// zstd level (1-22)
    pub level: i32,
}

impl CompressionCodec {
    pub fn new(threshold: usize, level: i32) -> Self {
        Self {
            enabled: true,
            threshold,
            level,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            threshold: 0,
            level: 0,
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        if config.enable_compression {
            Self::new(config.compression_threshold, config.compression_level)
        } else {
            Self::disabled()
        }
    }

    #[inline]
    pub fn should_compress(&self, len: usize) -> bool {
        self.enabled && len > self.threshold
    }

    /// zstd-compress `data` at the configured level
    pub fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        zstd_encode(data, self.level).map_err(|source| CacheError::Compression {
            operation: "compress",
            source,
            recovery_hint: RecoveryHint::StoreUncompressed,
        })
    }

    /// Inflate a zstd frame
    pub fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        zstd_decode(data).map_err(|source| CacheError::Compression {
            operation: "decompress",
            source,
            recovery_hint: RecoveryHint::DropEntry,
        })
    }

    /// Choose the stored form of a value
    ///
    /// A compression failure is not fatal: the raw value is stored instead.
    pub(crate) fn encode(&self, value: Bytes) -> Payload {
        if !self.should_compress(value.len()) {
            return Payload::Raw(value);
        }

        match self.compress(&value) {
            Ok(compressed) if compressed.len() < value.len() => {
                tracing::trace!(
                    original = value.len(),
                    compressed = compressed.len(),
                    "compressed cache value"
                );
                Payload::Compressed {
                    original_len: value.len(),
                    data: Bytes::from(compressed),
                }
            }
            Ok(_) => Payload::Raw(value),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    len = value.len(),
                    "compression failed, storing value uncompressed"
                );
                Payload::Raw(value)
            }
        }
    }

    /// Recover the caller's bytes from a stored form
    pub(crate) fn decode(&self, payload: &Payload) -> Result<Bytes> {
        match payload {
            Payload::Raw(data) => Ok(data.clone()),
            Payload::Compressed { data, .. } => self.decompress(data).map(Bytes::from),
        }
    }
}

impl Default for CompressionCodec {
    fn default() -> Self {
        Self::disabled()
    }
}
