//! Key and value size validation

use crate::config::CacheConfig;
use crate::outcome::RejectReason;

/// Byte limits checked before a write touches a shard (0 = unlimited)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SizeLimits {
    pub max_key_size: usize,
    pub max_value_size: usize,
}

impl SizeLimits {
    pub fn from_config(config: &CacheConfig) -> Self {
        Self {
            max_key_size: config.max_key_size,
            max_value_size: config.max_value_size,
        }
    }

    /// Validate raw lengths, before any compression
    pub fn check(&self, key_len: usize, value_len: usize) -> Result<(), RejectReason> {
        if self.max_key_size > 0 && key_len > self.max_key_size {
            return Err(RejectReason::KeyTooLarge {
                size: key_len,
                limit: self.max_key_size,
            });
        }
        if self.max_value_size > 0 && value_len > self.max_value_size {
            return Err(RejectReason::ValueTooLarge {
                size: value_len,
                limit: self.max_value_size,
            });
        }
        Ok(())
    }
}
