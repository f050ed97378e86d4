//! Cache configuration
//!
//! [`CacheConfig`] is immutable once a cache is built from it. Values that
//! arrive malformed (zero shards, probabilities outside `[0, 1]`, unknown
//! policy names) are absorbed into defaults by [`CacheConfig::normalized`]
//! rather than failing construction. Callers that prefer to fail fast, such as
//! a configuration generator, can use [`CacheConfig::validate`].

mod builder;

pub use builder::CacheConfigBuilder;

use crate::errors::{CacheError, RecoveryHint, Result, SerializationOp};
use crate::policy_kind::{AdmissionPolicyKind, EvictionPolicyKind};
use crate::serde_helpers::duration_millis;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default total number of entries
pub const DEFAULT_CACHE_SIZE: usize = 10_000;

/// Default number of independently locked shards
pub const DEFAULT_SHARD_COUNT: usize = 16;

/// Default interval between background expiry sweeps
pub const DEFAULT_CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

/// Default maximum key length in bytes
pub const DEFAULT_MAX_KEY_SIZE: usize = 1024;

/// Default maximum value length in bytes (1MB)
pub const DEFAULT_MAX_VALUE_SIZE: usize = 1024 * 1024;

/// Values at or below this size are never compressed
pub const DEFAULT_COMPRESSION_THRESHOLD: usize = 1024;

/// Default zstd compression level (3 = fast with good compression)
pub const DEFAULT_COMPRESSION_LEVEL: i32 = 3;

/// Default probability used by the probabilistic admission filter
pub const DEFAULT_ADMISSION_PROBABILITY: f64 = 0.8;

const MIN_COMPRESSION_LEVEL: i32 = 1;
const MAX_COMPRESSION_LEVEL: i32 = 22;

/// Configuration for a [`StrategicCache`](crate::StrategicCache)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// When false the cache is a no-op: writes are refused, reads miss
    pub enable_caching: bool,
    /// Total number of entries across all shards
    pub cache_size: usize,
    /// Default time-to-live for entries (zero = never expire)
    #[serde(rename = "ttl_ms", with = "duration_millis")]
    pub ttl: Duration,
    /// How often the background sweep reclaims expired entries (zero = never)
    #[serde(rename = "cleanup_interval_ms", with = "duration_millis")]
    pub cleanup_interval: Duration,
    /// Maximum key length in bytes (0 = unlimited)
    pub max_key_size: usize,
    /// Maximum value length in bytes before compression (0 = unlimited)
    pub max_value_size: usize,
    /// Compress values larger than `compression_threshold`
    pub enable_compression: bool,
    /// Minimum value size, exclusive, for compression to be attempted
    pub compression_threshold: usize,
    /// zstd compression level (1-22)
    pub compression_level: i32,
    /// Eviction policy run by every shard
    pub eviction_policy: EvictionPolicyKind,
    /// Admission filter for new keys entering a full shard
    pub admission_policy: AdmissionPolicyKind,
    /// Probability of admitting a candidate under the probabilistic filter
    pub admission_probability: f64,
    /// Number of independently locked shards
    pub shard_count: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enable_caching: true,
            cache_size: DEFAULT_CACHE_SIZE,
            ttl: Duration::ZERO,
            cleanup_interval: DEFAULT_CLEANUP_INTERVAL,
            max_key_size: DEFAULT_MAX_KEY_SIZE,
            max_value_size: DEFAULT_MAX_VALUE_SIZE,
            enable_compression: false,
            compression_threshold: DEFAULT_COMPRESSION_THRESHOLD,
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            eviction_policy: EvictionPolicyKind::default(),
            admission_policy: AdmissionPolicyKind::default(),
            admission_probability: DEFAULT_ADMISSION_PROBABILITY,
            shard_count: DEFAULT_SHARD_COUNT,
        }
    }
}

impl CacheConfig {
    /// Start a fluent builder from the defaults
    pub fn builder() -> CacheConfigBuilder {
        CacheConfigBuilder::new()
    }

    /// Parse a JSON document as emitted by the configuration generator
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Load a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CacheError::Io {
            path: path.to_path_buf(),
            operation: "read config file",
            source: e,
            recovery_hint: RecoveryHint::CheckPermissions {
                path: path.to_path_buf(),
            },
        })?;

        let config = Self::from_json_str(&content)?;
        tracing::debug!("Loaded cache configuration from {}", path.display());
        Ok(config)
    }

    /// Render the configuration as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| CacheError::Serialization {
            operation: SerializationOp::Serialize,
            source: e,
            recovery_hint: RecoveryHint::Ignore,
        })
    }

    /// Absorb malformed values into usable ones
    ///
    /// Applied once when a cache is constructed. Every adjustment is logged.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.shard_count == 0 {
            tracing::debug!("shard_count 0 treated as 1");
            self.shard_count = 1;
        }

        if self.cache_size == 0 {
            tracing::warn!("cache_size 0 is not usable, using {}", DEFAULT_CACHE_SIZE);
            self.cache_size = DEFAULT_CACHE_SIZE;
        }

        // Each shard must be able to hold at least one entry
        if self.shard_count > self.cache_size {
            tracing::debug!(
                "shard_count {} exceeds cache_size {}, clamping",
                self.shard_count,
                self.cache_size
            );
            self.shard_count = self.cache_size;
        }

        if self.admission_probability.is_nan() {
            tracing::warn!(
                "admission_probability is NaN, using {}",
                DEFAULT_ADMISSION_PROBABILITY
            );
            self.admission_probability = DEFAULT_ADMISSION_PROBABILITY;
        } else if !(0.0..=1.0).contains(&self.admission_probability) {
            let clamped = self.admission_probability.clamp(0.0, 1.0);
            tracing::warn!(
                "admission_probability {} outside [0, 1], using {}",
                self.admission_probability,
                clamped
            );
            self.admission_probability = clamped;
        }

        if !(MIN_COMPRESSION_LEVEL..=MAX_COMPRESSION_LEVEL).contains(&self.compression_level) {
            let clamped = self
                .compression_level
                .clamp(MIN_COMPRESSION_LEVEL, MAX_COMPRESSION_LEVEL);
            tracing::debug!(
                "compression_level {} clamped to {}",
                self.compression_level,
                clamped
            );
            self.compression_level = clamped;
        }

        self
    }

    /// Strictly check the configuration without adjusting it
    pub fn validate(&self) -> Result<()> {
        if self.shard_count == 0 {
            return Err(CacheError::configuration(
                "shard_count must be at least 1",
                1,
            ));
        }

        if self.cache_size == 0 {
            return Err(CacheError::configuration(
                "cache_size must be at least 1",
                DEFAULT_CACHE_SIZE,
            ));
        }

        if self.shard_count > self.cache_size {
            return Err(CacheError::configuration(
                format!(
                    "shard_count {} exceeds cache_size {}",
                    self.shard_count, self.cache_size
                ),
                self.cache_size,
            ));
        }

        if !(0.0..=1.0).contains(&self.admission_probability) {
            return Err(CacheError::configuration(
                format!(
                    "admission_probability {} must be within [0, 1]",
                    self.admission_probability
                ),
                DEFAULT_ADMISSION_PROBABILITY,
            ));
        }

        if !(MIN_COMPRESSION_LEVEL..=MAX_COMPRESSION_LEVEL).contains(&self.compression_level) {
            return Err(CacheError::configuration(
                format!(
                    "compression_level {} must be within {}..={}",
                    self.compression_level, MIN_COMPRESSION_LEVEL, MAX_COMPRESSION_LEVEL
                ),
                DEFAULT_COMPRESSION_LEVEL,
            ));
        }

        Ok(())
    }

    /// Largest per-shard capacity: `ceil(cache_size / shard_count)`
    pub fn shard_capacity(&self) -> usize {
        self.cache_size.div_ceil(self.shard_count.max(1)).max(1)
    }

    /// Entries shard `index` may hold
    ///
    /// The remainder of `cache_size / shard_count` goes to the lowest
    /// indices, so the capacities sum to exactly `cache_size`.
    pub fn capacity_of_shard(&self, index: usize) -> usize {
        let shards = self.shard_count.max(1);
        let base = self.cache_size / shards;
        let extra = usize::from(index < self.cache_size % shards);
        (base + extra).max(1)
    }

    /// Default TTL, `None` when entries never expire by time
    pub fn default_ttl(&self) -> Option<Duration> {
        (!self.ttl.is_zero()).then_some(self.ttl)
    }
}
