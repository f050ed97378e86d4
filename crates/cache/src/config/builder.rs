//! Builder for creating cache configurations

use super::CacheConfig;
use crate::policy_kind::{AdmissionPolicyKind, EvictionPolicyKind};
use std::time::Duration;

/// Fluent builder for [`CacheConfig`]
#[derive(Debug, Clone, Default)]
pub struct CacheConfigBuilder {
    config: CacheConfig,
}

impl CacheConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: CacheConfig::default(),
        }
    }

    /// Enable or disable caching altogether
    pub fn with_caching_enabled(mut self, enabled: bool) -> Self {
        self.config.enable_caching = enabled;
        self
    }

    /// Set total entry capacity
    pub fn with_cache_size(mut self, cache_size: usize) -> Self {
        self.config.cache_size = cache_size;
        self
    }

    /// Set default TTL (zero disables expiry)
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.config.ttl = ttl;
        self
    }

    /// Set background sweep interval (zero disables the sweep)
    pub fn with_cleanup_interval(mut self, interval: Duration) -> Self {
        self.config.cleanup_interval = interval;
        self
    }

    /// Set key and value size limits in bytes
    pub fn with_size_limits(mut self, max_key_size: usize, max_value_size: usize) -> Self {
        self.config.max_key_size = max_key_size;
        self.config.max_value_size = max_value_size;
        self
    }

    /// Enable compression above `threshold` bytes
    pub fn with_compression(mut self, threshold: usize, level: i32) -> Self {
        self.config.enable_compression = true;
        self.config.compression_threshold = threshold;
        self.config.compression_level = level;
        self
    }

    /// Set eviction policy
    pub fn with_eviction_policy(mut self, policy: EvictionPolicyKind) -> Self {
        self.config.eviction_policy = policy;
        self
    }

    /// Admit every candidate
    pub fn with_always_admission(mut self) -> Self {
        self.config.admission_policy = AdmissionPolicyKind::Always;
        self
    }

    /// Admit candidates into full shards with `probability`
    pub fn with_probabilistic_admission(mut self, probability: f64) -> Self {
        self.config.admission_policy = AdmissionPolicyKind::Probabilistic;
        self.config.admission_probability = probability;
        self
    }

    /// Set shard count
    pub fn with_shard_count(mut self, shard_count: usize) -> Self {
        self.config.shard_count = shard_count;
        self
    }

    /// Build the configuration
    pub fn build(self) -> CacheConfig {
        self.config
    }
}
