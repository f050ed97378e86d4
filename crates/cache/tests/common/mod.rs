//! Common test utilities and helpers

#![allow(dead_code)]

use std::sync::Once;
use std::time::Duration;
use strategic_cache::{CacheConfig, CacheConfigBuilder, EvictionPolicyKind, StrategicCache};

static TRACING: Once = Once::new();

/// Route library logs to the test writer, filtered by `RUST_LOG`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Builder preset for deterministic tests: no background sweeper
pub fn quiet_config() -> CacheConfigBuilder {
    CacheConfig::builder().with_cleanup_interval(Duration::ZERO)
}

/// Single-shard cache of `size` entries running `policy`
pub fn single_shard(size: usize, policy: EvictionPolicyKind) -> StrategicCache {
    init_tracing();
    StrategicCache::new(
        quiet_config()
            .with_cache_size(size)
            .with_shard_count(1)
            .with_eviction_policy(policy)
            .build(),
    )
}
