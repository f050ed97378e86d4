//! Cache construction

use crate::config::CacheConfig;
use crate::shard::{Shard, ShardRouter};
use crate::ttl::{Sweeper, TtlManager};
use parking_lot::Mutex;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use super::types::{CacheInner, Engine, StrategicCache};

impl StrategicCache {
    /// Create a cache from `config`
    ///
    /// Out-of-range values are normalized rather than rejected, so
    /// construction cannot fail. With caching disabled no shards are
    /// allocated and no sweeper is started.
    pub fn new(config: CacheConfig) -> Self {
        let config = config.normalized();

        if !config.enable_caching {
            tracing::info!("caching disabled, cache will store nothing");
            return Self::from_parts(config, None, None);
        }

        let shards: Arc<[Shard]> = (0..config.shard_count)
            .map(|index| Shard::new(index, &config))
            .collect();
        let engine = Engine {
            router: ShardRouter::new(config.shard_count),
            ttl: TtlManager::new(config.default_ttl()),
            shards: Arc::clone(&shards),
        };
        let sweeper = Sweeper::spawn(shards, config.cleanup_interval);

        tracing::info!(
            cache_size = config.cache_size,
            shard_count = config.shard_count,
            max_shard_capacity = config.shard_capacity(),
            eviction_policy = %config.eviction_policy,
            admission_policy = %config.admission_policy,
            compression = config.enable_compression,
            sweeper = sweeper.is_some(),
            "strategic cache created"
        );

        Self::from_parts(config, Some(engine), sweeper)
    }

    fn from_parts(config: CacheConfig, engine: Option<Engine>, sweeper: Option<Sweeper>) -> Self {
        Self {
            inner: Arc::new(CacheInner {
                config,
                engine,
                closed: AtomicBool::new(false),
                sweeper: Mutex::new(sweeper),
            }),
        }
    }
}

impl Default for StrategicCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}
