//! Cache statistics operations

use crate::config::CacheConfig;
use crate::core::types::StrategicCache;
use crate::stats::{CacheStats, ShardStats};
use std::time::Instant;

impl StrategicCache {
    /// Sum of per-shard snapshots
    ///
    /// Each shard is locked only while its own snapshot is taken, so the
    /// totals are eventually consistent under concurrent writes.
    pub fn stats(&self) -> CacheStats {
        CacheStats::from_shards(&self.shard_stats())
    }

    /// One snapshot per shard, in shard order
    pub fn shard_stats(&self) -> Vec<ShardStats> {
        let Some(engine) = self.inner.engine.as_ref() else {
            return Vec::new();
        };
        let now = Instant::now();
        engine.shards.iter().map(|shard| shard.stats(now)).collect()
    }

    /// Resident entries, including expired ones not yet reclaimed
    pub fn len(&self) -> usize {
        self.inner
            .engine
            .as_ref()
            .map_or(0, |engine| engine.shards.iter().map(|shard| shard.len()).sum())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Normalized configuration this cache runs with
    pub fn config(&self) -> &CacheConfig {
        &self.inner.config
    }
}
