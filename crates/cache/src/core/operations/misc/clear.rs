//! Cache clear operations

use crate::core::types::StrategicCache;
use crate::ttl::sweep_shards;

impl StrategicCache {
    /// Remove every entry, keeping the cache open
    pub fn clear(&self) {
        let Some(engine) = self.inner.active_engine() else {
            return;
        };
        let removed: usize = engine.shards.iter().map(|shard| shard.clear()).sum();
        tracing::debug!(removed, "cache cleared");
    }

    /// Reclaim expired entries now instead of waiting for the sweeper
    pub fn sweep_expired(&self) -> usize {
        let Some(engine) = self.inner.active_engine() else {
            return 0;
        };
        let removed = sweep_shards(&engine.shards);
        if removed > 0 {
            tracing::debug!(removed, "swept expired entries");
        }
        removed
    }
}
