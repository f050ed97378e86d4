//! Cache statistics snapshots
//!
//! Counters live in each shard and are read under that shard's lock. A cache
//! snapshot sums shard snapshots taken one after another, so it is eventually
//! consistent rather than a point-in-time view across all shards.

use serde::Serialize;

/// Snapshot of one shard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShardStats {
    pub index: usize,
    pub capacity: usize,
    /// Resident entries, including expired ones not yet reclaimed
    pub size: usize,
    /// Resident entries that have not expired
    pub keys: usize,
    /// Stored bytes (keys plus stored values)
    pub bytes: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expirations: u64,
    pub rejections: u64,
}

/// Snapshot of a whole cache
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub size: usize,
    pub keys: usize,
    pub bytes: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expirations: u64,
    /// Writes refused by the admission filter
    pub rejections: u64,
    pub shards: usize,
}

impl CacheStats {
    /// Sum per-shard snapshots
    pub fn from_shards<'a>(shards: impl IntoIterator<Item = &'a ShardStats>) -> Self {
        shards.into_iter().fold(Self::default(), |mut total, shard| {
            total.size += shard.size;
            total.keys += shard.keys;
            total.bytes += shard.bytes;
            total.hits += shard.hits;
            total.misses += shard.misses;
            total.evictions += shard.evictions;
            total.expirations += shard.expirations;
            total.rejections += shard.rejections;
            total.shards += 1;
            total
        })
    }

    /// Fraction of lookups that hit, 0.0 before any lookup
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            0.0
        } else {
            self.hits as f64 / lookups as f64
        }
    }
}
