//! Key to shard routing

use xxhash_rust::xxh3::xxh3_64_with_seed;

/// Seed mixed into every key so shard selection is independent of the
/// fingerprint the frequency sketch uses.
const ROUTER_SEED: u64 = 0x5348_4152_445f_5345;

/// Maps keys to shard indices with a seeded xxh3 hash
///
/// Routing is a pure function of the key, so a key always lands on the same
/// shard for the lifetime of a cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShardRouter {
    shard_count: usize,
    seed: u64,
}

impl ShardRouter {
    pub fn new(shard_count: usize) -> Self {
        Self::with_seed(shard_count, ROUTER_SEED)
    }

    /// Router with an explicit hash seed; different seeds give unrelated layouts
    pub fn with_seed(shard_count: usize, seed: u64) -> Self {
        Self {
            shard_count: shard_count.max(1),
            seed,
        }
    }

    /// Shard index for `key`, always below [`Self::shard_count`]
    #[inline]
    pub fn shard_for(&self, key: &str) -> usize {
        if self.shard_count == 1 {
            return 0;
        }
        (xxh3_64_with_seed(key.as_bytes(), self.seed) % self.shard_count as u64) as usize
    }

    pub fn shard_count(&self) -> usize {
        self.shard_count
    }
}
