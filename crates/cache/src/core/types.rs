//! Core cache types and structures

use crate::config::CacheConfig;
use crate::shard::{Shard, ShardRouter};
use crate::ttl::{Sweeper, TtlManager};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Sharded, concurrent key-value cache
///
/// Cloning is cheap and every clone shares the same storage. The background
/// sweeper stops on [`close`](Self::close) or when the last clone is dropped.
#[derive(Clone)]
pub struct StrategicCache {
    pub(super) inner: Arc<CacheInner>,
}

pub(super) struct CacheInner {
    /// Normalized configuration
    pub config: CacheConfig,
    /// Storage, absent when caching is disabled
    pub engine: Option<Engine>,
    pub closed: AtomicBool,
    /// Background expiry sweeper, if one is running
    pub sweeper: Mutex<Option<Sweeper>>,
}

pub(super) struct Engine {
    pub router: ShardRouter,
    pub ttl: TtlManager,
    pub shards: Arc<[Shard]>,
}

impl Engine {
    #[inline]
    pub fn shard_for(&self, key: &str) -> &Shard {
        &self.shards[self.router.shard_for(key)]
    }
}

impl CacheInner {
    /// Storage accepting operations, `None` when disabled or closed
    pub fn active_engine(&self) -> Option<&Engine> {
        if self.closed.load(Ordering::Acquire) {
            return None;
        }
        self.engine.as_ref()
    }

    pub fn stop_sweeper(&self) {
        if let Some(sweeper) = self.sweeper.lock().take() {
            sweeper.stop();
        }
    }
}

impl Drop for CacheInner {
    fn drop(&mut self) {
        self.stop_sweeper();
    }
}

impl std::fmt::Debug for StrategicCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategicCache")
            .field("enabled", &self.inner.engine.is_some())
            .field("closed", &self.inner.closed.load(Ordering::Relaxed))
            .field("shards", &self.inner.engine.as_ref().map_or(0, |e| e.shards.len()))
            .field("eviction_policy", &self.inner.config.eviction_policy)
            .finish()
    }
}
