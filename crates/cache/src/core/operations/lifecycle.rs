//! Cache shutdown

use crate::core::types::StrategicCache;
use std::sync::atomic::Ordering;

impl StrategicCache {
    /// Stop the sweeper and release every entry
    ///
    /// Idempotent. Afterwards writes are rejected with
    /// [`RejectReason::Closed`](crate::RejectReason::Closed) and reads miss.
    pub fn close(&self) {
        if self.inner.closed.swap(true, Ordering::AcqRel) {
            return;
        }

        self.inner.stop_sweeper();
        let released: usize = self
            .inner
            .engine
            .as_ref()
            .map_or(0, |engine| engine.shards.iter().map(|shard| shard.clear()).sum());

        tracing::info!(released, "strategic cache closed");
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::Acquire)
    }

    /// False when the cache was built with caching disabled
    pub fn is_enabled(&self) -> bool {
        self.inner.engine.is_some()
    }
}
