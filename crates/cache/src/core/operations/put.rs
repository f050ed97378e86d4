//! Cache write operations

use crate::core::types::StrategicCache;
use crate::outcome::{RejectReason, SetOutcome};
use bytes::Bytes;
use std::time::{Duration, Instant};

impl StrategicCache {
    /// Store `value` under `key` with the configured TTL
    ///
    /// Returns false when the write is refused: caching disabled, cache
    /// closed, key or value over its size limit, or the admission filter
    /// turning the key away from a full shard.
    pub fn set(&self, key: &str, value: impl Into<Bytes>) -> bool {
        self.set_with_outcome(key, value).is_admitted()
    }

    /// Store `value` under `key` and report what happened
    pub fn set_with_outcome(&self, key: &str, value: impl Into<Bytes>) -> SetOutcome {
        self.write(key, value.into(), None)
    }

    /// Store `value` under `key` with its own TTL (zero never expires)
    pub fn set_with_ttl(&self, key: &str, value: impl Into<Bytes>, ttl: Duration) -> SetOutcome {
        self.write(key, value.into(), Some(ttl))
    }

    fn write(&self, key: &str, value: Bytes, ttl: Option<Duration>) -> SetOutcome {
        let Some(engine) = self.inner.engine.as_ref() else {
            return SetOutcome::Rejected(RejectReason::Disabled);
        };
        if self.is_closed() {
            return SetOutcome::Rejected(RejectReason::Closed);
        }

        let now = Instant::now();
        let expires_at = match ttl {
            Some(ttl) => engine.ttl.expires_after(now, ttl),
            None => engine.ttl.expires_at(now),
        };
        engine.shard_for(key).set(key, value, expires_at)
    }
}
