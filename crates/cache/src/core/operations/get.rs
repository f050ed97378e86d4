//! Cache read operations

use crate::core::types::StrategicCache;
use bytes::Bytes;

impl StrategicCache {
    /// Get the value stored under `key`
    ///
    /// Expired entries are removed on the spot and reported as missing. A hit
    /// refreshes the key's recency and frequency.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.inner.active_engine()?.shard_for(key).get(key)
    }

    /// Whether `key` is present and unexpired
    ///
    /// Unlike [`get`](Self::get) this leaves recency, frequency and hit
    /// counters untouched.
    pub fn contains(&self, key: &str) -> bool {
        self.inner
            .active_engine()
            .is_some_and(|engine| engine.shard_for(key).contains(key))
    }
}
