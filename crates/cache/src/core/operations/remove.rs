//! Cache remove operations

use crate::core::types::StrategicCache;

impl StrategicCache {
    /// Remove `key`, returning whether it was present
    pub fn delete(&self, key: &str) -> bool {
        self.inner
            .active_engine()
            .is_some_and(|engine| engine.shard_for(key).delete(key))
    }
}
