//! Time-based expiry
//!
//! Expiry is stamped as an absolute `Instant` when a value is written. Reads
//! expire entries lazily; a background sweeper reclaims the rest.

mod sweeper;

pub(crate) use sweeper::Sweeper;

use crate::shard::Shard;
use std::time::{Duration, Instant};

/// Computes expiry stamps for writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TtlManager {
    default_ttl: Option<Duration>,
}

impl TtlManager {
    pub fn new(default_ttl: Option<Duration>) -> Self {
        Self { default_ttl }
    }

    /// Expiry for a write using the configured TTL
    pub fn expires_at(&self, now: Instant) -> Option<Instant> {
        self.default_ttl.and_then(|ttl| now.checked_add(ttl))
    }

    /// Expiry for a write with an explicit TTL (zero never expires)
    pub fn expires_after(&self, now: Instant, ttl: Duration) -> Option<Instant> {
        if ttl.is_zero() {
            None
        } else {
            now.checked_add(ttl)
        }
    }
}

/// Visit shards one at a time and reclaim expired entries
pub(crate) fn sweep_shards(shards: &[Shard]) -> usize {
    shards
        .iter()
        .map(|shard| shard.sweep_expired(Instant::now()))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttl_stamps() {
        let now = Instant::now();
        let ttl = TtlManager::new(Some(Duration::from_secs(5)));
        assert_eq!(ttl.expires_at(now), Some(now + Duration::from_secs(5)));
        assert_eq!(TtlManager::new(None).expires_at(now), None);
    }

    #[test]
    fn test_explicit_ttl_overrides_default() {
        let now = Instant::now();
        let ttl = TtlManager::new(None);
        assert_eq!(
            ttl.expires_after(now, Duration::from_millis(10)),
            Some(now + Duration::from_millis(10))
        );
        assert_eq!(ttl.expires_after(now, Duration::ZERO), None);
    }

    #[test]
    fn test_overflowing_ttl_never_expires() {
        let ttl = TtlManager::new(Some(Duration::MAX));
        assert_eq!(ttl.expires_at(Instant::now()), None);
    }
}
