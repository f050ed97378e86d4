//! Resident cache entry

use crate::compression::Payload;
use std::sync::Arc;
use std::time::Instant;

/// A stored key/value pair with its expiry stamp
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub key: Arc<str>,
    pub payload: Payload,
    pub inserted_at: Instant,
    pub expires_at: Option<Instant>,
}

impl Entry {
    pub fn new(key: Arc<str>, payload: Payload, now: Instant, expires_at: Option<Instant>) -> Self {
        Self {
            key,
            payload,
            inserted_at: now,
            expires_at,
        }
    }

    /// An entry is expired once `now` reaches its expiry instant
    #[inline]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }

    /// Approximate resident footprint in bytes
    pub fn weight(&self) -> usize {
        self.key.len() + self.payload.stored_len()
    }
}
