//! Independently locked cache partitions
//!
//! A shard owns everything its keys need: the key index, the entry arena,
//! the eviction policy's segment lists, a frequency sketch and an admission
//! filter. One `parking_lot::Mutex` guards all of it and is held for the full
//! duration of each operation, so the index, the lists and the sketch always
//! agree with each other. Shards never lock one another.

pub(crate) mod arena;
mod entry;
mod limits;
mod router;

pub use router::ShardRouter;

use crate::admission::AdmissionFilter;
use crate::compression::CompressionCodec;
use crate::config::CacheConfig;
use crate::eviction::{create_eviction_policy, EvictionPolicy};
use crate::outcome::{RejectReason, SetOutcome};
use crate::sketch::{fingerprint, FrequencySketch};
use crate::stats::ShardStats;
use arena::{Arena, NodeId};
use bytes::Bytes;
use entry::Entry;
use limits::SizeLimits;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Default, Clone, Copy)]
struct Counters {
    hits: u64,
    misses: u64,
    evictions: u64,
    expirations: u64,
    rejections: u64,
}

#[derive(Debug)]
struct ShardState {
    entries: HashMap<Arc<str>, NodeId>,
    arena: Arena<Entry>,
    policy: Box<dyn EvictionPolicy<Entry>>,
    sketch: FrequencySketch,
    admission: AdmissionFilter,
    counters: Counters,
    bytes: usize,
}

impl ShardState {
    fn lookup(&self, key: &str) -> Option<NodeId> {
        self.entries.get(key).copied()
    }

    /// Unlink, free and unindex one node
    fn remove_node(&mut self, id: NodeId) -> Option<Entry> {
        self.policy.on_remove(&mut self.arena, id);
        let entry = self.arena.remove(id)?;
        self.entries.remove(&entry.key);
        self.bytes = self.bytes.saturating_sub(entry.weight());
        Some(entry)
    }

    fn victim_key(&self) -> Option<&str> {
        self.policy
            .victim()
            .and_then(|id| self.arena.get(id))
            .map(|entry| &*entry.key)
    }
}

/// One bounded partition of the cache
#[derive(Debug)]
pub(crate) struct Shard {
    index: usize,
    capacity: usize,
    limits: SizeLimits,
    codec: CompressionCodec,
    state: Mutex<ShardState>,
}

impl Shard {
    /// Build shard `index` from an already normalized configuration
    pub fn new(index: usize, config: &CacheConfig) -> Self {
        let capacity = config.capacity_of_shard(index);
        let policy = create_eviction_policy(config.eviction_policy, capacity);
        tracing::trace!(shard = index, capacity, policy = %policy.kind(), "shard created");

        let state = ShardState {
            entries: HashMap::with_capacity(capacity),
            arena: Arena::with_capacity(capacity),
            policy,
            sketch: FrequencySketch::new(capacity),
            admission: AdmissionFilter::new(config.admission_policy, config.admission_probability),
            counters: Counters::default(),
            bytes: 0,
        };

        Self {
            index,
            capacity,
            limits: SizeLimits::from_config(config),
            codec: CompressionCodec::from_config(config),
            state: Mutex::new(state),
        }
    }

    /// Store `value` under `key`
    ///
    /// A resident key is updated in place and counts as an access. A new key
    /// entering a full shard must pass the admission filter; once admitted,
    /// the eviction policy may push out another entry to make room.
    pub fn set(&self, key: &str, value: Bytes, expires_at: Option<Instant>) -> SetOutcome {
        if let Err(reason) = self.limits.check(key.len(), value.len()) {
            tracing::trace!(shard = self.index, %reason, "write rejected by size limits");
            return SetOutcome::Rejected(reason);
        }

        let hash = fingerprint(key);
        let mut guard = self.state.lock();
        let state = &mut *guard;

        if let Some(id) = state.lookup(key) {
            let payload = self.codec.encode(value);
            if let Some(entry) = state.arena.get_mut(id) {
                let old_weight = entry.weight();
                entry.payload = payload;
                entry.expires_at = expires_at;
                state.bytes = state.bytes.saturating_sub(old_weight) + entry.weight();
            }
            state.sketch.increment(hash);
            state.policy.on_access(&mut state.arena, id);
            return SetOutcome::Updated;
        }

        if state.entries.len() >= self.capacity && !state.admission.admit() {
            state.counters.rejections += 1;
            tracing::trace!(
                shard = self.index,
                key,
                victim = ?state.victim_key(),
                "admission filter rejected candidate"
            );
            return SetOutcome::Rejected(RejectReason::AdmissionDenied);
        }

        let payload = self.codec.encode(value);
        let key: Arc<str> = Arc::from(key);
        let entry = Entry::new(Arc::clone(&key), payload, Instant::now(), expires_at);
        state.bytes += entry.weight();
        let id = state.arena.insert(entry, hash);
        state.entries.insert(key, id);
        state.sketch.increment(hash);

        if let Some(evicted) = state.policy.on_insert(&mut state.arena, id, &state.sketch) {
            if let Some(entry) = state.remove_node(evicted) {
                state.counters.evictions += 1;
                let age_ms =
                    u64::try_from(entry.inserted_at.elapsed().as_millis()).unwrap_or(u64::MAX);
                tracing::debug!(
                    shard = self.index,
                    key = %entry.key,
                    age_ms,
                    "evicted entry"
                );
            }
        }

        debug_assert!(state.entries.len() <= self.capacity);
        debug_assert_eq!(state.entries.len(), state.arena.len());
        debug_assert_eq!(state.policy.len(), state.entries.len());
        SetOutcome::Inserted
    }

    /// Look up `key`, expiring it lazily
    pub fn get(&self, key: &str) -> Option<Bytes> {
        let now = Instant::now();
        let mut guard = self.state.lock();
        let state = &mut *guard;

        let Some(id) = state.lookup(key) else {
            state.counters.misses += 1;
            return None;
        };

        if state.arena.get(id).is_some_and(|entry| entry.is_expired(now)) {
            state.remove_node(id);
            state.counters.expirations += 1;
            state.counters.misses += 1;
            return None;
        }

        let decoded = state.arena.get(id).map(|entry| self.codec.decode(&entry.payload));
        match decoded {
            Some(Ok(value)) => {
                state.policy.on_access(&mut state.arena, id);
                if let Some(hash) = state.arena.fingerprint(id) {
                    state.sketch.increment(hash);
                }
                state.counters.hits += 1;
                Some(value)
            }
            Some(Err(e)) => {
                tracing::warn!(
                    shard = self.index,
                    key,
                    error = %e,
                    "dropping entry that failed to decompress"
                );
                state.remove_node(id);
                state.counters.misses += 1;
                None
            }
            None => {
                state.counters.misses += 1;
                None
            }
        }
    }

    pub fn delete(&self, key: &str) -> bool {
        let mut state = self.state.lock();
        match state.lookup(key) {
            Some(id) => state.remove_node(id).is_some(),
            None => false,
        }
    }

    /// Whether `key` is resident and unexpired, without touching recency or frequency
    pub fn contains(&self, key: &str) -> bool {
        let now = Instant::now();
        let state = self.state.lock();
        state
            .lookup(key)
            .and_then(|id| state.arena.get(id))
            .is_some_and(|entry| !entry.is_expired(now))
    }

    /// Remove every entry whose expiry is at or before `now`
    pub fn sweep_expired(&self, now: Instant) -> usize {
        let mut state = self.state.lock();
        let expired: Vec<NodeId> = state
            .arena
            .iter()
            .filter(|(_, entry)| entry.is_expired(now))
            .map(|(id, _)| id)
            .collect();

        for id in &expired {
            state.remove_node(*id);
        }
        state.counters.expirations += expired.len() as u64;
        expired.len()
    }

    /// Resident entries, including expired ones not yet reclaimed
    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    /// Drop every entry and forget all frequency history. Counters survive.
    pub fn clear(&self) -> usize {
        let mut state = self.state.lock();
        let removed = state.entries.len();
        state.entries.clear();
        state.arena.clear();
        state.policy.clear();
        state.sketch.clear();
        state.bytes = 0;
        removed
    }

    pub fn stats(&self, now: Instant) -> ShardStats {
        let state = self.state.lock();
        ShardStats {
            index: self.index,
            capacity: self.capacity,
            size: state.entries.len(),
            keys: state
                .arena
                .iter()
                .filter(|(_, entry)| !entry.is_expired(now))
                .count(),
            bytes: state.bytes,
            hits: state.counters.hits,
            misses: state.counters.misses,
            evictions: state.counters.evictions,
            expirations: state.counters.expirations,
            rejections: state.counters.rejections,
        }
    }
}
