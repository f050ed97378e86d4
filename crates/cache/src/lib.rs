//! Sharded in-memory cache engine
//!
//! This crate provides a concurrent key-value cache with features like:
//! - Independently locked shards, no global lock
//! - LRU and Windowed TinyLFU eviction
//! - Unconditional or probabilistic admission
//! - Per-entry TTL with lazy expiry and a background sweep
//! - Optional zstd compression of large values
//!
//! ```no_run
//! use strategic_cache::{CacheConfig, EvictionPolicyKind, StrategicCache};
//!
//! let cache = StrategicCache::new(
//!     CacheConfig::builder()
//!         .with_cache_size(10_000)
//!         .with_eviction_policy(EvictionPolicyKind::WindowedTinyLfu)
//!         .build(),
//! );
//!
//! assert!(cache.set("user:42", "alice"));
//! assert_eq!(cache.get("user:42").as_deref(), Some(&b"alice"[..]));
//! cache.close();
//! ```

pub mod admission;
pub mod compression;
pub mod config;
pub mod core;
pub mod errors;
mod eviction;
pub mod outcome;
pub mod policy_kind;
pub mod serde_helpers;
pub mod shard;
pub mod sketch;
pub mod stats;
mod ttl;

pub use admission::AdmissionFilter;
pub use compression::CompressionCodec;
pub use config::{CacheConfig, CacheConfigBuilder};
pub use self::core::StrategicCache;
pub use errors::{CacheError, Error, RecoveryHint, Result};
pub use outcome::{RejectReason, SetOutcome};
pub use policy_kind::{AdmissionPolicyKind, EvictionPolicyKind};
pub use shard::ShardRouter;
pub use sketch::FrequencySketch;
pub use stats::{CacheStats, ShardStats};

pub use bytes::Bytes;
