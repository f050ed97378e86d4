//! Basic cache operation tests

use crate::config::CacheConfig;
use crate::core::StrategicCache;
use crate::outcome::{RejectReason, SetOutcome};
use bytes::Bytes;
use std::time::Duration;

fn small_cache(size: usize) -> StrategicCache {
    StrategicCache::new(
        CacheConfig::builder()
            .with_cache_size(size)
            .with_shard_count(1)
            .with_cleanup_interval(Duration::ZERO)
            .build(),
    )
}

#[test]
fn test_basic_operations() {
    let cache = small_cache(16);

    assert!(cache.set("key1", "value1"));
    assert_eq!(cache.get("key1"), Some(Bytes::from_static(b"value1")));
    assert!(cache.contains("key1"));
    assert!(!cache.contains("key2"));

    assert!(cache.delete("key1"));
    assert!(!cache.delete("key1"));
    assert!(!cache.contains("key1"));
    assert!(cache.is_empty());
}

#[test]
fn test_set_reports_insert_then_update() {
    let cache = small_cache(4);
    assert_eq!(cache.set_with_outcome("k", "a"), SetOutcome::Inserted);
    assert_eq!(cache.set_with_outcome("k", "b"), SetOutcome::Updated);
    assert_eq!(cache.get("k"), Some(Bytes::from_static(b"b")));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_oversize_writes_rejected() {
    let cache = StrategicCache::new(
        CacheConfig::builder()
            .with_size_limits(8, 16)
            .with_cleanup_interval(Duration::ZERO)
            .build(),
    );
    cache.set("ok", "v");

    assert!(!cache.set("a-very-long-key", "v"));
    assert_eq!(
        cache.set_with_outcome("k", vec![0u8; 17]),
        SetOutcome::Rejected(RejectReason::ValueTooLarge { size: 17, limit: 16 })
    );
    assert_eq!(cache.stats().keys, 1);
}

#[test]
fn test_disabled_cache_is_inert() {
    let cache = StrategicCache::new(CacheConfig::builder().with_caching_enabled(false).build());
    assert!(!cache.is_enabled());
    assert_eq!(
        cache.set_with_outcome("k", "v"),
        SetOutcome::Rejected(RejectReason::Disabled)
    );
    assert_eq!(cache.get("k"), None);
    assert!(!cache.delete("k"));
    assert_eq!(cache.stats().shards, 0);
    cache.close();
}

#[test]
fn test_close_is_idempotent() {
    let cache = small_cache(8);
    cache.set("k", "v");
    cache.close();
    cache.close();

    assert!(cache.is_closed());
    assert_eq!(cache.get("k"), None);
    assert_eq!(
        cache.set_with_outcome("k", "v"),
        SetOutcome::Rejected(RejectReason::Closed)
    );
    assert_eq!(cache.len(), 0);
}

#[test]
fn test_clear_keeps_cache_open() {
    let cache = small_cache(8);
    cache.set("a", "1");
    cache.set("b", "2");
    cache.clear();
    assert!(cache.is_empty());
    assert!(cache.set("c", "3"));
    assert!(!cache.is_closed());
}

#[test]
fn test_clones_share_storage() {
    let cache = small_cache(8);
    let other = cache.clone();
    cache.set("shared", "yes");
    assert_eq!(other.get("shared"), Some(Bytes::from_static(b"yes")));
    other.close();
    assert!(cache.is_closed());
}

#[test]
fn test_config_is_normalized() {
    let cache = StrategicCache::new(
        CacheConfig::builder()
            .with_cache_size(4)
            .with_shard_count(0)
            .with_cleanup_interval(Duration::ZERO)
            .build(),
    );
    assert_eq!(cache.config().shard_count, 1);
    assert_eq!(cache.stats().shards, 1);
}
