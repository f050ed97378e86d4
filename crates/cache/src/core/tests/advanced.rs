//! Expiry, statistics and eviction through the facade

use crate::config::CacheConfig;
use crate::core::StrategicCache;
use crate::policy_kind::EvictionPolicyKind;
use std::thread;
use std::time::Duration;

#[test]
fn test_default_ttl_expires_lazily() {
    let cache = StrategicCache::new(
        CacheConfig::builder()
            .with_ttl(Duration::from_millis(20))
            .with_cleanup_interval(Duration::ZERO)
            .build(),
    );
    cache.set("k", "v");
    assert!(cache.get("k").is_some());

    thread::sleep(Duration::from_millis(40));
    assert!(!cache.contains("k"));
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get("k"), None);
    assert_eq!(cache.len(), 0);
    assert_eq!(cache.stats().expirations, 1);
}

#[test]
fn test_per_entry_ttl_and_manual_sweep() {
    let cache = StrategicCache::new(
        CacheConfig::builder()
            .with_cleanup_interval(Duration::ZERO)
            .build(),
    );
    cache.set_with_ttl("short", "v", Duration::from_millis(10));
    cache.set_with_ttl("forever", "v", Duration::ZERO);
    cache.set("default", "v");

    thread::sleep(Duration::from_millis(30));
    assert_eq!(cache.sweep_expired(), 1);
    assert_eq!(cache.len(), 2);
    assert!(cache.contains("forever"));
    assert!(cache.contains("default"));
}

#[test]
fn test_stats_track_hits_and_misses() {
    let cache = StrategicCache::new(
        CacheConfig::builder()
            .with_shard_count(4)
            .with_cleanup_interval(Duration::ZERO)
            .build(),
    );
    for i in 0..10 {
        cache.set(&format!("k{i}"), "v");
    }
    for i in 0..20 {
        cache.get(&format!("k{i}"));
    }

    let stats = cache.stats();
    assert_eq!(stats.hits, 10);
    assert_eq!(stats.misses, 10);
    assert_eq!(stats.keys, 10);
    assert_eq!(stats.shards, 4);
    assert!((stats.hit_rate() - 0.5).abs() < f64::EPSILON);

    let per_shard = cache.shard_stats();
    assert_eq!(per_shard.len(), 4);
    assert_eq!(per_shard.iter().map(|s| s.keys).sum::<usize>(), 10);
}

#[test]
fn test_eviction_counts_in_stats() {
    let cache = StrategicCache::new(
        CacheConfig::builder()
            .with_cache_size(10)
            .with_shard_count(1)
            .with_eviction_policy(EvictionPolicyKind::WindowedTinyLfu)
            .with_cleanup_interval(Duration::ZERO)
            .build(),
    );
    for i in 0..25 {
        cache.set(&format!("k{i}"), "v");
    }
    let stats = cache.stats();
    assert_eq!(stats.size, 10);
    assert_eq!(stats.evictions, 15);
}
