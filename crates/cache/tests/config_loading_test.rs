//! Loading JSON configuration files and building caches from them

mod common;

use common::init_tracing;
use std::io::Write;
use std::time::Duration;
use strategic_cache::{
    AdmissionPolicyKind, CacheConfig, CacheError, EvictionPolicyKind, RecoveryHint, StrategicCache,
};
use tempfile::NamedTempFile;

const GENERATED_CONFIG: &str = r#"{
    "enable_caching": true,
    "cache_size": 2048,
    "ttl_ms": 300000,
    "cleanup_interval_ms": 0,
    "max_key_size": 256,
    "max_value_size": 65536,
    "enable_compression": true,
    "compression_threshold": 512,
    "eviction_policy": "wtinylfu",
    "admission_policy": "probabilistic",
    "admission_probability": 0.9,
    "shard_count": 8
}"#;

#[test]
fn test_load_generated_config() {
    init_tracing();
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(GENERATED_CONFIG.as_bytes()).unwrap();

    let config = CacheConfig::load(file.path()).unwrap();
    assert_eq!(config.cache_size, 2048);
    assert_eq!(config.ttl, Duration::from_secs(300));
    assert_eq!(config.eviction_policy, EvictionPolicyKind::WindowedTinyLfu);
    assert_eq!(config.admission_policy, AdmissionPolicyKind::Probabilistic);
    assert_eq!(config.compression_level, 3);
    assert!(config.validate().is_ok());

    let cache = StrategicCache::new(config);
    assert_eq!(cache.stats().shards, 8);
    assert!(cache.set("key", vec![b'a'; 4096]));
    assert_eq!(cache.get("key").map(|v| v.len()), Some(4096));
    assert!(cache.stats().bytes < 4096);
}

#[test]
fn test_missing_file_reports_permissions_hint() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = CacheConfig::load(&path).unwrap_err();
    assert!(matches!(err, CacheError::Io { .. }));
    assert_eq!(err.recovery_hint(), &RecoveryHint::CheckPermissions { path });
}

#[test]
fn test_malformed_json_is_a_serialization_error() {
    let err = CacheConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, CacheError::Serialization { .. }));
    assert!(!err.is_recoverable());
}

#[test]
fn test_unknown_policies_fall_back_to_defaults() {
    init_tracing();
    let json = r#"{ "eviction_policy": "mru", "admission_policy": "sometimes" }"#;
    let config = CacheConfig::from_json_str(json).unwrap();
    assert_eq!(config.eviction_policy, EvictionPolicyKind::Lru);
    assert_eq!(config.admission_policy, AdmissionPolicyKind::Always);
    assert_eq!(config.cache_size, 10_000);
}

#[test]
fn test_config_roundtrips_through_json() {
    let config = CacheConfig::builder()
        .with_cache_size(64)
        .with_ttl(Duration::from_millis(1500))
        .with_eviction_policy(EvictionPolicyKind::WindowedTinyLfu)
        .build();
    let json = config.to_json_pretty().unwrap();
    assert!(json.contains("\"ttl_ms\": 1500"));
    assert!(json.contains("\"wtinylfu\""));
    assert_eq!(CacheConfig::from_json_str(&json).unwrap(), config);
}
