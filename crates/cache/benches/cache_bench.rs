//! Micro-benchmarks for the sharded cache
//!
//! Run with: cargo bench --bench cache_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use strategic_cache::{CacheConfig, EvictionPolicyKind, FrequencySketch, StrategicCache};

const POLICIES: [EvictionPolicyKind; 2] =
    [EvictionPolicyKind::Lru, EvictionPolicyKind::WindowedTinyLfu];

/// Generate deterministic cache keys
fn generate_keys(count: usize, seed: u64) -> Vec<String> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..count)
        .map(|i| format!("bench_key_{}_{}", i, rng.u32(..)))
        .collect()
}

/// Zipf-like skew: low indices are drawn far more often
fn skewed_indices(count: usize, draws: usize, seed: u64) -> Vec<usize> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..draws)
        .map(|_| {
            let u = rng.f64();
            ((count as f64).powf(u) as usize).saturating_sub(1).min(count - 1)
        })
        .collect()
}

fn bench_cache(policy: EvictionPolicyKind, size: usize) -> StrategicCache {
    StrategicCache::new(
        CacheConfig::builder()
            .with_cache_size(size)
            .with_eviction_policy(policy)
            .with_cleanup_interval(Duration::ZERO)
            .build(),
    )
}

fn bench_set_get(c: &mut Criterion) {
    let keys = generate_keys(10_000, 42);
    let mut group = c.benchmark_group("set_get");
    group.throughput(Throughput::Elements(keys.len() as u64));

    for policy in POLICIES {
        group.bench_with_input(BenchmarkId::new("set", policy), &policy, |b, &policy| {
            let cache = bench_cache(policy, 10_000);
            b.iter(|| {
                for key in &keys {
                    black_box(cache.set(key, "value"));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("get_hit", policy), &policy, |b, &policy| {
            let cache = bench_cache(policy, 10_000);
            for key in &keys {
                cache.set(key, "value");
            }
            b.iter(|| {
                for key in &keys {
                    black_box(cache.get(key));
                }
            });
        });
    }
    group.finish();
}

fn bench_skewed_workload(c: &mut Criterion) {
    let keys = generate_keys(50_000, 7);
    let draws = skewed_indices(keys.len(), 20_000, 11);
    let mut group = c.benchmark_group("skewed_workload");
    group.throughput(Throughput::Elements(draws.len() as u64));

    for policy in POLICIES {
        group.bench_with_input(BenchmarkId::from_parameter(policy), &policy, |b, &policy| {
            let cache = bench_cache(policy, 5_000);
            b.iter(|| {
                for &i in &draws {
                    let key = &keys[i];
                    if cache.get(key).is_none() {
                        cache.set(key, "value");
                    }
                }
            });
        });
    }
    group.finish();
}

fn bench_concurrent_writes(c: &mut Criterion) {
    let keys = Arc::new(generate_keys(8_000, 99));
    let mut group = c.benchmark_group("concurrent_writes");
    group.measurement_time(Duration::from_secs(10));

    for threads in [1usize, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &threads| {
            let cache = bench_cache(EvictionPolicyKind::WindowedTinyLfu, 100_000);
            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|t| {
                        let cache = cache.clone();
                        let keys = Arc::clone(&keys);
                        thread::spawn(move || {
                            for key in keys.iter().skip(t).step_by(threads) {
                                cache.set(key, "value");
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    handle.join().unwrap();
                }
            });
        });
    }
    group.finish();
}

fn bench_sketch(c: &mut Criterion) {
    let hashes: Vec<u64> = generate_keys(4_096, 3)
        .iter()
        .map(|key| strategic_cache::sketch::fingerprint(key))
        .collect();

    c.bench_function("sketch_increment_estimate", |b| {
        let mut sketch = FrequencySketch::new(4_096);
        b.iter(|| {
            for &hash in &hashes {
                sketch.increment(hash);
                black_box(sketch.estimate(hash));
            }
        });
    });
}

fn bench_compression(c: &mut Criterion) {
    let value: Vec<u8> = "compressible payload ".repeat(1_000).into_bytes();
    let mut group = c.benchmark_group("compression");
    group.throughput(Throughput::Bytes(value.len() as u64));

    group.bench_function("set_get_compressed", |b| {
        let cache = StrategicCache::new(
            CacheConfig::builder()
                .with_compression(1024, 3)
                .with_cleanup_interval(Duration::ZERO)
                .build(),
        );
        b.iter(|| {
            cache.set("blob", value.clone());
            black_box(cache.get("blob"));
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_set_get,
    bench_skewed_workload,
    bench_concurrent_writes,
    bench_sketch,
    bench_compression
);
criterion_main!(benches);
