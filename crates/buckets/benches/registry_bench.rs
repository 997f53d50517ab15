//! Bucket registry benchmarks.
//!
//! Measures lock overhead on the hot paths: shared-lock lookups, exclusive
//! create-or-get on existing and new names, and full traversals.

#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]

use std::{hint::black_box, sync::Arc, thread, time::Duration};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use inferadb_ledger_buckets::{Registry, Visit};
use inferadb_ledger_test_utils::TestBucket;

// =============================================================================
// Helpers
// =============================================================================

/// Builds a registry holding `count` buckets named `bucket-{i:06}`.
fn populate(count: usize) -> Registry<TestBucket> {
    let registry = Registry::with_capacity(count);
    for i in 0..count {
        registry.create_or_get(&format!("bucket-{i:06}"));
    }
    registry
}

// =============================================================================
// Lookups
// =============================================================================

/// Benchmark hit and miss lookups at various registry sizes.
fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry/get");
    group.throughput(Throughput::Elements(1));

    for count in [16, 1_024, 65_536] {
        let registry = populate(count);

        group.bench_with_input(BenchmarkId::new("hit", count), &count, |b, &count| {
            let mut i = 0usize;
            b.iter(|| {
                i = (i + 1) % count;
                black_box(registry.get(&format!("bucket-{i:06}")))
            });
        });

        group.bench_with_input(BenchmarkId::new("miss", count), &count, |b, _| {
            b.iter(|| black_box(registry.get("absent")));
        });
    }

    group.finish();
}

/// Benchmark lookups while other threads hammer the shared lock.
fn bench_contended_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry/contended_get");

    for readers in [1, 4, 8] {
        let registry = Arc::new(populate(1_024));

        group.bench_with_input(BenchmarkId::from_parameter(readers), &readers, |b, &readers| {
            b.iter(|| {
                let handles: Vec<_> = (0..readers)
                    .map(|t| {
                        let registry = Arc::clone(&registry);
                        thread::spawn(move || {
                            for i in 0..256 {
                                let name = format!("bucket-{:06}", (t * 256 + i) % 1_024);
                                black_box(registry.get(&name).expect("bucket exists"));
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    handle.join().expect("reader panicked");
                }
            });
        });
    }

    group.finish();
}

// =============================================================================
// Mutations
// =============================================================================

/// Benchmark create-or-get on an existing name vs. create + delete of a new one.
fn bench_create_or_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry/create_or_get");
    group.throughput(Throughput::Elements(1));

    let registry = populate(1_024);

    group.bench_function("existing", |b| {
        b.iter(|| black_box(registry.create_or_get("bucket-000512")));
    });

    group.bench_function("new_then_delete", |b| {
        b.iter(|| {
            black_box(registry.create_or_get("transient"));
            black_box(registry.delete("transient"))
        });
    });

    group.finish();
}

// =============================================================================
// Traversal
// =============================================================================

/// Benchmark full traversals and traversals that stop at the first bucket.
fn bench_for_each(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry/for_each");

    for count in [16, 1_024, 65_536] {
        let registry = populate(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("full", count), &count, |b, _| {
            b.iter(|| {
                let mut total = 0u64;
                registry
                    .for_each(|_, bucket| {
                        total = total.wrapping_add(bucket.id());
                        Visit::<()>::Continue
                    })
                    .unwrap();
                black_box(total)
            });
        });

        group.bench_with_input(BenchmarkId::new("stop_first", count), &count, |b, _| {
            b.iter(|| black_box(registry.for_each(|_, _| Visit::<()>::Stop)));
        });
    }

    group.finish();
}

criterion_group! {
    name = lookup_benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(50);
    targets = bench_get, bench_contended_get
}

criterion_group! {
    name = mutation_benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(50);
    targets = bench_create_or_get
}

criterion_group! {
    name = scan_benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(50);
    targets = bench_for_each
}

criterion_main!(lookup_benches, mutation_benches, scan_benches);
