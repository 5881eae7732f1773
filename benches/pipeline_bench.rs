//! Benchmark for pipeline stages and multiset analysis.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use seqflow::multiset::{duplicate_count, frequency_count, is_equivalent_multiset};
use seqflow::pipeline::{from_sequence, search_natural};
use std::hint::black_box;

// =============================================================================
// Pipeline Benchmarks
// =============================================================================

fn benchmark_filter_map_collect(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("filter_map_collect");

    for size in [100, 1_000, 10_000] {
        let input: Vec<i64> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("size", size), &input, |bencher, input| {
            bencher.iter(|| {
                let result = from_sequence(input.clone())
                    .filter(|n| n % 2 == 0)
                    .map(|n| n * n)
                    .collect()
                    .unwrap();
                black_box(result)
            });
        });
    }

    group.finish();
}

fn benchmark_distinct_sorted(criterion: &mut Criterion) {
    let input: Vec<i64> = (0..10_000).map(|n| n % 512).collect();

    criterion.bench_function("distinct_sorted", |bencher| {
        bencher.iter(|| {
            let result = from_sequence(input.clone())
                .distinct()
                .sorted()
                .collect()
                .unwrap();
            black_box(result)
        });
    });
}

fn benchmark_search(criterion: &mut Criterion) {
    let sorted: Vec<i64> = (0..100_000).map(|n| n * 2).collect();

    criterion.bench_function("binary_search", |bencher| {
        bencher.iter(|| {
            let mut hits = 0;
            for key in 0..1_000 {
                if search_natural(&sorted, &black_box(key * 37)).is_ok() {
                    hits += 1;
                }
            }
            black_box(hits)
        });
    });
}

// =============================================================================
// Multiset Benchmarks
// =============================================================================

fn benchmark_frequency_count(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("frequency_count");

    for size in [1_000, 10_000] {
        let input: Vec<u16> = (0..size).map(|n| (n % 251) as u16).collect();
        group.bench_with_input(BenchmarkId::new("size", size), &input, |bencher, input| {
            bencher.iter(|| black_box(frequency_count(input.clone())));
        });
    }

    group.finish();
}

fn benchmark_duplicate_and_equivalence(criterion: &mut Criterion) {
    let left: Vec<u16> = (0..10_000).map(|n| (n % 997) as u16).collect();
    let mut right = left.clone();
    right.reverse();

    criterion.bench_function("duplicate_count", |bencher| {
        bencher.iter(|| black_box(duplicate_count(left.clone())));
    });

    criterion.bench_function("is_equivalent_multiset", |bencher| {
        bencher.iter(|| black_box(is_equivalent_multiset(&left, &right)));
    });
}

criterion_group!(
    benches,
    benchmark_filter_map_collect,
    benchmark_distinct_sorted,
    benchmark_search,
    benchmark_frequency_count,
    benchmark_duplicate_and_equivalence
);
criterion_main!(benches);
