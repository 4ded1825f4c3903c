use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strider::{adapt, fast, range_by};

/// Benchmark a filter/map pipeline against the standard iterator adaptors on
/// the same data. The cursor pair should optimize down to the same loop.
fn benchmark_filter_map_pipeline(c: &mut Criterion) {
    let data: Vec<i64> = (0..10_000).collect();
    let mut group = c.benchmark_group("filter_map");

    group.bench_function("strider", |b| {
        b.iter(|| {
            let result: Vec<i64> = adapt(black_box(&data))
                .filter(|x: &i64| *x % 3 == 0)
                .map(|x: &i64| x * 2)
                .collect();
            black_box(result)
        });
    });

    group.bench_function("std_iterator", |b| {
        b.iter(|| {
            let result: Vec<i64> = black_box(&data)
                .iter()
                .filter(|x| **x % 3 == 0)
                .map(|x| x * 2)
                .collect();
            black_box(result)
        });
    });

    group.finish();
}

/// Measure the cost of the checked policy relative to the unchecked twin.
fn benchmark_check_policy_overhead(c: &mut Criterion) {
    let data: Vec<i64> = (0..10_000).collect();
    let mut group = c.benchmark_group("check_policy");

    group.bench_function("checked", |b| {
        b.iter(|| {
            let sum: i64 = adapt(black_box(&data)).map(|x: &i64| x + 1).collect::<Vec<_>>().iter().sum();
            black_box(sum)
        });
    });

    group.bench_function("unchecked", |b| {
        b.iter(|| {
            let sum: i64 = fast::adapt(black_box(&data)).map(|x: &i64| x + 1).collect::<Vec<_>>().iter().sum();
            black_box(sum)
        });
    });

    group.finish();
}

/// Counting ranges against the standard range with `step_by`.
fn benchmark_counting_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("counting");

    group.bench_function("strider_range_by", |b| {
        b.iter(|| {
            let values: Vec<i64> = range_by(black_box(0i64), 7, 100_000).collect();
            black_box(values)
        });
    });

    group.bench_function("std_step_by", |b| {
        b.iter(|| {
            let values: Vec<i64> = (black_box(0i64)..100_000).step_by(7).collect();
            black_box(values)
        });
    });

    group.finish();
}

/// Backward traversal through a reversing adaptor.
fn benchmark_reverse_traversal(c: &mut Criterion) {
    let data: Vec<i64> = (0..10_000).collect();
    let mut group = c.benchmark_group("reverse");

    group.bench_function("strider_rev", |b| {
        b.iter(|| {
            let sum: i64 = adapt(black_box(&data)).rev().into_iter().sum();
            black_box(sum)
        });
    });

    group.bench_function("std_rev", |b| {
        b.iter(|| {
            let sum: i64 = black_box(&data).iter().rev().sum();
            black_box(sum)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_filter_map_pipeline,
    benchmark_check_policy_overhead,
    benchmark_counting_range,
    benchmark_reverse_traversal
);
criterion_main!(benches);
