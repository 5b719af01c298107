//! Criterion benchmarks for parcel classification.
//!
//! Measures the per-call cost of `sort` on the fast integer path, the
//! fractional path and the u128 overflow path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use parcelsort_core::{sort, validate, volume_exceeds_threshold, Field};

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    group.bench_function("whole", |b| {
        b.iter(|| sort(black_box(100), black_box(100), black_box(99), black_box(19)))
    });

    group.bench_function("fractional", |b| {
        b.iter(|| sort(black_box(100.5), black_box(99.5), black_box(98.25), black_box(19.9)))
    });

    group.bench_function("overflow", |b| {
        b.iter(|| sort(black_box(u64::MAX), black_box(u64::MAX), black_box(u64::MAX), black_box(0)))
    });

    group.bench_function("invalid", |b| {
        b.iter(|| sort(black_box(1), black_box(1), black_box(1), black_box(f64::NAN)))
    });

    group.finish();
}

fn bench_volume(c: &mut Criterion) {
    let w = validate(1_000_000u64, Field::Width).unwrap();
    let h = validate(1_000_000u64, Field::Height).unwrap();
    let l = validate(1.0, Field::Length).unwrap();

    c.bench_function("volume_exceeds_threshold", |b| {
        b.iter(|| volume_exceeds_threshold(black_box(w), black_box(h), black_box(l)))
    });
}

criterion_group!(benches, bench_sort, bench_volume);
criterion_main!(benches);
