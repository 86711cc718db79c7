//! Criterion micro-benchmarks for reduced, combined and materialized access.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use manseg_array::ArrayConfig;
use manseg_bench::{make_filled, relax_step, SWEEP_LEN};
use manseg_core::PrecisionMode;

/// Benchmark: allocate 1M segmented elements (zeroed heads and tails).
fn bench_allocate_1m(c: &mut Criterion) {
    c.bench_function("allocate_1m", |b| {
        b.iter(|| {
            let array = manseg_array::DualPrecisionArray::new(SWEEP_LEN).unwrap();
            black_box(array.len());
        });
    });
}

/// Benchmark: one relaxation sweep reading and writing heads only.
fn bench_reduced_sweep_1m(c: &mut Criterion) {
    let array = make_filled(SWEEP_LEN, ArrayConfig::default()).unwrap();
    c.bench_function("reduced_sweep_1m", |b| {
        b.iter(|| black_box(relax_step(&array, PrecisionMode::Reduced).unwrap()));
    });
}

/// Benchmark: one relaxation sweep through the aliased combined view.
fn bench_combined_sweep_1m(c: &mut Criterion) {
    let array = make_filled(SWEEP_LEN, ArrayConfig::default()).unwrap();
    c.bench_function("combined_sweep_1m", |b| {
        b.iter(|| black_box(relax_step(&array, PrecisionMode::Full).unwrap()));
    });
}

/// Benchmark: the same sweep over a materialized plain `f64` buffer.
fn bench_materialized_sweep_1m(c: &mut Criterion) {
    let mut array = make_filled(SWEEP_LEN, ArrayConfig::default()).unwrap();
    let full = array.materialize_full_precision().unwrap();
    c.bench_function("materialized_sweep_1m", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for i in 1..full.len() - 1 {
                let v = 0.5 * (full[i - 1] + full[i + 1]);
                full[i] = v;
                total += v;
            }
            black_box(total)
        });
    });
}

/// Benchmark: materialization on the rayon pool vs the calling thread.
fn bench_materialize_1m(c: &mut Criterion) {
    let mut parallel = make_filled(SWEEP_LEN, ArrayConfig::default()).unwrap();
    c.bench_function("materialize_parallel_1m", |b| {
        b.iter(|| black_box(parallel.materialize_full_precision().unwrap().len()));
    });

    let mut sequential = make_filled(SWEEP_LEN, ArrayConfig::sequential()).unwrap();
    c.bench_function("materialize_sequential_1m", |b| {
        b.iter(|| black_box(sequential.materialize_full_precision().unwrap().len()));
    });
}

criterion_group!(
    benches,
    bench_allocate_1m,
    bench_reduced_sweep_1m,
    bench_combined_sweep_1m,
    bench_materialized_sweep_1m,
    bench_materialize_1m,
);
criterion_main!(benches);
