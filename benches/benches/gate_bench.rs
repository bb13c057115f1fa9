//! # Gate Benchmarks
//!
//! Measures in-place X/H/CNOT application and measurement sampling across
//! register sizes.
//!
//! Run: `cargo bench --bench gate_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qgate_core::{StateVector, sample_counts};
use rand::SeedableRng;
use rand::rngs::StdRng;

const SIZES: [usize; 5] = [2, 6, 10, 14, 18];

/// Benchmark single-qubit gates on the lowest and highest qubit
fn bench_single_qubit(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_qubit");

    for &n in SIZES.iter() {
        let mut state = StateVector::new(n).unwrap();
        group.throughput(Throughput::Elements(1u64 << n));

        group.bench_with_input(BenchmarkId::new("h_low", n), &n, |b, _| {
            b.iter(|| state.apply_h(black_box(0)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("x_high", n), &n, |b, &n| {
            b.iter(|| state.apply_x(black_box(n - 1)).unwrap())
        });
    }

    group.finish();
}

/// Benchmark CNOT permutation
fn bench_cnot(c: &mut Criterion) {
    let mut group = c.benchmark_group("cnot");

    for &n in SIZES.iter() {
        let mut state = StateVector::new(n).unwrap();
        for q in 0..n {
            state.apply_h(q).unwrap();
        }
        group.throughput(Throughput::Elements(1u64 << n));

        group.bench_with_input(BenchmarkId::new("cnot_0_last", n), &n, |b, &n| {
            b.iter(|| state.apply_cnot(black_box(0), black_box(n - 1)).unwrap())
        });
    }

    group.finish();
}

/// Benchmark a full Bell-ladder circuit from |0…0⟩
fn bench_ghz_circuit(c: &mut Criterion) {
    let mut group = c.benchmark_group("ghz_circuit");

    for &n in SIZES.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut state = StateVector::new(n).unwrap();
                state.apply_h(0).unwrap();
                for q in 1..n {
                    state.apply_cnot(q - 1, q).unwrap();
                }
                black_box(state)
            })
        });
    }

    group.finish();
}

/// Benchmark sampling 1024 shots
fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_counts");

    for &n in [2usize, 6, 10].iter() {
        let mut state = StateVector::new(n).unwrap();
        for q in 0..n {
            state.apply_h(q).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(42);

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(sample_counts(&state, 1024, &mut rng)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_qubit,
    bench_cnot,
    bench_ghz_circuit,
    bench_sampling,
);
criterion_main!(benches);
