//! # Bloch Projection Benchmarks
//!
//! Run: `cargo bench --bench bloch_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qgate_core::{StateVector, bloch_vector, bloch_vectors, ket_string};

fn entangled(n: usize) -> StateVector {
    let mut state = StateVector::new(n).unwrap();
    state.apply_h(0).unwrap();
    for q in 1..n {
        state.apply_cnot(0, q).unwrap();
    }
    state
}

/// Benchmark the reduced density matrix of one qubit
fn bench_single_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloch_single");

    for n in [2usize, 6, 10, 14, 18].iter() {
        let state = entangled(*n);
        group.throughput(Throughput::Elements(1u64 << n));

        group.bench_with_input(BenchmarkId::from_parameter(n), &state, |b, s| {
            b.iter(|| black_box(bloch_vector(s, 0).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark projecting every qubit
fn bench_all_projections(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloch_all");

    for n in [2usize, 6, 10].iter() {
        let state = entangled(*n);

        group.bench_with_input(BenchmarkId::from_parameter(n), &state, |b, s| {
            b.iter(|| black_box(bloch_vectors(s)))
        });
    }

    group.finish();
}

/// Benchmark ket formatting
fn bench_ket_string(c: &mut Criterion) {
    let state = entangled(6);
    c.bench_function("ket_string_6", |b| b.iter(|| black_box(ket_string(&state, 4))));
}

criterion_group!(
    benches,
    bench_single_projection,
    bench_all_projections,
    bench_ket_string,
);
criterion_main!(benches);
