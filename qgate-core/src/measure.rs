//! Medição na base computacional
//!
//! Rótulos seguem a convenção little-endian: o qubit `n-1` fica à esquerda e
//! o qubit 0 à direita (`|q1 q0⟩`), então o índice 1 de um registrador de 2
//! qubits é rotulado `01`.

use num_complex::Complex64;
use rand::Rng;
use std::collections::BTreeMap;
use tracing::debug;

use crate::error::QuantumResult;
use crate::state::StateVector;

/// Rótulo binário do estado da base `index` com `num_qubits` dígitos
pub fn basis_label(index: usize, num_qubits: usize) -> String {
    format!("{index:0num_qubits$b}")
}

/// Mede todos os qubits e colapsa o estado no resultado
///
/// A fase da amplitude sorteada é preservada; o módulo vira 1.
pub fn measure_all<R: Rng + ?Sized>(state: &mut StateVector, rng: &mut R) -> usize {
    let cumulative = cumulative_distribution(state);
    let outcome = sample(&cumulative, rng);

    let amplitudes = state.amplitudes_mut();
    let kept = amplitudes[outcome];
    amplitudes.fill(Complex64::new(0.0, 0.0));
    amplitudes[outcome] = kept.unscale(kept.norm());

    debug!(outcome, label = %basis_label(outcome, state.num_qubits()), "measured register");
    outcome
}

/// Mede um único qubit, projetando o restante do registrador
pub fn measure_qubit<R: Rng + ?Sized>(
    state: &mut StateVector,
    qubit: usize,
    rng: &mut R,
) -> QuantumResult<u8> {
    state.check_qubit(qubit)?;

    let mask = 1usize << qubit;
    let p_one: f64 = state
        .amplitudes()
        .iter()
        .enumerate()
        .filter(|(i, _)| i & mask != 0)
        .map(|(_, a)| a.norm_sqr())
        .sum();

    let one = rng.gen_range(0.0..1.0) < p_one;
    let kept_probability: f64 = state
        .amplitudes()
        .iter()
        .enumerate()
        .filter(|(i, _)| (i & mask != 0) == one)
        .map(|(_, a)| a.norm_sqr())
        .sum();
    let scale = kept_probability.sqrt();

    for (i, amplitude) in state.amplitudes_mut().iter_mut().enumerate() {
        if (i & mask != 0) == one {
            *amplitude = amplitude.unscale(scale);
        } else {
            *amplitude = Complex64::new(0.0, 0.0);
        }
    }

    let outcome = u8::from(one);
    debug!(qubit, outcome, p_one, "measured qubit");
    Ok(outcome)
}

/// Amostra `shots` medições sem alterar o estado
pub fn sample_counts<R: Rng + ?Sized>(
    state: &StateVector,
    shots: usize,
    rng: &mut R,
) -> BTreeMap<String, usize> {
    let cumulative = cumulative_distribution(state);
    let mut counts = BTreeMap::new();

    for _ in 0..shots {
        let index = sample(&cumulative, rng);
        *counts.entry(basis_label(index, state.num_qubits())).or_insert(0) += 1;
    }

    counts
}

fn cumulative_distribution(state: &StateVector) -> Vec<f64> {
    state
        .amplitudes()
        .iter()
        .scan(0.0, |acc, a| {
            *acc += a.norm_sqr();
            Some(*acc)
        })
        .collect()
}

fn sample<R: Rng + ?Sized>(cumulative: &[f64], rng: &mut R) -> usize {
    let total = cumulative.last().copied().unwrap_or(0.0);
    let r = rng.gen_range(0.0..total);

    // Primeiro índice cujo acumulado passa de r; índices de probabilidade
    // zero repetem o acumulado anterior e nunca são escolhidos.
    cumulative
        .partition_point(|&c| c <= r)
        .min(cumulative.len() - 1)
}
