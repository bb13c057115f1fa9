//! Text rendering of states, Bloch vectors and the operation log.

use colored::*;
use qgate_core::{BlochVector, StateVector, basis_label, format_amplitude, ket_string};
use std::collections::BTreeMap;

pub fn print_state(state: &StateVector, precision: usize) {
    println!("{} |ψ⟩ = {}", "State:".bold(), ket_string(state, precision).cyan());
    println!();
    println!("  {:<width$}  {:>18}  {:>11}", "basis", "amplitude", "probability", width = state.num_qubits() + 2);

    for (index, amplitude) in state.amplitudes().iter().enumerate() {
        let label = format!("|{}⟩", basis_label(index, state.num_qubits()));
        let probability = amplitude.norm_sqr();
        let line = format!(
            "  {:<width$}  {:>18}  {:>11.prec$}",
            label,
            format_amplitude(*amplitude, precision),
            probability,
            width = state.num_qubits() + 2,
            prec = precision,
        );
        if probability > 1e-12 {
            println!("{line}");
        } else {
            println!("{}", line.dimmed());
        }
    }
}

pub fn print_bloch(vectors: &[BlochVector], precision: usize, tolerance: f64) {
    println!("{}", "Bloch vectors:".bold());
    for (qubit, v) in vectors.iter().enumerate() {
        let r = v.magnitude();
        let kind = if v.is_pure(tolerance.max(1e-6)) {
            "pure".green()
        } else {
            "mixed (entangled)".yellow()
        };
        println!(
            "  q{qubit}  x={:+.prec$}  y={:+.prec$}  z={:+.prec$}  |r|={:.prec$}  {kind}",
            clean(v.x),
            clean(v.y),
            clean(v.z),
            r,
            prec = precision,
        );
    }
}

/// Keeps round-off like -1e-17 from printing as -0.0000
fn clean(component: f64) -> f64 {
    if component.abs() < 1e-12 { 0.0 } else { component }
}

pub fn print_history(history: &[String]) {
    println!("{}", "Operation history:".bold());
    if history.is_empty() {
        println!("  {}", "(empty)".dimmed());
    }
    for (i, entry) in history.iter().enumerate() {
        println!("  {:>3}. {entry}", i + 1);
    }
}

pub fn print_counts(counts: &BTreeMap<String, usize>) {
    let shots: usize = counts.values().sum();
    println!("{} ({shots} shots)", "Counts:".bold());
    for (label, count) in counts {
        let fraction = *count as f64 / shots.max(1) as f64;
        let bar = "█".repeat((fraction * 40.0).round() as usize);
        println!("  |{label}⟩ {count:>6}  {:>6.2}%  {}", fraction * 100.0, bar.blue());
    }
}
