//! Formatação do estado como expressão de kets
//!
//! `0.7071|00⟩ + 0.7071|11⟩`

use num_complex::Complex64;
use std::fmt::{self, Write};

use crate::measure::basis_label;
use crate::state::StateVector;

/// Amplitudes abaixo deste módulo são omitidas
pub const AMPLITUDE_EPSILON: f64 = 1e-10;

/// Casas decimais usadas por `Display`
pub const DEFAULT_PRECISION: usize = 4;

/// Formata uma amplitude: real, imaginária pura ou `(a±bi)`
pub fn format_amplitude(amplitude: Complex64, precision: usize) -> String {
    let re = snap(amplitude.re);
    let im = snap(amplitude.im);

    if im == 0.0 {
        format!("{re:.precision$}")
    } else if re == 0.0 {
        format!("{im:.precision$}i")
    } else {
        let sign = if im < 0.0 { '-' } else { '+' };
        format!("({re:.precision$}{sign}{:.precision$}i)", im.abs())
    }
}

/// Estado como soma de kets rotulados `|q_{n-1} … q_0⟩`
pub fn ket_string(state: &StateVector, precision: usize) -> String {
    let num_qubits = state.num_qubits();
    let mut out = String::new();

    for (index, &amplitude) in state.amplitudes().iter().enumerate() {
        if amplitude.norm() < AMPLITUDE_EPSILON {
            continue;
        }
        let label = basis_label(index, num_qubits);
        let negative_real = snap(amplitude.im) == 0.0 && amplitude.re < 0.0;

        // write! em String não falha
        let _ = if out.is_empty() {
            write!(out, "{}|{label}⟩", format_amplitude(amplitude, precision))
        } else if negative_real {
            write!(out, " - {}|{label}⟩", format_amplitude(-amplitude, precision))
        } else {
            write!(out, " + {}|{label}⟩", format_amplitude(amplitude, precision))
        };
    }

    if out.is_empty() {
        out.push('0');
    }
    out
}

fn snap(value: f64) -> f64 {
    if value.abs() < AMPLITUDE_EPSILON { 0.0 } else { value }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        f.write_str(&ket_string(self, precision))
    }
}
