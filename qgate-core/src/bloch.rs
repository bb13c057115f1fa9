//! # Bloch Projector
//!
//! Projeta um qubit do registrador na esfera de Bloch.
//!
//! A matriz densidade reduzida ρ do qubit `q` é obtida traçando os demais
//! qubits:
//!
//! ```text
//! ρ00 = Σ |a_i|²              (bit q de i = 0)
//! ρ11 = Σ |a_i|²              (bit q de i = 1)
//! ρ01 = Σ a_i · conj(a_j)     (bit q de i = 0, j = i | (1 << q))
//! ρ10 = conj(ρ01)
//!
//! x = 2·Re(ρ01)   y = -2·Im(ρ01)   z = ρ00 − ρ11
//! ```
//!
//! Qubits separáveis puros ficam na superfície (|r| = 1). Qubits emaranhados
//! ficam estritamente dentro da esfera; num par de Bell, |r| = 0.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

use crate::error::QuantumResult;
use crate::state::StateVector;

/// Matriz densidade reduzida de um único qubit (2x2, hermitiana, traço 1)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DensityMatrix {
    pub elements: [[Complex64; 2]; 2],
}

impl DensityMatrix {
    /// Traço (deve ser 1 para estados normalizados)
    pub fn trace(&self) -> f64 {
        self.elements[0][0].re + self.elements[1][1].re
    }

    /// Pureza Tr(ρ²): 1 para estado puro, 1/2 para maximamente misto
    pub fn purity(&self) -> f64 {
        let [[a, b], [c, d]] = self.elements;
        (a * a + b * c + c * b + d * d).re
    }

    /// Coordenadas de Bloch de ρ
    pub fn bloch_vector(&self) -> BlochVector {
        let rho01 = self.elements[0][1];
        BlochVector {
            x: 2.0 * rho01.re,
            y: -2.0 * rho01.im,
            z: self.elements[0][0].re - self.elements[1][1].re,
        }
    }
}

/// Ponto (x, y, z) na esfera de Bloch, cada componente em [-1, 1]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlochVector {
    pub x: f64,
    pub y: f64,
    /// +z é |0⟩, -z é |1⟩
    pub z: f64,
}

/// Ângulos esféricos (θ ∈ [0, π], φ ∈ [0, 2π))
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlochAngles {
    pub theta: f64,
    pub phi: f64,
}

impl BlochVector {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Comprimento do vetor
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Verifica se o ponto está na superfície (estado reduzido puro)
    pub fn is_pure(&self, tolerance: f64) -> bool {
        (self.magnitude() - 1.0).abs() <= tolerance
    }

    /// Converte para coordenadas esféricas
    ///
    /// Vetor nulo (estado maximamente misto) devolve θ = φ = 0.
    pub fn to_angles(&self) -> BlochAngles {
        let r = self.magnitude();
        if r < 1e-10 {
            return BlochAngles { theta: 0.0, phi: 0.0 };
        }

        let theta = (self.z / r).clamp(-1.0, 1.0).acos();
        let phi = self.y.atan2(self.x);
        let phi = if phi < 0.0 { phi + 2.0 * PI } else { phi };

        BlochAngles { theta, phi }
    }
}

impl fmt::Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

/// Matriz densidade reduzida do qubit, traçando os demais
pub fn reduced_density_matrix(state: &StateVector, qubit: usize) -> QuantumResult<DensityMatrix> {
    state.check_qubit(qubit)?;

    let mask = 1usize << qubit;
    let amplitudes = state.amplitudes();

    let mut rho00 = 0.0;
    let mut rho11 = 0.0;
    let mut rho01 = Complex64::new(0.0, 0.0);

    // Cada par (i, j) difere apenas no bit q: 2^(n-1) termos por elemento
    for i in (0..amplitudes.len()).filter(|i| i & mask == 0) {
        let a0 = amplitudes[i];
        let a1 = amplitudes[i | mask];
        rho00 += a0.norm_sqr();
        rho11 += a1.norm_sqr();
        rho01 += a0 * a1.conj();
    }

    Ok(DensityMatrix {
        elements: [
            [Complex64::new(rho00, 0.0), rho01],
            [rho01.conj(), Complex64::new(rho11, 0.0)],
        ],
    })
}

/// Vetor de Bloch do qubit indicado
pub fn bloch_vector(state: &StateVector, qubit: usize) -> QuantumResult<BlochVector> {
    Ok(reduced_density_matrix(state, qubit)?.bloch_vector())
}

/// Vetores de Bloch de todos os qubits, em ordem de índice
pub fn bloch_vectors(state: &StateVector) -> Vec<BlochVector> {
    (0..state.num_qubits())
        .filter_map(|q| bloch_vector(state, q).ok())
        .collect()
}
