//! # Quantum Gates — Portas Elementares
//!
//! Descritores das portas suportadas pelo motor.
//!
//! ## Gates Implementadas
//!
//! - **Single-qubit**: X (NOT), H (Hadamard)
//! - **Two-qubit**: CNOT
//!
//! As portas não guardam matriz: a forma matricial é gerada sob demanda por
//! [`Gate::matrix`]. CNOT não tem matriz 2x2, é uma permutação de índices
//! condicionada ao bit de controle.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;
use std::str::FromStr;

use crate::error::{QuantumError, QuantumResult};

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Matriz 2x2 complexa para gates single-qubit
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix2x2 {
    /// Elementos: [[a, b], [c, d]]
    pub elements: [[Complex64; 2]; 2],
}

impl Matrix2x2 {
    /// Cria matriz a partir dos elementos
    pub const fn new(elements: [[Complex64; 2]; 2]) -> Self {
        Self { elements }
    }

    /// Cria matriz identidade
    pub const fn identity() -> Self {
        Self::new([[ONE, ZERO], [ZERO, ONE]])
    }

    /// Pauli-X: [[0, 1], [1, 0]]
    pub const fn pauli_x() -> Self {
        Self::new([[ZERO, ONE], [ONE, ZERO]])
    }

    /// Hadamard: (1/√2)·[[1, 1], [1, -1]]
    pub const fn hadamard() -> Self {
        let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
        let neg_h = Complex64::new(-FRAC_1_SQRT_2, 0.0);
        Self::new([[h, h], [h, neg_h]])
    }

    /// Aplica a matriz a um par de amplitudes [alpha, beta]
    #[inline]
    pub fn apply(&self, state: [Complex64; 2]) -> [Complex64; 2] {
        let [alpha, beta] = state;
        let [[a, b], [c, d]] = self.elements;

        [a * alpha + b * beta, c * alpha + d * beta]
    }

    /// Multiplicação de matrizes
    pub fn mul(&self, other: &Matrix2x2) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        let [[e, f], [g, h]] = other.elements;

        Matrix2x2::new([
            [a * e + b * g, a * f + b * h],
            [c * e + d * g, c * f + d * h],
        ])
    }

    /// Transposta conjugada (dagger)
    pub fn dagger(&self) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        Matrix2x2::new([[a.conj(), c.conj()], [b.conj(), d.conj()]])
    }

    /// Verifica se U·U† ≈ I
    pub fn is_unitary(&self, tolerance: f64) -> bool {
        let product = self.mul(&self.dagger());
        let identity = Self::identity();

        product
            .elements
            .iter()
            .flatten()
            .zip(identity.elements.iter().flatten())
            .all(|(p, i)| (p - i).norm() < tolerance)
    }
}

/// Porta quântica aplicada a qubits específicos do registrador
///
/// Conjunto fechado: novas portas entram como nova variante mais a regra de
/// matriz ou permutação correspondente em [`crate::StateVector::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gate {
    /// NOT quântico no qubit indicado
    X(usize),
    /// Hadamard no qubit indicado
    H(usize),
    /// NOT controlado
    Cnot { control: usize, target: usize },
}

impl Gate {
    /// Nome curto da porta
    pub fn name(&self) -> &'static str {
        match self {
            Self::X(_) => "X",
            Self::H(_) => "H",
            Self::Cnot { .. } => "CNOT",
        }
    }

    /// Qubits tocados pela porta, na ordem dos operandos
    pub fn qubits(&self) -> Vec<usize> {
        match *self {
            Self::X(q) | Self::H(q) => vec![q],
            Self::Cnot { control, target } => vec![control, target],
        }
    }

    /// Matriz 2x2 da porta, `None` para CNOT
    pub fn matrix(&self) -> Option<Matrix2x2> {
        match self {
            Self::X(_) => Some(Matrix2x2::pauli_x()),
            Self::H(_) => Some(Matrix2x2::hadamard()),
            Self::Cnot { .. } => None,
        }
    }

    /// Frase para o histórico de operações
    pub fn describe(&self) -> String {
        match *self {
            Self::X(q) => format!("Applied X gate to qubit {q}"),
            Self::H(q) => format!("Applied H gate to qubit {q}"),
            Self::Cnot { control, target } => {
                format!("Applied CNOT gate with control={control}, target={target}")
            }
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::X(q) | Self::H(q) => write!(f, "{}({})", self.name(), q),
            Self::Cnot { control, target } => write!(f, "CNOT({control}, {target})"),
        }
    }
}

impl FromStr for Gate {
    type Err = QuantumError;

    /// Aceita `x 0`, `h:1`, `cnot 0 1`, `cx 0,1` e a forma de `Display`.
    fn from_str(s: &str) -> QuantumResult<Self> {
        let tokens: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || matches!(c, ':' | ',' | '(' | ')'))
            .filter(|t| !t.is_empty())
            .collect();

        let Some((name, args)) = tokens.split_first() else {
            return Err(QuantumError::GateParse("empty gate".to_string()));
        };

        let indices = args
            .iter()
            .map(|arg| {
                arg.parse::<usize>().map_err(|_| {
                    QuantumError::GateParse(format!("invalid qubit index '{arg}' in '{}'", s.trim()))
                })
            })
            .collect::<QuantumResult<Vec<usize>>>()?;

        let name = name.to_ascii_lowercase();
        match (name.as_str(), indices.as_slice()) {
            ("x" | "not", [q]) => Ok(Self::X(*q)),
            ("h" | "hadamard", [q]) => Ok(Self::H(*q)),
            ("cnot" | "cx", [control, target]) => Ok(Self::Cnot {
                control: *control,
                target: *target,
            }),
            ("x" | "not" | "h" | "hadamard", _) => Err(QuantumError::GateParse(format!(
                "'{name}' takes exactly one qubit index"
            ))),
            ("cnot" | "cx", _) => Err(QuantumError::GateParse(format!(
                "'{name}' takes a control and a target index"
            ))),
            _ => Err(QuantumError::GateParse(format!("unknown gate '{name}'"))),
        }
    }
}

// =============================================================================
// Testes
// =============================================================================
