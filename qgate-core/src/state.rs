//! # StateVector — Motor de simulação
//!
//! Vetor de `2^n` amplitudes complexas. O bit `i` do índice corresponde ao
//! qubit `i` (qubit 0 é o bit menos significativo).
//!
//! ## Aplicação de gates
//!
//! ```text
//! single-qubit G no qubit q:
//!   para cada i com bit q = 0, j = i | (1 << q)
//!   (a_i, a_j) ← (G00·a_i + G01·a_j, G10·a_i + G11·a_j)
//!
//! CNOT(c, t):
//!   para cada i com bit c = 1 e bit t = 0
//!   swap(a_i, a_{i | (1 << t)})
//! ```
//!
//! Nenhuma matriz `2^n × 2^n` é materializada: cada par é visitado uma única
//! vez, custo O(2^n) por porta.

use num_complex::Complex64;
use tracing::debug;

use crate::error::{QuantumError, QuantumResult};
use crate::gates::{Gate, Matrix2x2};

/// Maior registrador aceito (2^24 amplitudes = 256 MiB)
pub const MAX_QUBITS: usize = 24;

/// Tolerância padrão para a soma das probabilidades
pub const NORM_TOLERANCE: f64 = 1e-9;

/// Estado quântico de um registrador de `n` qubits
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// Cria estado |0…0⟩ para `num_qubits` qubits
    pub fn new(num_qubits: usize) -> QuantumResult<Self> {
        if num_qubits == 0 || num_qubits > MAX_QUBITS {
            return Err(QuantumError::InvalidRegisterSize(num_qubits));
        }

        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
        amplitudes[0] = Complex64::new(1.0, 0.0);

        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Número de qubits do registrador
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Dimensão do espaço (2^n)
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Amplitudes atuais, em ordem de índice
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Probabilidade de cada estado da base
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Σ|a_i|²
    pub fn total_probability(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Verifica normalização
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.total_probability() - 1.0).abs() <= tolerance
    }

    /// Volta ao estado |0…0⟩
    pub fn reset(&mut self) {
        self.amplitudes.fill(Complex64::new(0.0, 0.0));
        self.amplitudes[0] = Complex64::new(1.0, 0.0);
        debug!(num_qubits = self.num_qubits, "state reset");
    }

    /// Aplica X (NOT) ao qubit
    pub fn apply_x(&mut self, qubit: usize) -> QuantumResult<()> {
        self.apply(&Gate::X(qubit))
    }

    /// Aplica Hadamard ao qubit
    pub fn apply_h(&mut self, qubit: usize) -> QuantumResult<()> {
        self.apply(&Gate::H(qubit))
    }

    /// Aplica CNOT com os qubits de controle e alvo
    pub fn apply_cnot(&mut self, control: usize, target: usize) -> QuantumResult<()> {
        self.apply(&Gate::Cnot { control, target })
    }

    /// Aplica uma porta qualquer
    ///
    /// Os operandos são validados antes de tocar nas amplitudes; em caso de
    /// erro o estado não muda.
    pub fn apply(&mut self, gate: &Gate) -> QuantumResult<()> {
        if let Err(err) = self.validate(gate) {
            debug!(%gate, %err, "gate rejected");
            return Err(err);
        }

        match *gate {
            Gate::X(qubit) => self.apply_single_qubit(qubit, &Matrix2x2::pauli_x()),
            Gate::H(qubit) => self.apply_single_qubit(qubit, &Matrix2x2::hadamard()),
            Gate::Cnot { control, target } => self.apply_controlled_x(control, target),
        }

        debug!(%gate, "gate applied");
        Ok(())
    }

    /// Valida os operandos de uma porta contra este registrador
    pub fn validate(&self, gate: &Gate) -> QuantumResult<()> {
        for qubit in gate.qubits() {
            self.check_qubit(qubit)?;
        }

        if let Gate::Cnot { control, target } = *gate {
            if control == target {
                return Err(QuantumError::InvalidOperands { control, target });
            }
        }

        Ok(())
    }

    pub(crate) fn check_qubit(&self, qubit: usize) -> QuantumResult<()> {
        if qubit >= self.num_qubits {
            return Err(QuantumError::QubitIndexOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    /// I⊗…⊗G⊗…⊗I sem expandir a matriz
    fn apply_single_qubit(&mut self, qubit: usize, gate: &Matrix2x2) {
        let mask = 1usize << qubit;

        for i in 0..self.amplitudes.len() {
            if i & mask != 0 {
                continue;
            }
            let j = i | mask;
            let [a, b] = gate.apply([self.amplitudes[i], self.amplitudes[j]]);
            self.amplitudes[i] = a;
            self.amplitudes[j] = b;
        }
    }

    fn apply_controlled_x(&mut self, control: usize, target: usize) {
        let control_mask = 1usize << control;
        let target_mask = 1usize << target;

        for i in 0..self.amplitudes.len() {
            // Só a metade com alvo = 0, senão o par seria trocado duas vezes
            if i & control_mask != 0 && i & target_mask == 0 {
                self.amplitudes.swap(i, i | target_mask);
            }
        }
    }

    /// Substitui as amplitudes (usado pela medição após o colapso)
    pub(crate) fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        &mut self.amplitudes
    }
}
