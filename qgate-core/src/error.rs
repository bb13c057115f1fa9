//! Tipos de erro para qgate-core

use thiserror::Error;

/// Resultado customizado para operações quânticas
pub type QuantumResult<T> = Result<T, QuantumError>;

/// Erros que podem ocorrer em operações quânticas
///
/// Toda validação acontece antes de qualquer mutação: um erro garante que o
/// `StateVector` ficou exatamente como estava.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantumError {
    #[error("Invalid register size: {0} qubits (expected 1..={max})", max = crate::state::MAX_QUBITS)]
    InvalidRegisterSize(usize),

    #[error("Qubit index {qubit} out of range for a {num_qubits}-qubit register")]
    QubitIndexOutOfRange { qubit: usize, num_qubits: usize },

    #[error("Invalid operands: control and target must differ (control={control}, target={target})")]
    InvalidOperands { control: usize, target: usize },

    #[error("Cannot parse gate: {0}")]
    GateParse(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
