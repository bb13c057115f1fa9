//! # ⚛️ qgate-core — Statevector Engine
//!
//! Simula um registrador de `n` qubits com vetor de estado denso e projeta
//! cada qubit na esfera de Bloch.
//!
//! ## Computational Complexity
//!
//! **Gate application — O(2^n):**
//! - X/H: cada par de amplitudes que difere no bit alvo é visitado uma vez
//! - CNOT: permutação de índices condicionada ao bit de controle
//!
//! **Bloch projection — O(2^n) por qubit:**
//! - 2^(n-1) termos por elemento da matriz densidade reduzida
//!
//! **Scalability:**
//! - n ≤ 12: ✓ Excellent
//! - 12 < n ≤ 20: △ Good
//! - n > 20: memória domina (16 bytes × 2^n)
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          StateVector                            │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  2^n amplitudes (Complex64)               │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Gate: X | H | CNOT                       │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//!          │ snapshot
//!          ▼
//! ┌─────────────────────────────────────────────────┐
//! │          Bloch Projector                        │
//! │  ρ_q = Tr_{≠q} |ψ⟩⟨ψ|  →  (x, y, z)             │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use qgate_core::{StateVector, bloch_vector};
//!
//! let mut state = StateVector::new(2)?;
//! state.apply_h(0)?;
//! state.apply_cnot(0, 1)?;
//!
//! // Par de Bell: cada qubit sozinho é maximamente misto
//! let v = bloch_vector(&state, 0)?;
//! assert!(v.magnitude() < 1e-6);
//! # Ok::<(), qgate_core::QuantumError>(())
//! ```

pub mod bloch;
pub mod config;
pub mod error;
pub mod format;
pub mod gates;
pub mod measure;
pub mod state;

pub use bloch::{
    BlochAngles, BlochVector, DensityMatrix, bloch_vector, bloch_vectors, reduced_density_matrix,
};
pub use config::SimulatorConfig;
pub use error::{QuantumError, QuantumResult};
pub use format::{format_amplitude, ket_string};
pub use gates::{Gate, Matrix2x2};
pub use measure::{basis_label, measure_all, measure_qubit, sample_counts};
pub use state::{MAX_QUBITS, NORM_TOLERANCE, StateVector};
