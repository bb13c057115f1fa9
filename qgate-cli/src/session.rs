//! Per-session ownership of one register plus its operation log.

use qgate_core::{
    BlochVector, Gate, QuantumResult, SimulatorConfig, StateVector, basis_label, bloch_vectors,
    measure_all, sample_counts,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Log entry appended after a reset
pub const RESET_ENTRY: &str = "Circuit reset";

/// One user session: an exclusively owned state vector and an append-only
/// history of the operations that succeeded on it.
pub struct Session {
    config: SimulatorConfig,
    state: StateVector,
    history: Vec<String>,
    rng: StdRng,
}

impl Session {
    pub fn new(config: SimulatorConfig) -> QuantumResult<Self> {
        config.validate()?;
        let state = StateVector::new(config.num_qubits)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        info!(num_qubits = config.num_qubits, seed = ?config.seed, "session started");
        Ok(Self {
            config,
            state,
            history: Vec::new(),
            rng,
        })
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn state(&self) -> &StateVector {
        &self.state
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn bloch(&self) -> Vec<BlochVector> {
        bloch_vectors(&self.state)
    }

    /// Applies a gate; the log only grows when the engine accepts it.
    pub fn apply(&mut self, gate: Gate) -> QuantumResult<()> {
        self.state.apply(&gate)?;

        if !self.state.is_normalized(self.config.tolerance) {
            warn!(
                %gate,
                total = self.state.total_probability(),
                "state drifted out of normalization tolerance"
            );
        }

        info!(%gate, "operation logged");
        self.history.push(gate.describe());
        Ok(())
    }

    /// Back to |0…0⟩ with a fresh log.
    pub fn reset(&mut self) {
        self.state.reset();
        self.history.clear();
        self.history.push(RESET_ENTRY.to_string());
        info!("session reset");
    }

    /// Measures the whole register, collapsing it. Returns the bitstring.
    pub fn measure(&mut self) -> String {
        let outcome = measure_all(&mut self.state, &mut self.rng);
        let label = basis_label(outcome, self.state.num_qubits());
        self.history.push(format!("Measured all qubits: |{label}⟩"));
        label
    }

    /// Samples outcome counts without disturbing the state.
    pub fn counts(&mut self, shots: Option<usize>) -> BTreeMap<String, usize> {
        let shots = shots.unwrap_or(self.config.shots);
        sample_counts(&self.state, shots, &mut self.rng)
    }
}
