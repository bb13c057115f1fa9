//! Configuração do simulador
//!
//! ```toml
//! num_qubits = 2
//! tolerance = 1e-9
//! precision = 4
//! shots = 1024
//! seed = 42
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{QuantumError, QuantumResult};
use crate::format::DEFAULT_PRECISION;
use crate::state::{MAX_QUBITS, NORM_TOLERANCE};

/// Configuração do simulador
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulatorConfig {
    /// Tamanho do registrador
    pub num_qubits: usize,
    /// Tolerância para a verificação de normalização
    pub tolerance: f64,
    /// Casas decimais na exibição de amplitudes
    pub precision: usize,
    /// Amostras para contagens de medição
    pub shots: usize,
    /// Semente do gerador (None = entropia do sistema)
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            num_qubits: 2,
            tolerance: NORM_TOLERANCE,
            precision: DEFAULT_PRECISION,
            shots: 1024,
            seed: None,
        }
    }
}

impl SimulatorConfig {
    /// Parse a partir de TOML; campos ausentes ficam com o padrão
    pub fn from_toml_str(content: &str) -> QuantumResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| QuantumError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Carrega de um arquivo TOML
    pub fn from_file(path: &Path) -> QuantumResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            QuantumError::InvalidConfig(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Serializa para TOML
    pub fn to_toml_string(&self) -> QuantumResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| QuantumError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Valida limites
    pub fn validate(&self) -> QuantumResult<()> {
        if self.num_qubits == 0 || self.num_qubits > MAX_QUBITS {
            return Err(QuantumError::InvalidRegisterSize(self.num_qubits));
        }
        if !(self.tolerance > 0.0 && self.tolerance < 1.0) {
            return Err(QuantumError::InvalidConfig(format!(
                "tolerance must be in (0, 1), got {}",
                self.tolerance
            )));
        }
        if self.precision > 15 {
            return Err(QuantumError::InvalidConfig(format!(
                "precision must be at most 15, got {}",
                self.precision
            )));
        }
        if self.shots == 0 {
            return Err(QuantumError::InvalidConfig("shots must be positive".to_string()));
        }
        Ok(())
    }
}
