//! Commands accepted by the interactive session.

use anyhow::{Context, anyhow};
use qgate_core::Gate;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Apply(Gate),
    Reset,
    State,
    Bloch,
    Measure,
    Counts(Option<usize>),
    History,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let line = line.trim();
        let mut words = line.split_whitespace();
        let Some(keyword) = words.next() else {
            return Err(anyhow!("empty command"));
        };

        let command = match keyword.to_ascii_lowercase().as_str() {
            "reset" => Self::Reset,
            "state" | "show" => Self::State,
            "bloch" => Self::Bloch,
            "measure" => Self::Measure,
            "counts" => {
                let shots = words
                    .next()
                    .map(|s| s.parse::<usize>().with_context(|| format!("invalid shot count '{s}'")))
                    .transpose()?;
                Self::Counts(shots)
            }
            "history" | "log" => Self::History,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => return Ok(Self::Apply(line.parse::<Gate>()?)),
        };

        if let Some(extra) = words.next() {
            return Err(anyhow!("unexpected argument '{extra}' after '{keyword}'"));
        }
        Ok(command)
    }
}

pub const HELP: &str = "\
Commands:
  x <q>             apply X (NOT) to qubit q
  h <q>             apply Hadamard to qubit q
  cnot <c> <t>      apply CNOT with control c and target t
  reset             back to |0…0⟩, clears the history
  state             print the state vector
  bloch             print the Bloch vector of every qubit
  measure           measure all qubits (collapses the state)
  counts [shots]    sample outcome counts without collapsing
  history           print the operation log
  help              show this message
  quit              leave the session";
