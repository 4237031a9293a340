//! Configuration for the assembler and simulator.
//!
//! This module defines the configuration structure used to parameterize
//! a run. It provides:
//! 1. **Defaults:** Baseline constants (cycle cap, memory-image size).
//! 2. **Deserialization:** JSON configs via serde, with every field
//!    optional and defaulted.

use serde::Deserialize;

/// Default configuration constants.
///
/// These values apply when a field is absent from the supplied config,
/// or when `Config::default()` is used directly.
mod defaults {
    /// Hard cap on executed cycles per simulation run.
    ///
    /// The reporting flow historically ran with 100; the library default
    /// stays at 1000.
    pub const MAX_CYCLES: u64 = 1000;

    /// Instruction-memory slots covered by the Verilog zero-fill loop.
    pub const MEMORY_SLOTS: usize = 1024;
}

/// Run configuration; use `Config::default()` or deserialize from JSON.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Hard cap on executed cycles per simulation run.
    pub max_cycles: u64,
    /// Print the per-cycle trace while running.
    pub trace: bool,
    /// Instruction-memory slots in the emitted Verilog block.
    pub memory_slots: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_cycles: defaults::MAX_CYCLES,
            trace: false,
            memory_slots: defaults::MEMORY_SLOTS,
        }
    }
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Arguments
    ///
    /// * `text` - A JSON object; absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns the serde error when the text is not a valid config
    /// object.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
