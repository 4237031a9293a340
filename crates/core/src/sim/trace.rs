//! Per-cycle trace records.
//!
//! A `TraceStep` is the simulation's externally consumed artifact: one
//! immutable record per executed instruction, holding the full
//! architectural state before and after. Snapshots are deep copies, so
//! later execution cannot retroactively change an archived step.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::common::constants::REG_COUNT;
use crate::isa::kind::InstrKind;

/// One recorded execution cycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    /// Cycle index, starting at 0.
    pub cycle: u64,
    /// Program counter the instruction was fetched at.
    pub pc: u32,
    /// Raw 32-bit instruction word.
    pub word: u32,
    /// Symbolic classification of the word.
    pub kind: InstrKind,
    /// Register file before execution.
    pub regs_before: [u32; REG_COUNT],
    /// Register file after execution.
    pub regs_after: [u32; REG_COUNT],
    /// Data memory before execution.
    pub mem_before: BTreeMap<u32, u32>,
    /// Data memory after execution.
    pub mem_after: BTreeMap<u32, u32>,
}
