//! MIPS-subset assembler and cycle-level simulator library.
//!
//! This crate implements the software side of a multi-cycle MIPS subset
//! (13 instructions) with the following:
//! 1. **ISA:** Encoding tables, bit extraction, decoding, classification,
//!    and disassembly for the supported subset.
//! 2. **Assembler:** Two-pass translation from assembly source to 32-bit
//!    machine words, plus the Verilog memory-image emitter.
//! 3. **Core:** Architectural state (GPR file, sparse memory, PC) and
//!    per-instruction execution semantics.
//! 4. **Simulation:** A state-recording driving loop producing per-cycle
//!    trace steps, and a loader recovering words from memory images.
//! 5. **Analysis:** Aggregated statistics over a recorded trace.

/// Two-pass assembler and Verilog memory-image emitter.
pub mod asm;
/// Common types and constants (field masks, assembly errors).
pub mod common;
/// Run configuration (defaults, JSON deserialization).
pub mod config;
/// CPU core (registers, memory, execution).
pub mod core;
/// Instruction set (tables, decode, classify, disassemble).
pub mod isa;
/// Simulation loop, trace records, and word loader.
pub mod sim;
/// Trace analysis and report printing.
pub mod stats;

/// Translates assembly source into machine words; see [`asm::assemble`].
pub use crate::asm::assemble;
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// CPU architectural state: registers, memory, and program counter.
pub use crate::core::Cpu;
/// Cycle-level simulator; owns a `Cpu` and a program for one run.
pub use crate::sim::Simulator;
