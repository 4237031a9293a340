//! Simulation driving loop and trace recording.
//!
//! This module turns a word sequence into an execution history:
//! 1. **Simulator:** Owns the CPU and program, runs the fetch/decode/
//!    execute loop under a cycle cap.
//! 2. **Trace:** Immutable per-cycle records with full before/after
//!    state snapshots.
//! 3. **Loader:** Recovers word sequences from previously emitted memory
//!    images.

/// Word extraction from memory-image text.
pub mod loader;

/// The fetch/decode/execute driving loop.
pub mod simulator;

/// Per-cycle trace records.
pub mod trace;

pub use simulator::Simulator;
pub use trace::TraceStep;
