//! The fetch/decode/execute driving loop.
//!
//! The simulator owns the CPU state and the program for the duration of
//! a run. Each iteration fetches the word at `pc/4`, decodes and
//! classifies it, snapshots state, executes, snapshots again, appends a
//! trace step, and advances the PC according to the control directive.
//!
//! Running off the end of the program is the expected stopping
//! condition, not an error; the `max_cycles` cap bounds runaway loops
//! (it is an iteration cap, not a wall-clock timeout).

use tracing::trace;

use crate::common::constants::WORD_BYTES;
use crate::core::cpu::Cpu;
use crate::core::execute::{Directive, execute};
use crate::isa::decode::decode;
use crate::isa::kind::classify;
use crate::sim::trace::TraceStep;

/// Cycle-level simulator: CPU architectural state plus the program.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, memory, PC).
    pub cpu: Cpu,
    program: Vec<u32>,
}

impl Simulator {
    /// Creates a simulator over the given program with a fresh CPU.
    pub fn new(program: Vec<u32>) -> Self {
        Self {
            cpu: Cpu::new(),
            program,
        }
    }

    /// Returns the loaded program words.
    pub fn program(&self) -> &[u32] {
        &self.program
    }

    /// Runs until the PC leaves the program or the cycle cap is hit.
    ///
    /// # Arguments
    ///
    /// * `max_cycles` - Hard upper bound on executed instructions.
    ///
    /// # Returns
    ///
    /// The ordered trace, one step per executed cycle. Final register
    /// and memory state stay readable on `self.cpu` afterwards.
    pub fn run(&mut self, max_cycles: u64) -> Vec<TraceStep> {
        let mut steps = Vec::new();

        for cycle in 0..max_cycles {
            let index = (self.cpu.pc / WORD_BYTES) as usize;
            let Some(&word) = self.program.get(index) else {
                break;
            };

            let decoded = decode(word);
            let kind = classify(&decoded);

            let pc = self.cpu.pc;
            let regs_before = self.cpu.regs.snapshot();
            let mem_before = self.cpu.mem.snapshot();

            let directive = execute(&mut self.cpu, &decoded, kind);

            let word_hex = format!("{word:08X}");
            trace!(cycle, pc, word = %word_hex, %kind, "retired");

            steps.push(TraceStep {
                cycle,
                pc,
                word,
                kind,
                regs_before,
                regs_after: self.cpu.regs.snapshot(),
                mem_before,
                mem_after: self.cpu.mem.snapshot(),
            });

            if directive != Directive::Jump {
                self.cpu.pc = self.cpu.pc.wrapping_add(WORD_BYTES);
            }
        }

        steps
    }
}
