//! Trace analysis and report printing.
//!
//! A pure post-pass over a recorded trace. It produces:
//! 1. **Instruction mix:** Execution counts per instruction tag.
//! 2. **Register history:** Per-register mutation events (cycle, before,
//!    after, causing tag), excluding the hardwired zero register.
//! 3. **Memory growth:** Cycles where the memory key-count changed — a
//!    coarse write-detection heuristic, not per-address diffing.
//! 4. **Head of trace:** The first few steps for quick inspection.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::common::constants::REG_COUNT;
use crate::isa::kind::InstrKind;
use crate::isa::reg;
use crate::sim::trace::TraceStep;

/// Number of leading trace steps echoed into the summary.
const HEAD_LEN: usize = 5;

/// One register mutation event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RegWrite {
    /// Cycle the mutation happened on.
    pub cycle: u64,
    /// Register value before the instruction.
    pub before: u32,
    /// Register value after the instruction.
    pub after: u32,
    /// The instruction tag that caused the write.
    pub kind: InstrKind,
}

/// One cycle where the memory key-count changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MemGrowth {
    /// Cycle the growth happened on.
    pub cycle: u64,
    /// The instruction tag executing that cycle.
    pub kind: InstrKind,
    /// Change in the number of distinct written addresses.
    pub delta: i64,
}

/// A compact echo of one leading trace step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HeadStep {
    /// Cycle index.
    pub cycle: u64,
    /// Program counter the instruction was fetched at.
    pub pc: u32,
    /// Raw instruction word.
    pub word: u32,
    /// Symbolic classification.
    pub kind: InstrKind,
}

/// Aggregated statistics over one recorded trace.
#[derive(Clone, Debug, Default, Serialize)]
pub struct TraceSummary {
    /// Total executed cycles.
    pub cycles: u64,
    /// Execution counts keyed by instruction tag display name.
    pub instruction_counts: BTreeMap<String, u64>,
    /// Mutation events per register index (register 0 excluded).
    pub register_writes: BTreeMap<usize, Vec<RegWrite>>,
    /// Cycles where the memory key-count changed.
    pub memory_growth: Vec<MemGrowth>,
    /// The first few trace steps.
    pub head: Vec<HeadStep>,
}

/// Analyzes a recorded trace into its summary.
///
/// Pure over its input: reads the archived snapshots only, never live
/// simulator state.
pub fn analyze(steps: &[TraceStep]) -> TraceSummary {
    let mut instruction_counts: BTreeMap<String, u64> = BTreeMap::new();
    let mut register_writes: BTreeMap<usize, Vec<RegWrite>> = BTreeMap::new();
    let mut memory_growth = Vec::new();

    for step in steps {
        *instruction_counts.entry(step.kind.to_string()).or_insert(0) += 1;

        for idx in 1..REG_COUNT {
            if step.regs_before[idx] != step.regs_after[idx] {
                register_writes.entry(idx).or_default().push(RegWrite {
                    cycle: step.cycle,
                    before: step.regs_before[idx],
                    after: step.regs_after[idx],
                    kind: step.kind,
                });
            }
        }

        let delta = step.mem_after.len() as i64 - step.mem_before.len() as i64;
        if delta != 0 {
            memory_growth.push(MemGrowth {
                cycle: step.cycle,
                kind: step.kind,
                delta,
            });
        }
    }

    TraceSummary {
        cycles: steps.len() as u64,
        instruction_counts,
        register_writes,
        memory_growth,
        head: steps
            .iter()
            .take(HEAD_LEN)
            .map(|step| HeadStep {
                cycle: step.cycle,
                pc: step.pc,
                word: step.word,
                kind: step.kind,
            })
            .collect(),
    }
}

impl TraceSummary {
    /// Prints the full analysis report to stdout.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("MIPS SUBSET SIMULATION SUMMARY");
        println!("==========================================================");
        println!("sim_cycles               {}", self.cycles);
        println!("----------------------------------------------------------");

        println!("INSTRUCTION MIX");
        for (tag, count) in &self.instruction_counts {
            println!("  {tag:<22} {count}");
        }
        println!("----------------------------------------------------------");

        println!("REGISTER WRITES");
        for (idx, writes) in &self.register_writes {
            println!("  {:<22} {} write(s)", reg::name(*idx), writes.len());
        }
        if !self.memory_growth.is_empty() {
            println!("----------------------------------------------------------");
            println!("MEMORY GROWTH");
            for event in &self.memory_growth {
                println!(
                    "  cycle {:<16} {} ({:+} address(es))",
                    event.cycle, event.kind, event.delta
                );
            }
        }
        println!("----------------------------------------------------------");

        println!("FIRST STEPS");
        for step in &self.head {
            println!(
                "  cycle {}: pc={:04X} {:08X} ({})",
                step.cycle, step.pc, step.word, step.kind
            );
        }
        println!("==========================================================");
    }
}
