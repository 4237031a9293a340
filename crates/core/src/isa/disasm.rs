//! Instruction Disassembler for the MIPS subset.
//!
//! Converts a 32-bit instruction encoding back into assembler-style
//! source text for debug tracing, listings, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use mips_core::isa::disasm::disassemble;
//! let text = disassemble(0x01095021); // ADDU $t2, $t0, $t1
//! assert_eq!(text, "addu $t2, $t0, $t1");
//! ```

use crate::isa::decode::decode;
use crate::isa::kind::{InstrKind, classify};
use crate::isa::reg;

/// Disassembles a 32-bit MIPS word into a human-readable string.
///
/// Returns source text like `"lw $t1, 0($zero)"`, or `"unknown"` for
/// encodings outside the supported subset. Branch offsets render as
/// signed instruction counts, jump targets as hex indices.
///
/// # Arguments
///
/// * `word` - The raw 32-bit instruction encoding.
pub fn disassemble(word: u32) -> String {
    let d = decode(word);

    match classify(&d) {
        InstrKind::Addu => format!(
            "addu {}, {}, {}",
            reg::name(d.rd),
            reg::name(d.rs),
            reg::name(d.rt)
        ),
        InstrKind::Subu => format!(
            "subu {}, {}, {}",
            reg::name(d.rd),
            reg::name(d.rs),
            reg::name(d.rt)
        ),
        InstrKind::Slt => format!(
            "slt {}, {}, {}",
            reg::name(d.rd),
            reg::name(d.rs),
            reg::name(d.rt)
        ),
        InstrKind::Jr => format!("jr {}", reg::name(d.rs)),
        InstrKind::Addi => format!("addi {}, {}, {}", reg::name(d.rt), reg::name(d.rs), d.simm),
        InstrKind::Addiu => format!("addiu {}, {}, {}", reg::name(d.rt), reg::name(d.rs), d.simm),
        InstrKind::Ori => format!(
            "ori {}, {}, {:#x}",
            reg::name(d.rt),
            reg::name(d.rs),
            d.imm
        ),
        InstrKind::Lui => format!("lui {}, {:#x}", reg::name(d.rt), d.imm),
        InstrKind::Lw => format!("lw {}, {}({})", reg::name(d.rt), d.simm, reg::name(d.rs)),
        InstrKind::Sw => format!("sw {}, {}({})", reg::name(d.rt), d.simm, reg::name(d.rs)),
        InstrKind::Beq => format!(
            "beq {}, {}, {}",
            reg::name(d.rs),
            reg::name(d.rt),
            d.simm
        ),
        InstrKind::J => format!("j {:#x}", d.target),
        InstrKind::Jal => format!("jal {:#x}", d.target),
        InstrKind::Unknown { .. } => "unknown".to_string(),
    }
}
