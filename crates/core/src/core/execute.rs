//! Instruction Execution Semantics.
//!
//! This module applies one decoded instruction to the CPU state. It
//! implements:
//! 1. **Arithmetic:** Register/immediate ALU operations, modulo 2^32.
//! 2. **Memory:** Word loads and stores at `base + sign_ext(offset)`.
//! 3. **Control flow:** Branch and jump PC updates, reported back to the
//!    driving loop as a control directive.
//!
//! All arithmetic wraps (unsigned 32-bit); only `slt` reinterprets its
//! operands as signed. Unknown encodings execute as no-ops so a run can
//! continue past them.

use crate::common::constants::WORD_BYTES;
use crate::core::cpu::Cpu;
use crate::isa::instruction::Decoded;
use crate::isa::kind::InstrKind;
use crate::isa::reg::REG_RA;

/// Control directive returned to the driving loop after each instruction.
///
/// `Sequential` and `BranchTaken` both receive the default PC+4
/// increment afterwards: a taken branch adds its shifted offset to the
/// pre-increment PC, matching the `-1` correction the assembler bakes
/// into branch offsets. `Jump` means the instruction already wrote the
/// PC and the increment must be skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Directive {
    /// Fall through to the next instruction.
    Sequential,
    /// Branch condition held; offset already added, increment still due.
    BranchTaken,
    /// PC written outright; skip the default increment.
    Jump,
}

/// Applies one decoded instruction to the CPU state.
///
/// Register 0 reads 0 and discards writes, so the zero-register
/// invariant holds after every step regardless of what the instruction
/// computed.
///
/// # Arguments
///
/// * `cpu` - The architectural state to mutate.
/// * `decoded` - Extracted fields of the fetched word.
/// * `kind` - The instruction's symbolic classification.
///
/// # Returns
///
/// The control directive telling the caller how to advance the PC.
pub fn execute(cpu: &mut Cpu, decoded: &Decoded, kind: InstrKind) -> Directive {
    let rs_val = cpu.regs.read(decoded.rs);
    let rt_val = cpu.regs.read(decoded.rt);

    match kind {
        InstrKind::Addu => {
            cpu.regs.write(decoded.rd, rs_val.wrapping_add(rt_val));
            Directive::Sequential
        }
        InstrKind::Subu => {
            cpu.regs.write(decoded.rd, rs_val.wrapping_sub(rt_val));
            Directive::Sequential
        }
        InstrKind::Slt => {
            let lt = (rs_val as i32) < (rt_val as i32);
            cpu.regs.write(decoded.rd, lt as u32);
            Directive::Sequential
        }
        InstrKind::Addi | InstrKind::Addiu => {
            cpu.regs
                .write(decoded.rt, rs_val.wrapping_add(decoded.simm as u32));
            Directive::Sequential
        }
        InstrKind::Ori => {
            cpu.regs.write(decoded.rt, rs_val | decoded.imm);
            Directive::Sequential
        }
        InstrKind::Lui => {
            cpu.regs.write(decoded.rt, decoded.imm << 16);
            Directive::Sequential
        }
        InstrKind::Lw => {
            let addr = rs_val.wrapping_add(decoded.simm as u32);
            cpu.regs.write(decoded.rt, cpu.mem.read(addr));
            Directive::Sequential
        }
        InstrKind::Sw => {
            let addr = rs_val.wrapping_add(decoded.simm as u32);
            cpu.mem.write(addr, rt_val);
            Directive::Sequential
        }
        InstrKind::Beq => {
            if rs_val == rt_val {
                // Offset is in instructions, relative to the incremented
                // PC; the increment itself is applied by the caller.
                cpu.pc = cpu.pc.wrapping_add((decoded.simm << 2) as u32);
                Directive::BranchTaken
            } else {
                Directive::Sequential
            }
        }
        InstrKind::J => {
            cpu.pc = decoded.target << 2;
            Directive::Jump
        }
        InstrKind::Jal => {
            cpu.regs.write(REG_RA, cpu.pc.wrapping_add(WORD_BYTES));
            cpu.pc = decoded.target << 2;
            Directive::Jump
        }
        InstrKind::Jr => {
            cpu.pc = rs_val;
            Directive::Jump
        }
        InstrKind::Unknown { .. } => Directive::Sequential,
    }
}
