//! Symbolic instruction classification.
//!
//! Maps decoded `(opcode, funct)` pairs to a mnemonic tag. Unrecognised
//! encodings classify to an `Unknown` tag carrying the raw selectors so
//! reports can display them; they are never an error. The execution
//! engine treats `Unknown` as a no-op step, which keeps a simulation
//! running past encodings this subset does not model.

use std::fmt;

use serde::Serialize;

use crate::isa::instruction::Decoded;
use crate::isa::opcodes;

/// Symbolic tag identifying which instruction a decoded word is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum InstrKind {
    /// Add Unsigned: `rd = rs + rt` (mod 2^32).
    Addu,
    /// Subtract Unsigned: `rd = rs - rt` (mod 2^32).
    Subu,
    /// Set On Less Than (signed compare): `rd = (rs < rt)`.
    Slt,
    /// Jump Register: `pc = rs`.
    Jr,
    /// Add Immediate: `rt = rs + sign_ext(imm)`.
    Addi,
    /// Add Immediate Unsigned: `rt = rs + sign_ext(imm)`.
    Addiu,
    /// Or Immediate: `rt = rs | zero_ext(imm)`.
    Ori,
    /// Load Upper Immediate: `rt = imm << 16`.
    Lui,
    /// Load Word: `rt = mem[rs + sign_ext(imm)]`.
    Lw,
    /// Store Word: `mem[rs + sign_ext(imm)] = rt`.
    Sw,
    /// Branch On Equal: relative branch when `rs == rt`.
    Beq,
    /// Jump: `pc = target << 2`.
    J,
    /// Jump And Link: `$ra = pc + 4; pc = target << 2`.
    Jal,
    /// Any encoding outside the supported subset.
    ///
    /// Carries the raw selector fields for diagnostic display. Executes
    /// as a no-op.
    Unknown {
        /// Major opcode of the unrecognised word.
        opcode: u32,
        /// Function code of the unrecognised word.
        funct: u32,
    },
}

impl fmt::Display for InstrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Addu => write!(f, "ADDU"),
            Self::Subu => write!(f, "SUBU"),
            Self::Slt => write!(f, "SLT"),
            Self::Jr => write!(f, "JR"),
            Self::Addi => write!(f, "ADDI"),
            Self::Addiu => write!(f, "ADDIU"),
            Self::Ori => write!(f, "ORI"),
            Self::Lui => write!(f, "LUI"),
            Self::Lw => write!(f, "LW"),
            Self::Sw => write!(f, "SW"),
            Self::Beq => write!(f, "BEQ"),
            Self::J => write!(f, "J"),
            Self::Jal => write!(f, "JAL"),
            Self::Unknown { opcode, funct } => {
                if *opcode == opcodes::OP_RTYPE {
                    write!(f, "R-type (funct={funct:02X})")
                } else {
                    write!(f, "Unknown (opcode={opcode:02X})")
                }
            }
        }
    }
}

/// Classifies a decoded word by its `(opcode, funct)` selectors.
///
/// Opcode 0 routes through the R-type function-code table; every other
/// opcode maps directly. Anything outside the 13-instruction subset
/// yields `InstrKind::Unknown`.
pub fn classify(decoded: &Decoded) -> InstrKind {
    match decoded.opcode {
        opcodes::OP_RTYPE => match decoded.funct {
            opcodes::FUNCT_ADDU => InstrKind::Addu,
            opcodes::FUNCT_SUBU => InstrKind::Subu,
            opcodes::FUNCT_SLT => InstrKind::Slt,
            opcodes::FUNCT_JR => InstrKind::Jr,
            funct => InstrKind::Unknown {
                opcode: opcodes::OP_RTYPE,
                funct,
            },
        },
        opcodes::OP_ADDI => InstrKind::Addi,
        opcodes::OP_ADDIU => InstrKind::Addiu,
        opcodes::OP_ORI => InstrKind::Ori,
        opcodes::OP_LUI => InstrKind::Lui,
        opcodes::OP_LW => InstrKind::Lw,
        opcodes::OP_SW => InstrKind::Sw,
        opcodes::OP_BEQ => InstrKind::Beq,
        opcodes::OP_J => InstrKind::J,
        opcodes::OP_JAL => InstrKind::Jal,
        opcode => InstrKind::Unknown {
            opcode,
            funct: decoded.funct,
        },
    }
}
