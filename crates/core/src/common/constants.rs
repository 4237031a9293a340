//! Shared constants for the MIPS-subset encoding and memory model.
//!
//! Field masks live here because both the assembler (packing) and the
//! decoder (unpacking) must agree on them exactly.

/// Size of one instruction word in bytes.
///
/// The program counter advances by this amount on every sequential step,
/// and branch/jump targets are converted between instruction indices and
/// byte addresses by multiplying/dividing by it.
pub const WORD_BYTES: u32 = 4;

/// Number of general-purpose registers in the architectural register file.
pub const REG_COUNT: usize = 32;

/// Bit mask for a 5-bit register field (rs, rt, rd, shamt).
pub const REG_MASK: u32 = 0x1F;

/// Bit mask for the 6-bit opcode and funct fields.
pub const SELECTOR_MASK: u32 = 0x3F;

/// Bit mask for the 16-bit immediate/offset field of I-type instructions.
///
/// Values wider than 16 bits are truncated against this mask before being
/// packed; the assembler deliberately raises no range diagnostic.
pub const IMM_MASK: u32 = 0xFFFF;

/// Bit mask for the 26-bit target field of J-type instructions.
pub const TARGET_MASK: u32 = 0x3FFFFFF;

/// Sign bit of the 16-bit immediate field.
pub const IMM_SIGN_BIT: u32 = 0x8000;
