//! MIPS-Subset Opcode and Function-Code Tables.
//!
//! Defines the major opcodes (bits 31-26) and the R-type function codes
//! (bits 5-0) for the supported instruction subset. These tables are
//! immutable: both the assembler and the classifier read them, nothing
//! ever writes them.

/// R-type instructions share this major opcode; funct selects the operation.
pub const OP_RTYPE: u32 = 0x00;

/// Jump (J).
pub const OP_J: u32 = 0x02;

/// Jump And Link (JAL).
pub const OP_JAL: u32 = 0x03;

/// Branch On Equal (BEQ).
pub const OP_BEQ: u32 = 0x04;

/// Add Immediate (ADDI).
pub const OP_ADDI: u32 = 0x08;

/// Add Immediate Unsigned (ADDIU).
pub const OP_ADDIU: u32 = 0x09;

/// Or Immediate (ORI).
pub const OP_ORI: u32 = 0x0D;

/// Load Upper Immediate (LUI).
pub const OP_LUI: u32 = 0x0F;

/// Load Word (LW).
pub const OP_LW: u32 = 0x23;

/// Store Word (SW).
pub const OP_SW: u32 = 0x2B;

/// Jump Register (JR) function code.
pub const FUNCT_JR: u32 = 0x08;

/// Add Unsigned (ADDU) function code.
pub const FUNCT_ADDU: u32 = 0x21;

/// Subtract Unsigned (SUBU) function code.
pub const FUNCT_SUBU: u32 = 0x23;

/// Set On Less Than (SLT) function code.
pub const FUNCT_SLT: u32 = 0x2A;
