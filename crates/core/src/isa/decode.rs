//! MIPS Instruction Decoder.
//!
//! This module handles the decoding of 32-bit MIPS instruction encodings
//! into a structured `Decoded` format. It extracts the opcode, register
//! indices, shift amount, function code, both immediate interpretations,
//! and the jump target field.
//!
//! Decoding is a pure, total function: every 32-bit pattern decodes
//! without error. Whether the pattern names a supported instruction is
//! the classifier's concern, not the decoder's.

use crate::isa::instruction::{Decoded, WordBits, sign_extend_imm};

/// Decodes a MIPS instruction into its component fields.
///
/// Extracts every fixed bit range of the word regardless of which
/// instruction class the word belongs to; unused fields simply carry
/// whatever bits happen to sit in their range.
///
/// # Arguments
///
/// * `word` - The 32-bit instruction encoding to decode.
///
/// # Returns
///
/// A `Decoded` structure containing all extracted instruction fields.
pub fn decode(word: u32) -> Decoded {
    let imm = word.imm();

    Decoded {
        raw: word,
        opcode: word.opcode(),
        rs: word.rs(),
        rt: word.rt(),
        rd: word.rd(),
        shamt: word.shamt(),
        funct: word.funct(),
        imm,
        simm: sign_extend_imm(imm),
        target: word.target(),
    }
}
