//! # Classification Tests
//!
//! One case per supported `(opcode, funct)` pairing plus the unknown
//! fallbacks and their diagnostic display strings.

use rstest::rstest;

use mips_core::isa::{InstrKind, classify, decode};

use crate::common::{i_type, j_type, r_type};

#[rstest]
#[case(r_type(8, 9, 10, 0x21), InstrKind::Addu)]
#[case(r_type(8, 9, 10, 0x23), InstrKind::Subu)]
#[case(r_type(8, 9, 10, 0x2A), InstrKind::Slt)]
#[case(r_type(31, 0, 0, 0x08), InstrKind::Jr)]
#[case(i_type(0x08, 0, 8, 1), InstrKind::Addi)]
#[case(i_type(0x09, 0, 8, 1), InstrKind::Addiu)]
#[case(i_type(0x0D, 8, 8, 5), InstrKind::Ori)]
#[case(i_type(0x0F, 0, 8, 0x10), InstrKind::Lui)]
#[case(i_type(0x23, 0, 9, 0), InstrKind::Lw)]
#[case(i_type(0x2B, 0, 8, 0), InstrKind::Sw)]
#[case(i_type(0x04, 8, 9, 2), InstrKind::Beq)]
#[case(j_type(0x02, 4), InstrKind::J)]
#[case(j_type(0x03, 4), InstrKind::Jal)]
fn classifies_supported_encodings(#[case] word: u32, #[case] kind: InstrKind) {
    assert_eq!(classify(&decode(word)), kind);
}

/// Opcode 0 with an unsupported funct keeps the funct for display.
#[test]
fn unknown_r_type_keeps_funct() {
    let kind = classify(&decode(r_type(8, 9, 10, 0x20)));
    assert_eq!(kind, InstrKind::Unknown { opcode: 0, funct: 0x20 });
    assert_eq!(kind.to_string(), "R-type (funct=20)");
}

/// An unsupported opcode keeps the opcode for display.
#[test]
fn unknown_opcode_keeps_opcode() {
    let kind = classify(&decode(0xFC000000));
    assert_eq!(
        kind,
        InstrKind::Unknown {
            opcode: 0x3F,
            funct: 0
        }
    );
    assert_eq!(kind.to_string(), "Unknown (opcode=3F)");
}

/// The all-zero word is an unknown R-type, not an instruction.
#[test]
fn zero_word_is_unknown() {
    assert!(matches!(
        classify(&decode(0)),
        InstrKind::Unknown { opcode: 0, funct: 0 }
    ));
}

/// Display names are the upper-case mnemonics the reports print.
#[rstest]
#[case(InstrKind::Addu, "ADDU")]
#[case(InstrKind::Lui, "LUI")]
#[case(InstrKind::Jal, "JAL")]
fn displays_upper_case_mnemonics(#[case] kind: InstrKind, #[case] text: &str) {
    assert_eq!(kind.to_string(), text);
}
