//! # Encoding Tests
//!
//! Verifies the exact 32-bit word each supported mnemonic assembles to,
//! and that decoding an assembled word recovers the source operands and
//! classification (the assemble/decode round-trip).

use pretty_assertions::assert_eq;
use rstest::rstest;

use mips_core::assemble;
use mips_core::isa::{InstrKind, classify, decode};

/// Each supported form assembles to its known encoding.
#[rstest]
#[case("addu $t2, $t0, $t1", 0x01095021)]
#[case("subu $t2, $t0, $t1", 0x01095023)]
#[case("slt $t2, $t0, $t1", 0x0109502A)]
#[case("jr $ra", 0x03E00008)]
#[case("addi $t0, $zero, -1", 0x2008FFFF)]
#[case("addiu $s0, $s1, 100", 0x26300064)]
#[case("ori $t0, $t0, 0x5", 0x35080005)]
#[case("lui $t0, 0x10", 0x3C080010)]
#[case("lw $t1, 0($zero)", 0x8C090000)]
#[case("sw $t0, 0($zero)", 0xAC080000)]
#[case("sw $t0, -4($sp)", 0xAFA8FFFC)]
#[case("beq $t0, $t1, 2", 0x11090002)]
#[case("j 0x10", 0x08000010)]
#[case("jal 0x10", 0x0C000010)]
fn encodes_known_words(#[case] line: &str, #[case] expected: u32) {
    assert_eq!(assemble(line).unwrap(), vec![expected]);
}

/// Decoding an assembled line classifies back to the source mnemonic.
#[rstest]
#[case("addu $t2, $t0, $t1", InstrKind::Addu)]
#[case("subu $t2, $t0, $t1", InstrKind::Subu)]
#[case("slt $t2, $t0, $t1", InstrKind::Slt)]
#[case("jr $ra", InstrKind::Jr)]
#[case("addi $t0, $zero, 1", InstrKind::Addi)]
#[case("addiu $t0, $zero, 1", InstrKind::Addiu)]
#[case("ori $t0, $t0, 0x5", InstrKind::Ori)]
#[case("lui $t0, 0x10", InstrKind::Lui)]
#[case("lw $t1, 0($zero)", InstrKind::Lw)]
#[case("sw $t0, 0($zero)", InstrKind::Sw)]
#[case("beq $t0, $t1, 2", InstrKind::Beq)]
#[case("j 0", InstrKind::J)]
#[case("jal 0", InstrKind::Jal)]
fn round_trips_classification(#[case] line: &str, #[case] kind: InstrKind) {
    let words = assemble(line).unwrap();
    assert_eq!(classify(&decode(words[0])), kind);
}

/// Register and immediate fields survive the round-trip intact.
#[test]
fn round_trips_fields() {
    let words = assemble("addu $t2, $t0, $t1").unwrap();
    let d = decode(words[0]);
    assert_eq!((d.rd, d.rs, d.rt), (10, 8, 9));

    let words = assemble("lw $t1, -4($t0)").unwrap();
    let d = decode(words[0]);
    assert_eq!((d.rt, d.rs, d.simm), (9, 8, -4));

    let words = assemble("addi $t0, $s3, 0x7FFF").unwrap();
    let d = decode(words[0]);
    assert_eq!((d.rt, d.rs, d.simm), (8, 19, 0x7FFF));
}

/// Numeric register aliases encode identically to the named forms.
#[test]
fn accepts_numeric_register_aliases() {
    assert_eq!(
        assemble("addu $10, $8, $9").unwrap(),
        assemble("addu $t2, $t0, $t1").unwrap()
    );
}

/// Mnemonics are matched case-insensitively.
#[test]
fn lower_cases_mnemonics() {
    assert_eq!(assemble("ADDU $t2, $t0, $t1").unwrap(), vec![0x01095021]);
}

/// Wide immediates keep their low 16 bits, silently.
#[test]
fn truncates_wide_immediates() {
    assert_eq!(assemble("ori $t0, $t0, 0x12345").unwrap(), vec![0x35082345]);
}

/// Wide jump targets keep their low 26 bits, silently.
#[test]
fn truncates_wide_targets() {
    assert_eq!(assemble("j 0x12345678").unwrap(), vec![0x0A345678]);
}

/// `jr` leaves every field but rs and funct zero.
#[test]
fn jr_unused_fields_are_zero() {
    let d = decode(assemble("jr $t0").unwrap()[0]);
    assert_eq!((d.opcode, d.rs, d.rt, d.rd, d.shamt), (0, 8, 0, 0, 0));
}

/// Comments and blank lines contribute no words.
#[test]
fn skips_comments_and_blanks() {
    let source = "# setup\n\naddi $t0, $zero, 1  # one\n   \n# done\n";
    assert_eq!(assemble(source).unwrap().len(), 1);
}
