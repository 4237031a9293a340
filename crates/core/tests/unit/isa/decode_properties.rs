//! # Decode Properties
//!
//! Decoding is total over all 32-bit inputs: every pattern yields
//! in-range fields without panicking, and the sign-extended immediate
//! agrees with the zero-extended one on the low 16 bits.

use proptest::prelude::*;

use mips_core::isa::decode;

proptest! {
    /// Every field lands inside its declared bit width.
    #[test]
    fn fields_stay_in_range(word in any::<u32>()) {
        let d = decode(word);
        prop_assert!(d.opcode < 64);
        prop_assert!(d.rs < 32);
        prop_assert!(d.rt < 32);
        prop_assert!(d.rd < 32);
        prop_assert!(d.shamt < 32);
        prop_assert!(d.funct < 64);
        prop_assert!(d.imm <= 0xFFFF);
        prop_assert!(d.target <= 0x3FFFFFF);
        prop_assert_eq!(d.raw, word);
    }

    /// The two immediate interpretations agree on the low 16 bits, and
    /// the sign-extended one is negative exactly when bit 15 is set.
    #[test]
    fn immediates_are_consistent(word in any::<u32>()) {
        let d = decode(word);
        prop_assert_eq!((d.simm as u32) & 0xFFFF, d.imm);
        prop_assert_eq!(d.simm < 0, d.imm & 0x8000 != 0);
    }

    /// Field extraction inverts field packing.
    #[test]
    fn extraction_inverts_packing(
        opcode in 0u32..64,
        rs in 0u32..32,
        rt in 0u32..32,
        imm in 0u32..=0xFFFF,
    ) {
        let word = (opcode << 26) | (rs << 21) | (rt << 16) | imm;
        let d = decode(word);
        prop_assert_eq!(d.opcode, opcode);
        prop_assert_eq!(d.rs as u32, rs);
        prop_assert_eq!(d.rt as u32, rt);
        prop_assert_eq!(d.imm, imm);
    }
}

/// A negative 16-bit immediate sign-extends to the matching `i32`.
#[test]
fn sign_extends_negative_immediates() {
    assert_eq!(decode(0x2008FFFF).simm, -1);
    assert_eq!(decode(0x2008FFFC).simm, -4);
    assert_eq!(decode(0x20087FFF).simm, 0x7FFF);
}
