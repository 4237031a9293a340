//! # Label Resolution Tests
//!
//! Verifies pass-1 binding conventions and the two target formulas:
//! branch offsets carry the `-1` already-incremented-PC correction,
//! jump targets are the raw pass-1 index.

use pretty_assertions::assert_eq;

use mips_core::assemble;
use mips_core::isa::decode;

/// A forward branch over two instructions to a labelled third encodes
/// the index distance minus one.
#[test]
fn forward_branch_offset() {
    let source = "\
beq $t0, $t0, done
addi $t1, $t1, 1
addi $t1, $t1, 1
done: addi $t2, $t2, 7
";
    let words = assemble(source).unwrap();
    assert_eq!(words[0], 0x11080002, "offset must be 3 - 0 - 1 = 2");
}

/// A backward branch to the preceding instruction encodes -2.
#[test]
fn backward_branch_offset() {
    let source = "\
start: addi $t1, $t1, 1
beq $zero, $zero, start
";
    let words = assemble(source).unwrap();
    assert_eq!(decode(words[1]).simm, -2);
}

/// A branch to its own label encodes -1 (tight spin).
#[test]
fn self_branch_offset() {
    let words = assemble("loop: beq $zero, $zero, loop").unwrap();
    assert_eq!(decode(words[0]).simm, -1);
}

/// Jump targets take the raw pass-1 index, without the branch's -1.
#[test]
fn jump_targets_are_raw_indices() {
    let source = "\
j done
addi $t1, $t1, 1
addi $t1, $t1, 1
done: addi $t2, $t2, 7
";
    let words = assemble(source).unwrap();
    assert_eq!(decode(words[0]).target, 3);
}

/// The same label yields index for `jal` and index-minus-one-relative
/// for `beq`; the two formulas must not be unified.
#[test]
fn branch_and_jump_formulas_differ() {
    let source = "\
beq $t0, $t0, done
jal done
addi $t1, $t1, 1
done: addi $t2, $t2, 7
";
    let words = assemble(source).unwrap();
    assert_eq!(decode(words[0]).simm, 2, "beq: 3 - 0 - 1");
    assert_eq!(decode(words[1]).target, 3, "jal: raw index");
}

/// Label-only lines bind to the next instruction without consuming an
/// index.
#[test]
fn label_only_lines_do_not_count() {
    let source = "\
start:
addi $t0, $zero, 1
loop:
beq $t0, $t0, loop
";
    let words = assemble(source).unwrap();
    assert_eq!(words.len(), 2);
    assert_eq!(decode(words[1]).simm, -1, "loop binds to index 1");
}

/// A label is also usable as a plain immediate value.
#[test]
fn labels_resolve_in_immediate_position() {
    let source = "\
addi $t0, $zero, data
addi $t1, $t1, 1
data: addi $t2, $t2, 1
";
    let words = assemble(source).unwrap();
    assert_eq!(decode(words[0]).imm, 2);
}
