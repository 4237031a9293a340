//! Source parsing and instruction encoding.
//!
//! The assembler walks the source twice with the same line conventions:
//! pass 1 only collects labels, pass 2 encodes. A line is
//! `[label:] mnemonic operand[, operand]* [# comment]`, a label-only
//! line, or blank/comment-only. The instruction-index counter ticks for
//! every line that yields an instruction; label-only lines bind their
//! name to the index of the next instruction without ticking it.
//!
//! Immediates, offsets, and targets are masked to their field width
//! (16 or 26 bits) without range diagnostics: a wider value silently
//! keeps its low bits. This matches the hardware flow the word images
//! feed, where the field is all that exists.

use std::collections::HashMap;

use tracing::debug;

use crate::common::constants::{IMM_MASK, TARGET_MASK};
use crate::common::error::AssemblyError;
use crate::isa::{opcodes, reg};

/// Label table built by pass 1: name to instruction index.
type LabelTable = HashMap<String, u32>;

/// Everything an encoding helper needs to know about the current line.
struct LineContext<'a> {
    /// 1-based source line number, for error reporting.
    line: usize,
    /// Instruction index of this line (pass-2 counter value).
    index: u32,
    /// Immutable label table from pass 1.
    labels: &'a LabelTable,
}

/// Assembles a source unit into its sequence of 32-bit machine words.
///
/// Fails on the first malformed line; there is no partial output. Label
/// references resolve against the whole unit, so forward references are
/// fine.
///
/// # Arguments
///
/// * `source` - The complete assembly source text.
///
/// # Returns
///
/// The encoded words in instruction order.
///
/// # Errors
///
/// Returns an [`AssemblyError`] naming the failing line for unknown
/// mnemonics, unknown registers, malformed `offset(reg)` operands,
/// short operand lists, and operands that resolve to no label or number.
pub fn assemble(source: &str) -> Result<Vec<u32>, AssemblyError> {
    let lines: Vec<&str> = source.lines().collect();

    let labels = collect_labels(&lines);
    debug!(labels = labels.len(), "label pass complete");

    let mut words = Vec::new();
    let mut index: u32 = 0;
    for (num, raw) in lines.iter().enumerate() {
        if let Some(text) = instruction_text(raw) {
            let ctx = LineContext {
                line: num + 1,
                index,
                labels: &labels,
            };
            words.push(encode_line(text, &ctx)?);
            index += 1;
        }
    }

    debug!(words = words.len(), "encode pass complete");
    Ok(words)
}

/// Pass 1: binds every label to the index of the next instruction.
///
/// A label on the same line as an instruction binds to that
/// instruction's index; a label-only line binds to whatever instruction
/// follows. Duplicate names keep the last binding.
fn collect_labels(lines: &[&str]) -> LabelTable {
    let mut labels = LabelTable::new();
    let mut index: u32 = 0;

    for raw in lines {
        let text = strip_comment(raw);
        if let Some((label, _)) = text.split_once(':') {
            let _ = labels.insert(label.trim().to_string(), index);
        }
        if instruction_text(raw).is_some() {
            index += 1;
        }
    }

    labels
}

/// Returns the text up to the first `#`.
fn strip_comment(raw: &str) -> &str {
    raw.find('#').map_or(raw, |pos| &raw[..pos])
}

/// Strips comment and label, returning the instruction text if any.
///
/// Returns `None` for blank, comment-only, and label-only lines — the
/// lines that do not tick the instruction counter.
fn instruction_text(raw: &str) -> Option<&str> {
    let text = strip_comment(raw);
    let text = match text.split_once(':') {
        Some((_, rest)) => rest,
        None => text,
    };
    let text = text.trim();
    (!text.is_empty()).then_some(text)
}

/// Splits an instruction on commas and whitespace.
fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Encodes one instruction line, dispatching on its class.
fn encode_line(text: &str, ctx: &LineContext<'_>) -> Result<u32, AssemblyError> {
    let tokens = tokenize(text);
    let mnemonic = tokens.first().map_or_else(String::new, |t| t.to_lowercase());

    match mnemonic.as_str() {
        "addu" | "subu" | "slt" | "jr" => encode_r_type(&mnemonic, &tokens, ctx),
        "addi" | "addiu" | "ori" | "lui" | "lw" | "sw" | "beq" => {
            encode_i_type(&mnemonic, &tokens, ctx)
        }
        "j" | "jal" => encode_j_type(&mnemonic, &tokens, ctx),
        _ => Err(AssemblyError::UnknownMnemonic {
            line: ctx.line,
            mnemonic,
        }),
    }
}

/// Fetches operand `n`, reporting the form's arity when it is missing.
fn operand<'a>(
    tokens: &[&'a str],
    n: usize,
    mnemonic: &str,
    expected: usize,
    ctx: &LineContext<'_>,
) -> Result<&'a str, AssemblyError> {
    tokens
        .get(n)
        .copied()
        .ok_or_else(|| AssemblyError::MissingOperand {
            line: ctx.line,
            mnemonic: mnemonic.to_string(),
            expected,
        })
}

/// Resolves a register token against the architectural name table.
fn parse_register(token: &str, ctx: &LineContext<'_>) -> Result<u32, AssemblyError> {
    reg::lookup(token).ok_or_else(|| AssemblyError::UnknownRegister {
        line: ctx.line,
        token: token.to_string(),
    })
}

/// Parses an immediate operand: `0x`-hex, a defined label, or decimal.
///
/// The label table is consulted between the two numeric forms, matching
/// the encode-time lookup convention: a token that is neither a number
/// nor a defined label is an undefined-label reference when it looks
/// like an identifier, and garbage otherwise.
fn parse_immediate(token: &str, ctx: &LineContext<'_>) -> Result<i64, AssemblyError> {
    if let Some(hex) = token.strip_prefix("0x") {
        return i64::from_str_radix(hex, 16).map_err(|_| AssemblyError::InvalidImmediate {
            line: ctx.line,
            token: token.to_string(),
        });
    }

    if let Some(&index) = ctx.labels.get(token) {
        return Ok(i64::from(index));
    }

    if let Ok(value) = token.parse::<i64>() {
        return Ok(value);
    }

    let identifier = token
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if identifier {
        Err(AssemblyError::UndefinedLabel {
            line: ctx.line,
            label: token.to_string(),
        })
    } else {
        Err(AssemblyError::InvalidImmediate {
            line: ctx.line,
            token: token.to_string(),
        })
    }
}

/// Parses a `offset(reg)` memory operand into (offset, base register).
///
/// The offset is decimal, optionally negative; the base register sits
/// in parentheses directly after it.
fn parse_offset(token: &str, ctx: &LineContext<'_>) -> Result<(i64, u32), AssemblyError> {
    let malformed = AssemblyError::MalformedOffset {
        line: ctx.line,
        operand: token.to_string(),
    };

    match token.find('(') {
        Some(open) if token.ends_with(')') => {
            match token[..open].parse::<i64>() {
                Ok(offset) => {
                    let rs = parse_register(&token[open + 1..token.len() - 1], ctx)?;
                    Ok((offset, rs))
                }
                Err(_) => Err(malformed),
            }
        }
        _ => Err(malformed),
    }
}

/// Encodes an R-type instruction (opcode 0, funct-selected).
fn encode_r_type(
    mnemonic: &str,
    tokens: &[&str],
    ctx: &LineContext<'_>,
) -> Result<u32, AssemblyError> {
    let funct = match mnemonic {
        "addu" => opcodes::FUNCT_ADDU,
        "subu" => opcodes::FUNCT_SUBU,
        "slt" => opcodes::FUNCT_SLT,
        _ => opcodes::FUNCT_JR,
    };

    if mnemonic == "jr" {
        let rs = parse_register(operand(tokens, 1, mnemonic, 1, ctx)?, ctx)?;
        return Ok((rs << 21) | funct);
    }

    let rd = parse_register(operand(tokens, 1, mnemonic, 3, ctx)?, ctx)?;
    let rs = parse_register(operand(tokens, 2, mnemonic, 3, ctx)?, ctx)?;
    let rt = parse_register(operand(tokens, 3, mnemonic, 3, ctx)?, ctx)?;

    Ok((rs << 21) | (rt << 16) | (rd << 11) | funct)
}

/// Encodes an I-type instruction (16-bit immediate/offset field).
fn encode_i_type(
    mnemonic: &str,
    tokens: &[&str],
    ctx: &LineContext<'_>,
) -> Result<u32, AssemblyError> {
    let opcode = match mnemonic {
        "addi" => opcodes::OP_ADDI,
        "addiu" => opcodes::OP_ADDIU,
        "ori" => opcodes::OP_ORI,
        "lui" => opcodes::OP_LUI,
        "lw" => opcodes::OP_LW,
        "sw" => opcodes::OP_SW,
        _ => opcodes::OP_BEQ,
    };

    match mnemonic {
        "lw" | "sw" => {
            let rt = parse_register(operand(tokens, 1, mnemonic, 2, ctx)?, ctx)?;
            let (offset, rs) = parse_offset(operand(tokens, 2, mnemonic, 2, ctx)?, ctx)?;
            Ok((opcode << 26) | (rs << 21) | (rt << 16) | (offset as u32 & IMM_MASK))
        }
        "beq" => {
            let rs = parse_register(operand(tokens, 1, mnemonic, 3, ctx)?, ctx)?;
            let rt = parse_register(operand(tokens, 2, mnemonic, 3, ctx)?, ctx)?;
            let target = operand(tokens, 3, mnemonic, 3, ctx)?;

            // A label resolves relative to the already-incremented PC,
            // hence the -1; a literal is taken as the offset verbatim.
            let offset = match ctx.labels.get(target) {
                Some(&index) => i64::from(index) - i64::from(ctx.index) - 1,
                None => parse_immediate(target, ctx)?,
            };

            Ok((opcode << 26) | (rs << 21) | (rt << 16) | (offset as u32 & IMM_MASK))
        }
        "lui" => {
            let rt = parse_register(operand(tokens, 1, mnemonic, 2, ctx)?, ctx)?;
            let imm = parse_immediate(operand(tokens, 2, mnemonic, 2, ctx)?, ctx)?;
            Ok((opcode << 26) | (rt << 16) | (imm as u32 & IMM_MASK))
        }
        _ => {
            let rt = parse_register(operand(tokens, 1, mnemonic, 3, ctx)?, ctx)?;
            let rs = parse_register(operand(tokens, 2, mnemonic, 3, ctx)?, ctx)?;
            let imm = parse_immediate(operand(tokens, 3, mnemonic, 3, ctx)?, ctx)?;
            Ok((opcode << 26) | (rs << 21) | (rt << 16) | (imm as u32 & IMM_MASK))
        }
    }
}

/// Encodes a J-type instruction (26-bit target field).
fn encode_j_type(
    mnemonic: &str,
    tokens: &[&str],
    ctx: &LineContext<'_>,
) -> Result<u32, AssemblyError> {
    let opcode = if mnemonic == "j" {
        opcodes::OP_J
    } else {
        opcodes::OP_JAL
    };

    let token = operand(tokens, 1, mnemonic, 1, ctx)?;
    let target = match ctx.labels.get(token) {
        Some(&index) => i64::from(index),
        None => parse_immediate(token, ctx)?,
    };

    Ok((opcode << 26) | (target as u32 & TARGET_MASK))
}
