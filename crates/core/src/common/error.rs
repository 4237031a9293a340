//! Assembly error definitions.
//!
//! One error type covers both failure families the assembler can hit:
//! 1. **Syntax errors:** Unknown mnemonics, unknown register tokens,
//!    malformed `offset(reg)` operands, short operand lists.
//! 2. **Reference errors:** Operands that name a label which was never
//!    defined, surfaced when the encoding pass performs the lookup.
//!
//! Every variant carries the 1-based source line number so the caller can
//! report the failing line. Assembly aborts on the first error; there is
//! no partial output to recover.

use thiserror::Error;

/// Errors raised while assembling a source unit.
///
/// The simulator itself never raises errors: encodings it does not
/// recognise execute as no-ops. Only the assembler rejects input.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum AssemblyError {
    /// The mnemonic is not one of the supported instructions.
    #[error("line {line}: unknown instruction: {mnemonic}")]
    UnknownMnemonic {
        /// 1-based source line of the failing instruction.
        line: usize,
        /// The unrecognised mnemonic as written (lower-cased).
        mnemonic: String,
    },

    /// A register operand does not name any architectural register.
    #[error("line {line}: unknown register: {token}")]
    UnknownRegister {
        /// 1-based source line of the failing instruction.
        line: usize,
        /// The offending operand token.
        token: String,
    },

    /// A load/store operand does not match the `offset(reg)` shape.
    #[error("line {line}: invalid offset format: {operand}")]
    MalformedOffset {
        /// 1-based source line of the failing instruction.
        line: usize,
        /// The offending operand token.
        operand: String,
    },

    /// An operand names a label that no line in the unit defines.
    #[error("line {line}: undefined label: {label}")]
    UndefinedLabel {
        /// 1-based source line of the failing instruction.
        line: usize,
        /// The unresolved label name.
        label: String,
    },

    /// An operand is neither a number, a register, nor a label name.
    #[error("line {line}: invalid immediate: {token}")]
    InvalidImmediate {
        /// 1-based source line of the failing instruction.
        line: usize,
        /// The offending operand token.
        token: String,
    },

    /// The instruction has fewer operands than its form requires.
    #[error("line {line}: {mnemonic} expects {expected} operand(s)")]
    MissingOperand {
        /// 1-based source line of the failing instruction.
        line: usize,
        /// The mnemonic whose operand list is short.
        mnemonic: String,
        /// How many operands the form requires.
        expected: usize,
    },
}

impl AssemblyError {
    /// Returns the 1-based source line the error was raised on.
    pub fn line(&self) -> usize {
        match self {
            Self::UnknownMnemonic { line, .. }
            | Self::UnknownRegister { line, .. }
            | Self::MalformedOffset { line, .. }
            | Self::UndefinedLabel { line, .. }
            | Self::InvalidImmediate { line, .. }
            | Self::MissingOperand { line, .. } => *line,
        }
    }
}
