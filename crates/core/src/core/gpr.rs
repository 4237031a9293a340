//! MIPS General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file. It
//! performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`$zero`-`$ra`).
//! 2. **Invariant Enforcement:** Ensures that register 0 reads zero after
//!    every mutating step.
//! 3. **Snapshots:** Copies the full file by value for trace records.

use crate::common::constants::REG_COUNT;
use crate::isa::reg;

/// General-Purpose Register file.
///
/// Contains 32 registers of 32 bits each. Register 0 (`$zero`) is
/// hardwired: writes to it are discarded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; REG_COUNT],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; REG_COUNT],
        }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register 0 always returns 0.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// Writes to register 0 are ignored, which keeps the zero-register
    /// invariant without a separate fix-up pass after each instruction.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to write.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Returns a by-value copy of all 32 registers.
    ///
    /// Trace records archive these copies; they never alias live state.
    pub fn snapshot(&self) -> [u32; REG_COUNT] {
        self.regs
    }

    /// Dumps the contents of all registers to stdout.
    ///
    /// Displays registers in pairs with hexadecimal formatting for
    /// debugging purposes.
    pub fn dump(&self) {
        for i in (0..REG_COUNT).step_by(2) {
            println!(
                "{:>5}={:#010x} {:>5}={:#010x}",
                reg::name(i),
                self.regs[i],
                reg::name(i + 1),
                self.regs[i + 1]
            );
        }
    }
}
