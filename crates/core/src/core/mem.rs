//! Sparse Data Memory.
//!
//! This module implements the simulator's data memory. It provides:
//! 1. **Sparse storage:** A map from 32-bit byte address to 32-bit word;
//!    only written addresses occupy space.
//! 2. **Default reads:** Unwritten addresses read as 0.
//! 3. **Snapshots:** Deep copies of the full contents for trace records.
//!
//! Addresses are byte addresses as computed by `lw`/`sw` (base plus
//! sign-extended offset); the memory does not require alignment and does
//! not split words into bytes.

use std::collections::BTreeMap;

/// Sparse word-addressable memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Memory {
    words: BTreeMap<u32, u32>,
}

impl Memory {
    /// Creates an empty memory.
    pub fn new() -> Self {
        Self {
            words: BTreeMap::new(),
        }
    }

    /// Reads the word at `addr`, or 0 if the address was never written.
    pub fn read(&self, addr: u32) -> u32 {
        self.words.get(&addr).copied().unwrap_or(0)
    }

    /// Writes a word to `addr`.
    pub fn write(&mut self, addr: u32, val: u32) {
        let _ = self.words.insert(addr, val);
    }

    /// Returns the number of distinct addresses ever written.
    ///
    /// The trace analyzer uses this as its coarse write-detection
    /// heuristic: a growing key count means a store touched a fresh
    /// address.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true when no address has ever been written.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns a deep copy of the full contents.
    ///
    /// Trace records archive these copies; later stores cannot
    /// retroactively change an archived snapshot.
    pub fn snapshot(&self) -> BTreeMap<u32, u32> {
        self.words.clone()
    }

    /// Iterates the written addresses and their values in address order.
    pub fn iter(&self) -> impl Iterator<Item = (&u32, &u32)> {
        self.words.iter()
    }
}
