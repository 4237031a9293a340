//! Verilog memory-image rendering.
//!
//! Renders an encoded program as the instruction-memory initialization
//! block consumed by the hardware description flow. The format is
//! byte-reproducible: downstream tooling re-extracts the words from this
//! exact text, so spacing, casing, and the zero-fill loop must not
//! drift.

/// Renders the words as a Verilog `initial begin` memory block.
///
/// One assignment per word with the value repeated in a trailing
/// comment, followed by a loop zero-filling the remaining slots up to
/// `slots` (1024 in the hardware flow).
///
/// # Arguments
///
/// * `words` - The encoded program, in instruction order.
/// * `slots` - Total number of instruction-memory slots to cover.
pub fn memory_init_block(words: &[u32], slots: usize) -> String {
    let mut lines = Vec::with_capacity(words.len() + 7);

    lines.push("// Generated machine code".to_string());
    lines.push("initial begin".to_string());

    for (i, word) in words.iter().enumerate() {
        lines.push(format!("    memory[{i}] = 32'h{word:08X};  // {word:08X}"));
    }

    lines.push("    // Fill rest with NOPs".to_string());
    lines.push(format!(
        "    for (integer i = {}; i < {slots}; i = i + 1) begin",
        words.len()
    ));
    lines.push("        memory[i] = 32'h00000000;".to_string());
    lines.push("    end".to_string());
    lines.push("end".to_string());

    lines.join("\n")
}
