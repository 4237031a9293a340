//! MIPS register name mappings.
//!
//! Maps `$`-prefixed register tokens to architectural indices and back.
//! Both spellings are accepted on input: the numeric aliases (`$0`-`$31`)
//! and the conventional ABI names (`$zero`, `$at`, `$v0`, ...). Display
//! always uses the conventional name.

/// Register 31 (`$ra`, return address written by `jal`).
pub const REG_RA: usize = 31;

/// Conventional ABI names for registers 0-31, without the `$` sigil.
pub const REG_NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp",
    "fp", "ra",
];

/// Returns the display name (`$`-prefixed) for a register index.
#[inline]
pub fn name(idx: usize) -> String {
    REG_NAMES
        .get(idx)
        .map_or_else(|| "$??".to_string(), |n| format!("${n}"))
}

/// Resolves a `$`-prefixed register token to its architectural index.
///
/// Accepts both conventional names (`$t0`) and numeric aliases (`$8`).
/// Returns `None` when the token names no register, including tokens
/// missing the `$` sigil entirely.
///
/// # Arguments
///
/// * `token` - The operand token as written in the source.
pub fn lookup(token: &str) -> Option<u32> {
    let body = token.strip_prefix('$')?;

    if let Ok(idx) = body.parse::<u32>() {
        return (idx < 32).then_some(idx);
    }

    REG_NAMES
        .iter()
        .position(|&n| n == body)
        .map(|idx| idx as u32)
}
