//! Word extraction from memory-image text.
//!
//! The hardware flow hands programs around as text blocks full of
//! `32'hXXXXXXXX` literals. This loader recovers the word sequence from
//! any such text: per non-blank, non-`//`-comment line, the first run
//! of eight hex digits becomes one word, in line order. Lines with no
//! hex word contribute nothing.

/// Extracts one instruction word per line holding an 8-hex-digit run.
///
/// # Arguments
///
/// * `text` - Arbitrary memory-image text (e.g. a Verilog block).
pub fn extract_words(text: &str) -> Vec<u32> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("//"))
        .filter_map(first_hex_word)
        .collect()
}

/// Finds the first window of 8 consecutive hex digits in a line.
fn first_hex_word(line: &str) -> Option<u32> {
    let mut run = 0;
    for (i, byte) in line.bytes().enumerate() {
        if byte.is_ascii_hexdigit() {
            run += 1;
            if run == 8 {
                return u32::from_str_radix(&line[i + 1 - 8..=i], 16).ok();
            }
        } else {
            run = 0;
        }
    }
    None
}
