//! Fixed-column field readers.
//!
//! All readers work on the raw bytes of a single line and never fail:
//! offsets past the end of the line are clamped, and malformed digits just
//! end the number early.

use encoding_rs::WINDOWS_1252;

const MAX_HEX_DIGITS: usize = 8;
const MAX_DEC_DIGITS: usize = 10;

/// Reads up to 8 hexadecimal digits starting at `offset`.
///
/// Stops at the first non-hex byte. Returns 0 if no digit was consumed.
pub fn parse_hex(line: &[u8], offset: usize) -> u32 {
    digits_from(line, offset, MAX_HEX_DIGITS)
        .map_while(|b| (b as char).to_digit(16))
        .fold(0, |acc, nibble| (acc << 4) | nibble)
}

/// Reads up to 10 decimal digits starting at `offset`.
///
/// Stops at the first non-digit byte. Returns 0 if no digit was consumed.
pub fn parse_int(line: &[u8], offset: usize) -> u64 {
    digits_from(line, offset, MAX_DEC_DIGITS)
        .map_while(|b| (b as char).to_digit(10))
        .fold(0, |acc, digit| acc * 10 + u64::from(digit))
}

fn digits_from(line: &[u8], offset: usize, max: usize) -> impl Iterator<Item = u8> + '_ {
    line.get(offset..)
        .unwrap_or_default()
        .iter()
        .copied()
        .take(max)
}

/// Returns the text in `[start, end)` with trailing whitespace removed.
///
/// Both bounds are clamped to the line length. Bytes are decoded as
/// Windows-1252, so the result is always valid.
pub fn extract_trimmed(line: &[u8], start: usize, end: usize) -> String {
    let end = end.min(line.len());
    let start = start.min(end);
    let field = &line[start..end];

    let len = field
        .iter()
        .rposition(|&b| !is_space(b))
        .map_or(0, |last| last + 1);

    WINDOWS_1252
        .decode_without_bom_handling(&field[..len])
        .0
        .into_owned()
}

/// Same set as C `isspace`, which includes vertical tab.
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}

/// Maps an empty column to `None`.
pub fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
