//! Hex string normalization.
//!
//! Paint catalogs arrive with every hex spelling imaginable (`#fff`,
//! `0x112233`, `ff112233` with a leading alpha byte, stray spaces). All of
//! them are folded into one canonical form: exactly six uppercase hex digits,
//! no prefix.

/// Canonical hex used when a record carries no usable hex digits at all.
pub const NEUTRAL_GRAY_HEX: &str = "808080";

/// Normalizes any hex-ish string into six uppercase hex digits.
///
/// Rules, applied in order:
/// - a leading `#` or `0x`/`0X` is stripped
/// - every non-hex character is dropped
/// - 8 digits: the leading alpha byte is dropped
/// - 4 digits: the leading alpha nibble is dropped, the other three are doubled
/// - 3 digits: each digit is doubled
/// - more than 6 digits: the last 6 are kept
/// - the result is left-padded with `0` to 6 digits and upper-cased
///
/// # Examples
///
/// ```
/// use palettesmith::color::normalize_hex;
///
/// assert_eq!(normalize_hex("#fff"), "FFFFFF");
/// assert_eq!(normalize_hex("0x112233"), "112233");
/// assert_eq!(normalize_hex("ff112233"), "112233");
/// assert_eq!(normalize_hex(""), "000000");
/// ```
#[must_use]
pub fn normalize_hex(input: &str) -> String {
    let trimmed = input.trim();
    let body = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let digits: Vec<char> = body.chars().filter(char::is_ascii_hexdigit).collect();

    let digits: Vec<char> = match digits.len() {
        8 => digits[2..].to_vec(),
        4 => digits[1..].iter().flat_map(|&c| [c, c]).collect(),
        3 => digits.iter().flat_map(|&c| [c, c]).collect(),
        len if len > 6 => digits[len - 6..].to_vec(),
        _ => digits,
    };

    let joined: String = digits.into_iter().collect();
    format!("{joined:0>6}").to_ascii_uppercase()
}

/// Returns true if the input contains at least one hex digit after prefix stripping.
#[must_use]
pub fn has_hex_digits(input: &str) -> bool {
    let trimmed = input.trim();
    let body = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    body.chars().any(|c| c.is_ascii_hexdigit())
}

/// Parses a hex string into `[r, g, b]`.
///
/// The input is normalized first, so any spelling accepted by
/// [`normalize_hex`] works. Falls back to black if parsing fails.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> [u8; 3] {
    let value = u32::from_str_radix(&normalize_hex(hex), 16).unwrap_or(0);
    let [_, r, g, b] = value.to_be_bytes();
    [r, g, b]
}
