//! Parsing of raw numeric text typed into form fields.
//!
//! Text is read as a leading integer: surrounding whitespace is skipped, one
//! optional sign is accepted, and the longest run of ASCII digits after it is
//! taken. Anything after the digits is ignored, so `"3.9"` reads as 3.

/// Parse the leading integer of `text`.
///
/// Returns `None` when no digits are present or the value does not fit in an `i64`.
#[must_use]
pub fn parse_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let digits = &rest[..digits_len];
    if negative {
        format!("-{digits}").parse().ok()
    } else {
        digits.parse().ok()
    }
}

/// Parse the leading integer of `text`, accepting only values greater than zero.
#[must_use]
pub fn parse_positive(text: &str) -> Option<i64> {
    parse_integer(text).filter(|value| *value > 0)
}
