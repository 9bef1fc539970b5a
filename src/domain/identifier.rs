//! Identifier formatting.
//!
//! An identifier is a prefix followed by a decimal number left-padded with zeros
//! to a minimum width. Numbers wider than the width are never truncated.

/// Prefix and minimum digit width used to render identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdFormat {
    /// Text prepended to every identifier.
    pub prefix: String,
    /// Minimum number of characters for the numeric part.
    pub digit_width: usize,
}

impl IdFormat {
    /// Create a new format.
    pub fn new(prefix: impl Into<String>, digit_width: usize) -> Self {
        Self {
            prefix: prefix.into(),
            digit_width,
        }
    }

    /// Render `number` as an identifier.
    #[must_use]
    pub fn format(&self, number: i64) -> String {
        let mut id = String::with_capacity(self.prefix.len() + self.digit_width);
        id.push_str(&self.prefix);
        id.push_str(&zero_pad(number, self.digit_width));
        id
    }
}

/// Render `number` in decimal and left-pad the text with `'0'` up to `width` characters.
///
/// Padding is applied to the rendered text, sign included, so `-5` at width 6
/// becomes `0000-5`.
#[must_use]
pub fn zero_pad(number: i64, width: usize) -> String {
    let digits = number.to_string();
    let fill = width.saturating_sub(digits.len());
    format!("{}{digits}", "0".repeat(fill))
}
