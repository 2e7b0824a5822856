//! # Format Options
//!
//! The display format for one field: separators, precision, prefix,
//! and sign policy. Options are fixed for the lifetime of a
//! [`FieldFormatter`](crate::core::formatter::FieldFormatter) instance —
//! there is no way to change them after construction.

/// Immutable display configuration for a monetary field.
///
/// `decimal` and `thousands` must be distinct characters for the
/// displayed text to round-trip through [`value()`] unambiguously.
/// This is not enforced here; config resolution warns about it.
///
/// [`value()`]: crate::core::formatter::FieldFormatter::value
#[derive(Debug, Clone, PartialEq)]
pub struct FormatOptions {
    /// Decimal separator shown before the fractional digits.
    pub decimal: char,
    /// Grouping separator inserted every three integer digits.
    pub thousands: char,
    /// Number of fractional digits, zero-padded. With `0`, the decimal
    /// separator is omitted entirely.
    pub precision: usize,
    /// Literal string prepended to every non-empty formatted result.
    pub prefix: String,
    /// Whether a leading minus is accepted and preserved. When false,
    /// minus characters are stripped and never reattached.
    pub allow_negative: bool,
    /// Select the whole text on focus instead of placing the caret at
    /// the end.
    pub select_on_focus: bool,
}

impl Default for FormatOptions {
    /// European-style defaults: `"€ 1.234,56"`.
    fn default() -> Self {
        Self {
            decimal: ',',
            thousands: '.',
            precision: 2,
            prefix: "€ ".to_string(),
            allow_negative: true,
            select_on_focus: false,
        }
    }
}
