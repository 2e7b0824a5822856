//! Caret screen-position math for the MoneyInput.
//!
//! Selection offsets are byte positions into the buffer, but the
//! terminal cursor wants display columns. The prefix can contain
//! multibyte, non-single-width characters ("€ "), so the conversion
//! goes through unicode-width.

use unicode_width::UnicodeWidthStr;

/// Display column of the given byte offset within the text.
pub(super) fn display_col(text: &str, byte_pos: usize) -> u16 {
    let pos = byte_pos.min(text.len());
    text[..pos].width() as u16
}

/// Normalize a selection range to (low, high) byte order.
pub(super) fn ordered(start: usize, end: usize) -> (usize, usize) {
    (start.min(end), start.max(end))
}
