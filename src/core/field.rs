//! The field seam: what the formatter needs from a host text field.
//!
//! [`TextField`] is the construction contract — a mutable text value
//! plus a selection-range setter. The formatter binds to anything that
//! implements it, keeping the core free of toolkit types.
//! [`FieldBuffer`] is the in-memory implementation used by the TUI
//! widget and by tests.

/// An editable text field handle the formatter can bind to.
///
/// Selection offsets are byte positions into the text; a collapsed
/// range (`start == end`) is a caret.
pub trait TextField {
    fn text(&self) -> &str;

    /// Overwrite the field content. The host applies its default caret
    /// behavior (for [`FieldBuffer`]: caret moves to the end).
    fn set_text(&mut self, text: &str);

    /// Set the selection range. A collapsed range places the caret.
    fn set_selection(&mut self, start: usize, end: usize);
}

/// A plain in-memory text field: a string buffer plus a selection
/// range. This is the host field used by the TUI widget.
#[derive(Debug, Default, Clone)]
pub struct FieldBuffer {
    text: String,
    start: usize,
    end: usize,
}

impl FieldBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current selection as (start, end) byte offsets. The caret sits
    /// at `end`.
    pub fn selection(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    /// Caret byte offset (the selection end).
    pub fn caret(&self) -> usize {
        self.end
    }

    pub fn has_selection(&self) -> bool {
        self.start != self.end
    }

    /// Delete the selected range, collapsing the caret to its start.
    /// No-op when the selection is already collapsed.
    pub fn delete_selection(&mut self) {
        if self.start != self.end {
            let (lo, hi) = (self.start.min(self.end), self.start.max(self.end));
            self.text.drain(lo..hi);
            self.start = lo;
            self.end = lo;
        }
    }

    /// Insert a character at the caret, replacing any selection.
    pub fn insert_char(&mut self, c: char) {
        self.delete_selection();
        self.text.insert(self.end, c);
        self.end += c.len_utf8();
        self.start = self.end;
    }

    /// Delete the character before the caret (or the selection).
    pub fn delete_backward(&mut self) {
        if self.has_selection() {
            self.delete_selection();
        } else if self.end > 0 {
            let prev = prev_char_boundary(&self.text, self.end);
            self.text.drain(prev..self.end);
            self.start = prev;
            self.end = prev;
        }
    }

    /// Delete the character after the caret (or the selection).
    pub fn delete_forward(&mut self) {
        if self.has_selection() {
            self.delete_selection();
        } else if self.end < self.text.len() {
            let next = next_char_boundary(&self.text, self.end);
            self.text.drain(self.end..next);
        }
    }

    /// Move the caret one character left, collapsing any selection.
    pub fn move_left(&mut self) {
        let pos = if self.has_selection() {
            self.start.min(self.end)
        } else if self.end > 0 {
            prev_char_boundary(&self.text, self.end)
        } else {
            0
        };
        self.start = pos;
        self.end = pos;
    }

    /// Move the caret one character right, collapsing any selection.
    pub fn move_right(&mut self) {
        let pos = if self.has_selection() {
            self.start.max(self.end)
        } else if self.end < self.text.len() {
            next_char_boundary(&self.text, self.end)
        } else {
            self.end
        };
        self.start = pos;
        self.end = pos;
    }
}

impl TextField for FieldBuffer {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        // Host-default caret repositioning on overwrite
        self.start = self.text.len();
        self.end = self.text.len();
    }

    fn set_selection(&mut self, start: usize, end: usize) {
        self.start = start.min(self.text.len());
        self.end = end.min(self.text.len());
    }
}

/// Byte offset of the previous character boundary before `pos`.
pub(crate) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset of the next character boundary after `pos`.
pub(crate) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
