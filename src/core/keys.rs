//! Host-agnostic key model for keystroke filtering.
//!
//! The formatter filters keystrokes before they reach the field, so it
//! needs to see key presses — but it must not depend on any particular
//! toolkit's event types. Adapters (the TUI layer, tests) translate
//! their native events into [`KeyPress`] values.

/// A key the formatter cares about, already classified by the host
/// adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Top-row digit '0'..='9'.
    Digit(char),
    /// Numeric-keypad digit '0'..='9'.
    KeypadDigit(char),
    /// Minus / hyphen.
    Minus,
    Backspace,
    Delete,
    Tab,
    Escape,
    Enter,
    Left,
    Right,
    Up,
    Down,
    /// The platform select-all combination (Ctrl+A / Cmd+A), mapped by
    /// the adapter.
    SelectAll,
    /// Any other printable character.
    Char(char),
}

/// A key press with the modifier state the filter needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        Self { key, shift: false }
    }

    pub fn shifted(key: Key) -> Self {
        Self { key, shift: true }
    }
}
