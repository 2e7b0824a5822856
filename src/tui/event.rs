use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyEventState, KeyModifiers,
};

use crate::core::keys::{Key, KeyPress};

/// TUI-specific input events
pub enum TuiEvent {
    Quit,
    /// Tab — move focus to the next field (blurring the current one)
    FocusNext,
    /// Shift+Tab — move focus to the previous field
    FocusPrev,
    /// A key press for the focused field, already translated into the
    /// core key model
    Key(KeyPress),
    Resize,
}

/// Poll for an event with the given timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => {
                if key_event.kind == KeyEventKind::Release {
                    return None;
                }
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                let shift = key_event.modifiers.contains(KeyModifiers::SHIFT);
                match (key_event.modifiers, key_event.code) {
                    // Ctrl+C always quits
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
                    // Platform select-all combination
                    (KeyModifiers::CONTROL, KeyCode::Char('a'))
                    | (KeyModifiers::SUPER, KeyCode::Char('a')) => {
                        Some(TuiEvent::Key(KeyPress::new(Key::SelectAll)))
                    }
                    (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                    (_, KeyCode::Tab) => Some(TuiEvent::FocusNext),
                    (_, KeyCode::BackTab) => Some(TuiEvent::FocusPrev),
                    (_, KeyCode::Char(c)) if c.is_ascii_digit() => {
                        // Keypad state is only reported under the kitty
                        // keyboard protocol; plain terminals send top-row
                        let key = if key_event.state.contains(KeyEventState::KEYPAD) {
                            Key::KeypadDigit(c)
                        } else {
                            Key::Digit(c)
                        };
                        Some(TuiEvent::Key(KeyPress { key, shift }))
                    }
                    (_, KeyCode::Char('-')) => Some(TuiEvent::Key(KeyPress { key: Key::Minus, shift })),
                    (_, KeyCode::Char(c)) => Some(TuiEvent::Key(KeyPress { key: Key::Char(c), shift })),
                    (_, KeyCode::Backspace) => Some(TuiEvent::Key(KeyPress { key: Key::Backspace, shift })),
                    (_, KeyCode::Delete) => Some(TuiEvent::Key(KeyPress { key: Key::Delete, shift })),
                    (_, KeyCode::Enter) => Some(TuiEvent::Key(KeyPress { key: Key::Enter, shift })),
                    (_, KeyCode::Left) => Some(TuiEvent::Key(KeyPress { key: Key::Left, shift })),
                    (_, KeyCode::Right) => Some(TuiEvent::Key(KeyPress { key: Key::Right, shift })),
                    (_, KeyCode::Up) => Some(TuiEvent::Key(KeyPress { key: Key::Up, shift })),
                    (_, KeyCode::Down) => Some(TuiEvent::Key(KeyPress { key: Key::Down, shift })),
                    _ => None,
                }
            }
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}
