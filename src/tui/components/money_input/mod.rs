//! # MoneyInput Component
//!
//! A single-line monetary field: a [`FieldFormatter`] bound to an
//! in-memory [`FieldBuffer`], rendered as a bordered one-line input.
//!
//! ## Responsibilities
//!
//! - Run every key press through the formatter's keystroke filter
//! - Apply admitted edits to the buffer (insert, backspace, delete,
//!   caret movement, select-all)
//! - Reformat after every content change
//! - Drive focus/blur semantics when the parent moves focus
//! - Render the field with caret and selection highlight
//!
//! ## State Management
//!
//! The buffer and its selection live inside the formatter's field. The
//! label and focus flag are props from the parent form.

mod caret;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::field::{FieldBuffer, TextField};
use crate::core::formatter::FieldFormatter;
use crate::core::keys::Key;
use crate::core::options::FormatOptions;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use caret::{display_col, ordered};

/// High-level events emitted by the MoneyInput
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    /// Field content changed and was reformatted
    Changed,
}

/// One monetary input field in the form.
///
/// # Props
///
/// - `label`: Field caption shown in the border title
/// - `focused`: Whether this field currently receives key presses
///
/// # State
///
/// - `formatter`: The bound formatter owning the text buffer
pub struct MoneyInput {
    pub label: String,
    pub focused: bool,
    formatter: FieldFormatter<FieldBuffer>,
}

impl MoneyInput {
    /// Create an empty field with the given options.
    pub fn new(label: impl Into<String>, options: FormatOptions) -> Self {
        Self::from_formatter(label, FieldFormatter::new(FieldBuffer::new(), options))
    }

    /// Wrap an already-attached formatter (the `attach_all` path).
    pub fn from_formatter(
        label: impl Into<String>,
        formatter: FieldFormatter<FieldBuffer>,
    ) -> Self {
        Self {
            label: label.into(),
            focused: false,
            formatter,
        }
    }

    pub fn text(&self) -> &str {
        self.formatter.field().text()
    }

    /// Current numeric value; NaN when the field is empty.
    pub fn value(&self) -> f64 {
        self.formatter.value()
    }

    pub fn set_value<V: std::fmt::Display>(&mut self, value: V) {
        self.formatter.set_value(value);
    }

    /// Give this field focus, applying the configured caret placement.
    pub fn focus(&mut self) {
        self.focused = true;
        self.formatter.handle_focus();
    }

    /// Take focus away, reformatting the current content.
    pub fn blur(&mut self) {
        self.focused = false;
        self.formatter.handle_blur();
    }

    /// The field line as styled spans, with the selection reversed.
    fn styled_line(&self) -> Line<'_> {
        let text = self.formatter.field().text();
        let (start, end) = self.formatter.field().selection();
        let (lo, hi) = ordered(start, end);

        if !self.focused || lo == hi {
            return Line::from(Span::raw(text));
        }

        Line::from(vec![
            Span::raw(&text[..lo]),
            Span::styled(&text[lo..hi], Style::default().add_modifier(Modifier::REVERSED)),
            Span::raw(&text[hi..]),
        ])
    }
}

impl Component for MoneyInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(border_style)
            .title(self.label.as_str());

        let input = Paragraph::new(self.styled_line()).block(block);
        frame.render_widget(input, area);

        if self.focused {
            let field = self.formatter.field();
            let col = display_col(field.text(), field.caret());
            frame.set_cursor_position((area.x + 1 + col, area.y + 1));
        }
    }
}

impl EventHandler for MoneyInput {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let TuiEvent::Key(press) = event else {
            return None;
        };

        if !self.formatter.handle_key(press) {
            log::debug!("suppressed key: {:?}", press.key);
            return None;
        }

        let field = self.formatter.field_mut();
        match press.key {
            Key::Digit(c) | Key::KeypadDigit(c) => {
                field.insert_char(c);
                self.formatter.handle_input();
                Some(FieldEvent::Changed)
            }
            Key::Minus => {
                field.insert_char('-');
                self.formatter.handle_input();
                Some(FieldEvent::Changed)
            }
            Key::Backspace => {
                field.delete_backward();
                self.formatter.handle_input();
                Some(FieldEvent::Changed)
            }
            Key::Delete => {
                field.delete_forward();
                self.formatter.handle_input();
                Some(FieldEvent::Changed)
            }
            Key::Left => {
                field.move_left();
                None
            }
            Key::Right => {
                field.move_right();
                None
            }
            Key::SelectAll => {
                let len = field.text().len();
                field.set_selection(0, len);
                None
            }
            // Admitted but meaningless in a single-line field
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::keys::KeyPress;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn key(k: Key) -> TuiEvent {
        TuiEvent::Key(KeyPress::new(k))
    }

    fn type_digits(input: &mut MoneyInput, digits: &str) {
        for c in digits.chars() {
            input.handle_event(&key(Key::Digit(c)));
        }
    }

    #[test]
    fn test_typing_formats_as_you_go() {
        let mut input = MoneyInput::new("Amount", FormatOptions::default());
        type_digits(&mut input, "1");
        assert_eq!(input.text(), "€ 0,01");
        type_digits(&mut input, "23456");
        assert_eq!(input.text(), "€ 1.234,56");
    }

    #[test]
    fn test_minus_key_prepends_sign() {
        let mut input = MoneyInput::new("Amount", FormatOptions::default());
        type_digits(&mut input, "1234");
        let res = input.handle_event(&key(Key::Minus));
        assert_eq!(res, Some(FieldEvent::Changed));
        assert_eq!(input.text(), "€ -12,34");
    }

    #[test]
    fn test_second_minus_is_suppressed() {
        let mut input = MoneyInput::new("Amount", FormatOptions::default());
        input.handle_event(&key(Key::Minus));
        type_digits(&mut input, "12");
        assert_eq!(input.handle_event(&key(Key::Minus)), None);
        assert_eq!(input.text(), "€ -0,12");
    }

    #[test]
    fn test_letters_are_suppressed() {
        let mut input = MoneyInput::new("Amount", FormatOptions::default());
        assert_eq!(input.handle_event(&key(Key::Char('x'))), None);
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_shifted_digit_is_suppressed() {
        let mut input = MoneyInput::new("Amount", FormatOptions::default());
        let res = input.handle_event(&TuiEvent::Key(KeyPress::shifted(Key::Digit('5'))));
        assert_eq!(res, None);
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_backspace_reformats() {
        let mut input = MoneyInput::new("Amount", FormatOptions::default());
        type_digits(&mut input, "123456");
        assert_eq!(input.text(), "€ 1.234,56");
        input.handle_event(&key(Key::Backspace));
        assert_eq!(input.text(), "€ 123,45");
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let mut input = MoneyInput::new("Amount", FormatOptions::default());
        assert_eq!(input.handle_event(&key(Key::Backspace)), Some(FieldEvent::Changed));
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_select_all_then_digit_replaces_content() {
        let mut input = MoneyInput::new("Amount", FormatOptions::default());
        type_digits(&mut input, "123456");
        input.handle_event(&key(Key::SelectAll));
        type_digits(&mut input, "9");
        assert_eq!(input.text(), "€ 0,09");
    }

    #[test]
    fn test_focus_blur_cycle() {
        let mut input = MoneyInput::new("Amount", FormatOptions::default());
        input.set_value(1234.56);
        input.focus();
        assert!(input.focused);
        input.blur();
        assert!(!input.focused);
        assert_eq!(input.text(), "€ 1.234,56");
    }

    #[test]
    fn test_value_round_trip() {
        let mut input = MoneyInput::new("Amount", FormatOptions::default());
        type_digits(&mut input, "123456");
        let v = input.value();
        assert_eq!(v, 1234.56);
        input.set_value(v);
        assert_eq!(input.text(), "€ 1.234,56");
    }

    #[test]
    fn test_render_shows_label_and_text() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut input = MoneyInput::new("Amount", FormatOptions::default());
        input.set_value(1234.56);
        input.focus();

        terminal
            .draw(|f| {
                input.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        assert!(text.contains("Amount"));
        assert!(text.contains("€ 1.234,56"));
    }
}
