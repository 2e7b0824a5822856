//! # StatusBar Component
//!
//! Single-line bar under the form showing the focused field's numeric
//! value and the key hints. Purely presentational: all data arrives as
//! props.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

/// Bottom status bar: focused field label, its numeric value, hints.
pub struct StatusBar {
    /// Label of the focused field
    pub label: String,
    /// Numeric value of the focused field (NaN when empty/unparseable)
    pub value: f64,
}

impl StatusBar {
    pub fn new(label: String, value: f64) -> Self {
        Self { label, value }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // NaN means "no value yet", not an error
        let value_text = if self.value.is_nan() {
            format!("{}: —", self.label)
        } else {
            format!("{}: {}", self.label, self.value)
        };
        let text = format!("{value_text}  |  Tab next · Shift+Tab prev · Esc quit");

        frame.render_widget(
            Span::styled(text, Style::default().add_modifier(Modifier::DIM)),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(mut bar: StatusBar) -> String {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_status_bar_shows_value() {
        let text = rendered(StatusBar::new("Amount".to_string(), 1234.56));
        assert!(text.contains("Amount: 1234.56"));
        assert!(text.contains("Tab next"));
    }

    #[test]
    fn test_status_bar_nan_shows_dash() {
        let text = rendered(StatusBar::new("Amount".to_string(), f64::NAN));
        assert!(text.contains("Amount: —"));
    }
}
