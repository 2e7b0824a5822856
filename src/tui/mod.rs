//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the form,
//! and translates keyboard events into the core key model.
//!
//! This is the only module that knows about ratatui and crossterm. The
//! core formatter binds to plain `FieldBuffer`s and could be driven by
//! any other host the same way.
//!
//! ## Redraw Strategy
//!
//! The event loop only redraws after an event arrives; idle it sleeps
//! up to 500ms per poll. There is no animation, so nothing forces
//! frames.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor
//! because ratatui's `set_cursor_position` resets the terminal's blink
//! timer on every `draw()` call.

mod component;
mod components;
mod event;

use log::{debug, info};
use std::io::stdout;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::config::ResolvedConfig;
use crate::core::field::FieldBuffer;
use crate::core::formatter::FieldFormatter;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{FieldEvent, MoneyInput, StatusBar};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI presentation state: the form's fields and which one has focus.
pub struct TuiState {
    pub fields: Vec<MoneyInput>,
    pub focused: usize,
}

impl TuiState {
    /// Build one field per configured entry, all sharing the resolved
    /// format, with initial values projected in. The first field gets
    /// focus.
    pub fn new(config: &ResolvedConfig) -> Self {
        let buffers = config.fields.iter().map(|_| FieldBuffer::new());
        let formatters = FieldFormatter::attach_all(buffers, &config.options);

        let mut fields: Vec<MoneyInput> = config
            .fields
            .iter()
            .zip(formatters)
            .map(|(entry, formatter)| {
                let mut input = MoneyInput::from_formatter(entry.label.clone(), formatter);
                if let Some(initial) = entry.initial {
                    input.set_value(initial);
                }
                input
            })
            .collect();

        if let Some(first) = fields.first_mut() {
            first.focus();
        }

        Self { fields, focused: 0 }
    }

    /// Move focus to the next field, blurring the current one.
    pub fn focus_next(&mut self) {
        self.cycle_focus(1);
    }

    /// Move focus to the previous field.
    pub fn focus_prev(&mut self) {
        self.cycle_focus(self.fields.len().saturating_sub(1));
    }

    fn cycle_focus(&mut self, step: usize) {
        if self.fields.len() < 2 {
            return;
        }
        self.fields[self.focused].blur();
        self.focused = (self.focused + step) % self.fields.len();
        self.fields[self.focused].focus();
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // The keyboard enhancement flags let crossterm report keypad
        // state; terminals without kitty protocol support ignore them
        execute!(
            stdout(),
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, Hide);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut tui = TuiState::new(&config);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| draw_ui(f, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(500));

        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}
                TuiEvent::Quit => should_quit = true,
                TuiEvent::FocusNext => tui.focus_next(),
                TuiEvent::FocusPrev => tui.focus_prev(),
                ref key_event @ TuiEvent::Key(_) => {
                    if let Some(field) = tui.fields.get_mut(tui.focused)
                        && let Some(FieldEvent::Changed) = field.handle_event(key_event)
                    {
                        debug!("field {:?} -> {:?}", field.label, field.text());
                    }
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Form layout: stacked three-line fields, status bar at the bottom.
fn draw_ui(frame: &mut Frame, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let mut constraints: Vec<Constraint> = tui.fields.iter().map(|_| Length(3)).collect();
    constraints.push(Length(1));
    constraints.push(Min(0));

    let areas = Layout::vertical(constraints).split(frame.area());

    for (field, area) in tui.fields.iter_mut().zip(areas.iter()) {
        field.render(frame, *area);
    }

    if let Some(focused) = tui.fields.get(tui.focused) {
        let mut status = StatusBar::new(focused.label.clone(), focused.value());
        status.render(frame, areas[tui.fields.len()]);
    }
}
