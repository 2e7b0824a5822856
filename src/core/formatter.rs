//! # FieldFormatter
//!
//! Binds to one editable text field and enforces the monetary display
//! format across the field's edit lifecycle:
//!
//! - keystroke filtering ([`handle_key`](FieldFormatter::handle_key))
//! - reformat on input ([`handle_input`](FieldFormatter::handle_input))
//! - reformat on blur ([`handle_blur`](FieldFormatter::handle_blur))
//! - caret placement on focus ([`handle_focus`](FieldFormatter::handle_focus))
//! - programmatic get/set of the numeric value
//!
//! Each handler is stateless across invocations: it reads the field's
//! current text and the fixed [`FormatOptions`], nothing else. The
//! formatter owns the field exclusively for the duration of the
//! binding; [`detach`](FieldFormatter::detach) ends it and returns the
//! field.

use log::debug;

use crate::core::field::TextField;
use crate::core::format::{extract_kernel, format_kernel, kernel_value};
use crate::core::keys::{Key, KeyPress};
use crate::core::options::FormatOptions;

/// Formats one bound text field as a monetary value.
pub struct FieldFormatter<F: TextField> {
    field: F,
    options: FormatOptions,
}

impl<F: TextField> FieldFormatter<F> {
    /// Bind the formatter to a field with the given options.
    pub fn new(field: F, options: FormatOptions) -> Self {
        Self { field, options }
    }

    /// Construct one formatter per field handle, in order. The batch
    /// counterpart of [`new`](Self::new) for building a whole form.
    pub fn attach_all<I>(fields: I, options: &FormatOptions) -> Vec<Self>
    where
        I: IntoIterator<Item = F>,
    {
        fields
            .into_iter()
            .map(|field| Self::new(field, options.clone()))
            .collect()
    }

    /// End the binding and return the field.
    pub fn detach(self) -> F {
        self.field
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    /// Mutable access to the bound field, for hosts that apply edits
    /// directly (the TUI widget inserts admitted characters itself
    /// before calling [`handle_input`](Self::handle_input)).
    pub fn field_mut(&mut self) -> &mut F {
        &mut self.field
    }

    /// Reformat the field after an edit.
    ///
    /// Derives the sign from whether any minus character is present,
    /// strips all minuses, extracts the kernel, reattaches a single
    /// leading minus, and overwrites the field text with the formatted
    /// result. Overwriting moves the caret per the field's default
    /// behavior.
    pub fn handle_input(&mut self) {
        let text = self.field.text();
        let wants_negative = self.options.allow_negative && text.contains('-');
        let stripped: String = text.chars().filter(|c| *c != '-').collect();
        let kernel = extract_kernel(&stripped, self.options.decimal);

        let signed = if wants_negative {
            format!("-{kernel}")
        } else {
            kernel
        };
        let formatted = format_kernel(&signed, &self.options);
        debug!("reformat: {:?} -> {:?}", text, formatted);
        self.field.set_text(&formatted);
    }

    /// Filter a keystroke before it reaches the field. Returns true if
    /// the key is admitted.
    ///
    /// Editing and navigation keys are always admitted. Minus is
    /// admitted only when negatives are allowed and no minus is already
    /// present. Digits (top row and keypad) are admitted without shift.
    /// Everything else is suppressed.
    pub fn handle_key(&self, press: &KeyPress) -> bool {
        match press.key {
            Key::Backspace
            | Key::Delete
            | Key::Tab
            | Key::Escape
            | Key::Enter
            | Key::Left
            | Key::Right
            | Key::Up
            | Key::Down
            | Key::SelectAll => true,
            Key::Minus => self.options.allow_negative && !self.field.text().contains('-'),
            Key::Digit(_) | Key::KeypadDigit(_) => !press.shift,
            Key::Char(_) => false,
        }
    }

    /// Place the caret on focus: select everything when
    /// `select_on_focus`, otherwise collapse to the end of the text.
    /// Empty text collapses to position 0 either way.
    pub fn handle_focus(&mut self) {
        let len = self.field.text().len();
        if self.options.select_on_focus {
            self.field.set_selection(0, len);
        } else {
            self.field.set_selection(len, len);
        }
    }

    /// Reformat on blur. Same derivation as
    /// [`handle_input`](Self::handle_input): the original's
    /// blur-context flag never altered formatting and is not carried.
    pub fn handle_blur(&mut self) {
        self.handle_input();
    }

    /// Current numeric value of the field.
    ///
    /// Empty or unparseable text yields NaN; callers check for it
    /// themselves.
    pub fn value(&self) -> f64 {
        let text = self.field.text();
        let negative = self.options.allow_negative && text.contains('-');
        let stripped: String = text.chars().filter(|c| *c != '-').collect();
        let kernel = extract_kernel(&stripped, self.options.decimal);
        kernel_value(&kernel, negative, self.options.decimal)
    }

    /// Set the field from a number or string: stringify, detect a
    /// leading minus, strip all minuses, re-prepend one when negative
    /// and allowed, then format.
    pub fn set_value<V: std::fmt::Display>(&mut self, value: V) {
        let raw = value.to_string();
        let negative = raw.starts_with('-');
        let stripped: String = raw.chars().filter(|c| *c != '-').collect();

        let signed = if negative && self.options.allow_negative {
            format!("-{stripped}")
        } else {
            stripped
        };
        let formatted = format_kernel(&signed, &self.options);
        self.field.set_text(&formatted);
    }
}
