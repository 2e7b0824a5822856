//! Moneta library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod tui;

pub use crate::core::{FieldBuffer, FieldFormatter, FormatOptions, Key, KeyPress, TextField};

/// Built-in format presets selectable from the CLI. Each maps to a
/// [`FormatOptions`] base that the config hierarchy then overrides.
#[derive(Clone, Debug, Default, ValueEnum)]
pub enum Preset {
    /// "€ 1.234,56"
    #[default]
    Euro,
    /// "$ 1,234.56"
    Dollar,
    /// "1.234,56" — no prefix
    Plain,
}

impl Preset {
    pub fn options(&self) -> FormatOptions {
        match self {
            Preset::Euro => FormatOptions::default(),
            Preset::Dollar => FormatOptions {
                decimal: '.',
                thousands: ',',
                prefix: "$ ".to_string(),
                ..FormatOptions::default()
            },
            Preset::Plain => FormatOptions {
                prefix: String::new(),
                ..FormatOptions::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_dollar_swaps_separators() {
        let opts = Preset::Dollar.options();
        assert_eq!(opts.decimal, '.');
        assert_eq!(opts.thousands, ',');
        assert_eq!(opts.prefix, "$ ");
    }

    #[test]
    fn preset_plain_has_no_prefix() {
        assert!(Preset::Plain.options().prefix.is_empty());
    }
}
