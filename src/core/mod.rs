//! # Core Formatting Logic
//!
//! Everything a monetary field needs that is independent of any UI
//! technology. This module knows nothing about ratatui or crossterm;
//! adapters translate their native events into the types defined here.
//!
//! ```text
//!                ┌───────────────────────────────┐
//!                │            CORE               │
//!                │  (this module)                │
//!                │                               │
//!                │  • FormatOptions (config)     │
//!                │  • TextField (field seam)     │
//!                │  • FieldFormatter (behavior)  │
//!                │                               │
//!                │  No I/O. No UI. Pure.         │
//!                └──────────────┬────────────────┘
//!                               │
//!                    ┌──────────┴──────────┐
//!                    ▼                     ▼
//!             ┌────────────┐        ┌────────────┐
//!             │    TUI     │        │   tests    │
//!             │  Adapter   │        │ (in-memory │
//!             │ (ratatui)  │        │   fields)  │
//!             └────────────┘        └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`options`]: `FormatOptions` — the display format configuration
//! - [`format`]: kernel extraction and the fixed-point formatter
//! - [`keys`]: host-agnostic key model for keystroke filtering
//! - [`field`]: the `TextField` seam and the in-memory `FieldBuffer`
//! - [`formatter`]: `FieldFormatter` — the edit-lifecycle behavior
//! - [`config`]: TOML configuration and override resolution

pub mod config;
pub mod field;
pub mod format;
pub mod formatter;
pub mod keys;
pub mod options;

// Re-export the types most callers need
pub use field::{FieldBuffer, TextField};
pub use formatter::FieldFormatter;
pub use keys::{Key, KeyPress};
pub use options::FormatOptions;
