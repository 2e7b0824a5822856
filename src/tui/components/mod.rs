//! # TUI Components
//!
//! UI components for the terminal form.
//!
//! ## Component Architecture
//!
//! Two patterns, as elsewhere in the adapter:
//!
//! - **Stateless (props-based)**: `StatusBar` receives all data as
//!   props and just renders it.
//! - **Stateful (event-driven)**: `MoneyInput` owns its formatter and
//!   buffer, handles key events, and emits `FieldEvent`s to the parent
//!   loop.
//!
//! Each component file co-locates its state types, event types,
//! rendering, event handling, and tests.

pub mod money_input;
pub mod status_bar;

pub use money_input::{FieldEvent, MoneyInput};
pub use status_bar::StatusBar;
