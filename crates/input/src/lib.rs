//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`] values. There
//! is no key-repeat machinery here: a held arrow only ever re-buffers the
//! same turn, and the engine applies one buffered turn per tick.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
