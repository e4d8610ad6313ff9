//! Terminal rendering module.
//!
//! A small game-oriented rendering layer: the view paints a game snapshot
//! into a plain framebuffer of styled characters, and the terminal backend
//! flushes framebuffers to the real terminal with row diffing. Keeping the
//! view pure (no I/O) makes the whole board presentation unit-testable.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Glyph, Rgb, Style, Surface};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
