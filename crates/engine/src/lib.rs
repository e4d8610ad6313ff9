//! Engine module - tick scheduling and the session driver
//!
//! The core owns no timer. This crate provides the two pieces that sit
//! between the host event loop and the game rules:
//!
//! - [`scheduler`]: an explicit re-arming deadline ("run the next tick after
//!   N milliseconds") with request/cancel semantics
//! - [`session`]: a single-threaded driver that owns the game state and its
//!   scheduler, translates control commands, and turns due deadlines into
//!   engine ticks
//!
//! Ticks are atomic: cancellation only ever drops the *pending* deadline,
//! never an in-flight tick. Because the next tick is armed after the current
//! one completes, interval changes take effect from the following tick.

pub mod scheduler;
pub mod session;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use scheduler::TickScheduler;
pub use session::Session;
