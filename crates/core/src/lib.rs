//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management. It has
//! **zero dependencies** on UI, timers, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces the same food sequence
//! - **Testable**: Unit tests for every rule, no terminal required
//! - **Fast**: Zero-allocation tick path (bounded body storage)
//!
//! # Module Structure
//!
//! - [`board`]: flat occupancy grid for O(1) collision and food-rejection tests
//! - [`rng`]: seedable LCG for uniform food cell sampling
//! - [`scoring`]: score award and speed progression rules
//! - [`state`]: the game state machine (tick advance, lifecycle, food)
//! - [`snapshot`]: value snapshot handed to rendering collaborators
//!
//! # Game Rules
//!
//! - The snake advances one cell per tick in its applied heading; input is
//!   double-buffered and applied at the start of the next tick.
//! - A requested reversal of the applied heading is ignored.
//! - Leaving the board or biting any body cell ends the round. The self
//!   check runs against the pre-move body, tail included: moving into the
//!   cell the tail is about to vacate still ends the round.
//! - Eating food grows the snake by one, scores 10 points, and places new
//!   food uniformly on a free cell. Each 50 points shortens the tick
//!   interval by 5 ms down to a 60 ms floor.
//! - Filling the entire board wins the round.
//!
//! # Example
//!
//! ```
//! use tui_snake_core::GameState;
//!
//! let mut game = GameState::new(12345);
//! assert!(game.start());
//!
//! // The first tick moves the snake one cell to the right.
//! game.advance_tick();
//! assert_eq!(game.head().x, 11);
//! ```

pub mod board;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod state;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use board::Occupancy;
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
pub use state::{GameState, Outcome, Phase, Tick};
