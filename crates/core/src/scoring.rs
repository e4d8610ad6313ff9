//! Scoring module - score award and speed progression
//!
//! Score increases by a fixed amount per food. The tick interval shortens by
//! a fixed step each time the score reaches a further multiple of
//! `SPEED_UP_POINTS`, and never drops below `MIN_TICK_MS`. Because the score
//! only changes on the food path, the threshold test never observes score 0.

use crate::types::{MIN_TICK_MS, SPEED_UP_POINTS, TICK_STEP_MS};

/// Whether `score` has just crossed a speed-up threshold (a positive
/// multiple of [`SPEED_UP_POINTS`]).
pub fn speed_up_due(score: u32) -> bool {
    score > 0 && score % SPEED_UP_POINTS == 0
}

/// The tick interval after one speed-up step, floored at [`MIN_TICK_MS`].
/// At or below the floor the interval is unchanged.
pub fn next_interval_ms(current: u32) -> u32 {
    if current <= MIN_TICK_MS {
        return current;
    }
    (current - TICK_STEP_MS).max(MIN_TICK_MS)
}
