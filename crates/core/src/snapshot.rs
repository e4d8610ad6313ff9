//! Value snapshot of the game state for rendering collaborators.
//!
//! The renderer and HUD consume this instead of borrowing the live state.
//! [`crate::GameState::snapshot_into`] refills an existing snapshot without
//! allocating; callers keep one buffer and pass it in every frame.

use arrayvec::ArrayVec;

use crate::state::{Outcome, Phase};
use crate::types::{Direction, Point, BASE_TICK_MS, START_DIRECTION, GRID_CELLS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Body cells, head first.
    pub body: ArrayVec<Point, GRID_CELLS>,
    pub food: Point,
    pub direction: Direction,
    pub score: u32,
    pub tick_interval_ms: u32,
    pub phase: Phase,
    pub outcome: Option<Outcome>,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Point> {
        self.body.first().copied()
    }

    pub fn clear(&mut self) {
        self.body.clear();
        self.food = Point::new(0, 0);
        self.direction = START_DIRECTION;
        self.score = 0;
        self.tick_interval_ms = BASE_TICK_MS;
        self.phase = Phase::Idle;
        self.outcome = None;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            body: ArrayVec::new(),
            food: Point::new(0, 0),
            direction: START_DIRECTION,
            score: 0,
            tick_interval_ms: BASE_TICK_MS,
            phase: Phase::Idle,
            outcome: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_idle_and_empty() {
        let snap = GameSnapshot::default();
        assert_eq!(snap.phase, Phase::Idle);
        assert_eq!(snap.head(), None);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.tick_interval_ms, BASE_TICK_MS);
    }

    #[test]
    fn test_clear_matches_default() {
        let mut snap = GameSnapshot::default();
        snap.body.push(Point::new(3, 3));
        snap.score = 70;
        snap.phase = Phase::Ended;
        snap.outcome = Some(Outcome::Lost);

        snap.clear();
        assert_eq!(snap, GameSnapshot::default());
    }
}
