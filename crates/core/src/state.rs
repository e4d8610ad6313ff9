//! Game state module - the engine that advances the game one tick at a time
//!
//! This module ties together the occupancy grid, RNG, and scoring rules.
//! It owns the snake, the food, the buffered heading, and the round
//! lifecycle. All mutation happens through [`GameState::advance_tick`] and
//! the lifecycle operations; input handling only ever touches the buffered
//! heading.

use arrayvec::ArrayVec;

use crate::board::Occupancy;
use crate::rng::SimpleRng;
use crate::scoring;
use crate::types::{
    Direction, Point, BASE_TICK_MS, FOOD_POINTS, GRID_CELLS, GRID_SIZE, START_DIRECTION,
    START_HEAD, START_LENGTH,
};

/// Round lifecycle: `Idle` before a start or after a reset, `Running` while
/// ticking, `Ended` once a round is over (a reset leads back to `Idle`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Ended,
}

/// How a finished round ended. Wall and self collisions are not
/// distinguished; filling the board is a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Lost,
    Won,
}

/// Result of one [`GameState::advance_tick`] call.
///
/// This is the engine's signal to its caller: redraw on everything except
/// `Ignored`, and schedule the next tick only after `Moved`/`Ate` (a round
/// that just ended has nothing left to schedule).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Not running; nothing happened.
    Ignored,
    /// The snake moved one cell without growing.
    Moved,
    /// The snake ate the food and grew by one cell.
    Ate,
    /// The round ended on this tick.
    GameOver,
}

impl Tick {
    /// Whether the tick changed anything worth repainting.
    pub fn needs_redraw(self) -> bool {
        !matches!(self, Tick::Ignored)
    }

    /// Whether the caller should arm the next tick.
    pub fn reschedule(self) -> bool {
        matches!(self, Tick::Moved | Tick::Ate)
    }
}

/// Complete game state.
///
/// The body is head-first and never empty; the occupancy grid mirrors it
/// cell for cell. No body cell is ever duplicated: the collision check runs
/// before any mutation persists.
#[derive(Debug, Clone)]
pub struct GameState {
    body: ArrayVec<Point, GRID_CELLS>,
    occupancy: Occupancy,
    food: Point,
    /// Heading applied on the current tick.
    direction: Direction,
    /// Heading buffered from input, applied at the start of the next tick.
    pending: Direction,
    score: u32,
    tick_interval_ms: u32,
    phase: Phase,
    outcome: Option<Outcome>,
    rng: SimpleRng,
}

impl GameState {
    /// Create a freshly initialized game with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        let mut state = Self {
            body: ArrayVec::new(),
            occupancy: Occupancy::new(),
            food: Point::new(0, 0),
            direction: START_DIRECTION,
            pending: START_DIRECTION,
            score: 0,
            tick_interval_ms: BASE_TICK_MS,
            phase: Phase::Idle,
            outcome: None,
            rng: SimpleRng::new(seed),
        };
        state.reset();
        state
    }

    /// Reinitialize: fixed three-cell start, base speed, zero score, fresh
    /// food, `Idle`. Always succeeds. The RNG stream carries over so each
    /// round sees a different food sequence.
    pub fn reset(&mut self) {
        self.body.clear();
        self.occupancy.clear();

        let (dx, dy) = START_DIRECTION.delta();
        for i in 0..START_LENGTH as i8 {
            let cell = START_HEAD.offset(-dx * i, -dy * i);
            self.body.push(cell);
            self.occupancy.occupy(cell);
        }

        self.direction = START_DIRECTION;
        self.pending = START_DIRECTION;
        self.score = 0;
        self.tick_interval_ms = BASE_TICK_MS;
        self.phase = Phase::Idle;
        self.outcome = None;
        self.place_food();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    /// Body cells, head first.
    pub fn body(&self) -> &[Point] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    /// Begin ticking. Only an idle game starts; a running game ignores the
    /// call and an ended round must be reset first.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Running;
        true
    }

    /// Buffer a heading change for the next tick.
    ///
    /// A request reversing the heading applied this tick is ignored, so
    /// rapid input cannot fold the snake onto its own neck. This never
    /// touches the body, food, or score.
    pub fn set_pending_direction(&mut self, requested: Direction) {
        if requested == self.direction.opposite() {
            return;
        }
        self.pending = requested;
    }

    /// Advance the game by one tick. No-op unless running.
    pub fn advance_tick(&mut self) -> Tick {
        if self.phase != Phase::Running {
            return Tick::Ignored;
        }

        self.direction = self.pending;
        let candidate = self.head().step(self.direction);

        // Collision checks run against the pre-move body. The tail is still
        // on the grid here: moving into the cell it is about to vacate ends
        // the round.
        if !candidate.in_bounds() || self.occupancy.is_occupied(candidate) {
            self.end_round(Outcome::Lost);
            return Tick::GameOver;
        }

        self.body.insert(0, candidate);
        self.occupancy.occupy(candidate);

        if candidate == self.food {
            self.score += FOOD_POINTS;
            if self.body.is_full() {
                // Nowhere left to put food: the board is beaten.
                self.end_round(Outcome::Won);
                return Tick::GameOver;
            }
            self.place_food();
            if scoring::speed_up_due(self.score) {
                self.tick_interval_ms = scoring::next_interval_ms(self.tick_interval_ms);
            }
            Tick::Ate
        } else {
            if let Some(tail) = self.body.pop() {
                self.occupancy.vacate(tail);
            }
            Tick::Moved
        }
    }

    fn end_round(&mut self, outcome: Outcome) {
        self.phase = Phase::Ended;
        self.outcome = Some(outcome);
    }

    /// Place food uniformly at random on a free cell.
    ///
    /// Rejection sampling over the whole board. The loop terminates with
    /// probability 1: a board-filling snake ends the round as a win before
    /// this is ever called, so a free cell always exists.
    fn place_food(&mut self) {
        loop {
            let candidate = Point::new(
                self.rng.next_range(GRID_SIZE as u32) as i8,
                self.rng.next_range(GRID_SIZE as u32) as i8,
            );
            if !self.occupancy.is_occupied(candidate) {
                self.food = candidate;
                return;
            }
        }
    }

    /// Fill `out` with a view of the current state (allocation free).
    pub fn snapshot_into(&self, out: &mut crate::snapshot::GameSnapshot) {
        out.body.clear();
        for &cell in self.body.iter() {
            out.body.push(cell);
        }
        out.food = self.food;
        out.direction = self.direction;
        out.score = self.score;
        out.tick_interval_ms = self.tick_interval_ms;
        out.phase = self.phase;
        out.outcome = self.outcome;
    }

    pub fn snapshot(&self) -> crate::snapshot::GameSnapshot {
        let mut s = crate::snapshot::GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
