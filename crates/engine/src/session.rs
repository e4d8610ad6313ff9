//! Session driver: owns the game state and its tick scheduler.
//!
//! The host event loop feeds it two things: control commands (whenever input
//! arrives) and polls (whenever its wait runs out). Everything else - tick
//! execution, re-arming at the current interval, cancel-on-reset - happens
//! in here, so the host never touches the engine directly.

use std::time::{Duration, Instant};

use crate::core::{GameState, Tick};
use crate::scheduler::TickScheduler;
use crate::types::Command;

#[derive(Debug, Clone)]
pub struct Session {
    game: GameState,
    scheduler: TickScheduler,
}

impl Session {
    pub fn new(seed: u32) -> Self {
        Self {
            game: GameState::new(seed),
            scheduler: TickScheduler::new(),
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// How long the host may wait for input before the next tick is due.
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.scheduler.timeout(now)
    }

    /// Apply a control command. Returns true when the screen should be
    /// repainted (a buffered turn alone changes nothing visible).
    pub fn command(&mut self, now: Instant, cmd: Command) -> bool {
        match cmd {
            Command::Turn(direction) => {
                self.game.set_pending_direction(direction);
                false
            }
            Command::Start => {
                if !self.game.start() {
                    return false;
                }
                // Starting triggers the first tick immediately; that tick
                // arms the next one.
                self.step(now);
                true
            }
            Command::Reset => {
                self.scheduler.cancel();
                self.game.reset();
                true
            }
        }
    }

    /// Run a tick if its deadline has passed. Returns true when the screen
    /// should be repainted.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.scheduler.fire(now) {
            return false;
        }
        self.step(now).needs_redraw()
    }

    fn step(&mut self, now: Instant) -> Tick {
        let tick = self.game.advance_tick();
        if tick.reschedule() {
            // Re-armed with the interval the tick just produced, so a
            // speed-up lands on the following tick.
            self.scheduler.request(now, self.game.tick_interval_ms());
        }
        tick
    }
}
