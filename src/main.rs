//! Terminal snake runner.
//!
//! Event loop: repaint when dirty, wait for input no longer than the next
//! tick deadline, then let the session run any due tick. The session owns
//! the game and its scheduler; this binary owns the terminal.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::GameSnapshot;
use tui_snake::engine::Session;
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::term::{GameView, TerminalRenderer, Viewport};

/// Poll cadence while no tick is scheduled (idle or game over).
const IDLE_POLL_MS: u64 = 250;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = Session::new(clock_seed());
    let view = GameView::default();
    let mut snapshot = GameSnapshot::default();
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            session.game().snapshot_into(&mut snapshot);
            term.draw(view.render(&snapshot, Viewport::new(w, h)))?;
            dirty = false;
        }

        let timeout = session
            .timeout(Instant::now())
            .unwrap_or(Duration::from_millis(IDLE_POLL_MS));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(cmd) = handle_key_event(key) {
                        if session.command(Instant::now(), cmd) {
                            dirty = true;
                        }
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        if session.poll(Instant::now()) {
            dirty = true;
        }
    }
}

/// Wall-clock seed so each run sees a different food sequence.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
