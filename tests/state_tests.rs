//! Whole-round property tests for the game state machine.

use std::collections::HashSet;

use tui_snake::core::{GameState, Tick};
use tui_snake::types::{Direction, FOOD_POINTS, MIN_TICK_MS, SPEED_UP_POINTS};

/// Any safe heading, preferring to keep going straight. Returns the current
/// heading when boxed in (the next tick then ends the round).
fn survive(game: &GameState) -> Direction {
    let head = game.head();
    [
        game.direction(),
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ]
    .into_iter()
    .filter(|&dir| dir != game.direction().opposite())
    .find(|&dir| {
        let next = head.step(dir);
        next.in_bounds() && !game.body().contains(&next)
    })
    .unwrap_or(game.direction())
}

fn assert_body_is_coherent(game: &GameState) {
    // Unique cells, all on the board.
    let mut seen = HashSet::new();
    for &cell in game.body() {
        assert!(cell.in_bounds(), "body cell off the board: {cell:?}");
        assert!(seen.insert(cell), "duplicate body cell: {cell:?}");
    }

    // Consecutive cells are neighbors.
    for pair in game.body().windows(2) {
        let dx = (pair[0].x - pair[1].x).abs();
        let dy = (pair[0].y - pair[1].y).abs();
        assert_eq!(dx + dy, 1, "body break between {:?} and {:?}", pair[0], pair[1]);
    }
}

#[test]
fn test_invariants_hold_across_random_rounds() {
    for seed in 1..=10 {
        let mut game = GameState::new(seed);
        assert!(game.start());

        for _ in 0..2000 {
            if !game.running() {
                break;
            }
            game.set_pending_direction(survive(&game));

            let len_before = game.len();
            let score_before = game.score();
            let interval_before = game.tick_interval_ms();

            match game.advance_tick() {
                Tick::Moved => {
                    assert_eq!(game.len(), len_before);
                    assert_eq!(game.score(), score_before);
                }
                Tick::Ate => {
                    assert_eq!(game.len(), len_before + 1);
                    assert_eq!(game.score(), score_before + FOOD_POINTS);
                }
                Tick::GameOver => {
                    assert!(!game.running());
                    continue;
                }
                Tick::Ignored => panic!("a running game never ignores a tick"),
            }

            // Interval only ever decreases, never below the floor, and only
            // on a tick that crossed a score threshold.
            assert!(game.tick_interval_ms() <= interval_before);
            assert!(game.tick_interval_ms() >= MIN_TICK_MS);
            if game.tick_interval_ms() < interval_before {
                assert_eq!(game.score() % SPEED_UP_POINTS, 0);
                assert_eq!(game.score(), score_before + FOOD_POINTS);
            }

            assert_body_is_coherent(&game);
            assert!(!game.body().contains(&game.food()));
            assert!(game.food().in_bounds());
        }
    }
}

#[test]
fn test_round_after_round_stays_consistent() {
    let mut game = GameState::new(3);

    for _ in 0..5 {
        game.start();
        let mut guard = 0;
        while game.running() {
            // No steering: the snake rides its heading into a wall.
            game.advance_tick();
            guard += 1;
            assert!(guard < 100, "unsteered round should end quickly");
        }

        game.reset();
        assert_eq!(game.score(), 0);
        assert_eq!(game.len(), 3);
        assert_body_is_coherent(&game);
        assert!(!game.body().contains(&game.food()));
    }
}
