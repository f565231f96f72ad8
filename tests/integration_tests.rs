//! Integration tests for a full play session

use tui_dino::core::{PlayerState, PressOutcome, Session, Sprite, TickOutcome};
use tui_dino::types::{Key, Position, GROUND_Y};

use pretty_assertions::assert_eq;

/// Tick until the game ends, returning the tick it ended on.
fn run_until_game_over(session: &mut Session) -> u32 {
    for _ in 0..10_000 {
        if session.tick() == TickOutcome::GameOver {
            return session.ticks();
        }
    }
    panic!("game never ended");
}

#[test]
fn test_no_jump_stays_on_ground() {
    let mut session = Session::new();
    for _ in 0..71 {
        assert_eq!(session.tick(), TickOutcome::Running);
        assert_eq!(session.player().position().y, GROUND_Y);
        assert_eq!(session.player().state(), PlayerState::Running);
    }
}

#[test]
fn test_jump_arc_spans_twenty_ticks() {
    let mut session = Session::new();
    assert_eq!(session.press(Key::Space), PressOutcome::Latched);

    let mut heights = Vec::new();
    for _ in 0..20 {
        session.tick();
        assert_eq!(session.player().state(), PlayerState::Jumping);
        assert_eq!(session.player().sprite(), Sprite::Jump);
        heights.push(session.player().position().y);
    }
    let expected: Vec<i16> = (0..10).rev().chain(1..=10).collect();
    assert_eq!(heights, expected);

    // Lands on the 21st tick.
    session.tick();
    assert_eq!(session.player().state(), PlayerState::Running);
    assert_eq!(session.player().position().y, GROUND_Y);
    assert_eq!(session.player().dy(), 0);
}

#[test]
fn test_jump_while_airborne_is_ignored() {
    let mut session = Session::new();
    session.press(Key::Up);
    for _ in 0..5 {
        session.tick();
    }
    assert_eq!(session.player().position().y, 5);

    session.press(Key::Space);
    session.tick();
    assert_eq!(session.player().position().y, 4);
    assert_eq!(session.player().dy(), -1);
}

#[test]
fn test_last_key_before_tick_wins() {
    let mut session = Session::new();
    session.press(Key::Space);
    session.press(Key::Other('z'));
    session.tick();
    assert_eq!(session.player().state(), PlayerState::Running);

    session.press(Key::Other('z'));
    session.press(Key::Up);
    session.tick();
    assert_eq!(session.player().state(), PlayerState::Jumping);
}

#[test]
fn test_latch_cleared_every_tick() {
    let mut session = Session::new();
    session.press(Key::Space);
    session.tick();
    assert_eq!(session.latched(), None);

    session.press(Key::Other('x'));
    session.tick();
    assert_eq!(session.latched(), None);
}

#[test]
fn test_score_every_third_tick() {
    let mut session = Session::new();
    let mut scores = Vec::new();
    for _ in 0..9 {
        session.tick();
        scores.push(session.score());
    }
    assert_eq!(scores, vec![0, 0, 1, 1, 1, 2, 2, 2, 3]);
    assert_eq!(session.high_score(), 3);
    // The scoreboard best only moves when a game ends.
    assert_eq!(session.scoreboard().high_score, 0);
    assert_eq!(session.scoreboard().to_string(), "00003");
}

#[test]
fn test_first_obstacle_leaves_after_81_ticks() {
    let mut session = Session::new();
    for _ in 0..67 {
        session.tick();
    }
    // Airborne (row 6 or above) for every tick the obstacle passes the player.
    session.press(Key::Space);
    for _ in 67..80 {
        assert_eq!(session.tick(), TickOutcome::Running);
    }

    let snap = session.snapshot();
    assert_eq!(snap.ticks, 80);
    assert_eq!(snap.obstacles, vec![Position::new(0, 10), Position::new(59, 10)]);

    assert_eq!(session.tick(), TickOutcome::Running);
    assert_eq!(session.snapshot().obstacles, vec![Position::new(58, 10)]);
}

#[test]
fn test_collision_ends_game_and_freezes_state() {
    let mut session = Session::new();
    assert_eq!(run_until_game_over(&mut session), 72);
    assert!(session.game_over());
    assert_eq!(session.score(), 24);
    assert_eq!(session.scoreboard().high_score, 24);

    let hit = session.last_collision().unwrap();
    assert_eq!(hit.index, 0);
    assert_eq!(hit.obstacle.origin, Position::new(9, 10));

    // Neither the colliding obstacle nor the one behind it moved.
    let frozen = session.snapshot();
    assert_eq!(frozen.obstacles, vec![Position::new(9, 10), Position::new(68, 10)]);

    for _ in 0..10 {
        assert_eq!(session.tick(), TickOutcome::GameOver);
    }
    assert_eq!(session.snapshot(), frozen);
}

#[test]
fn test_restart_keeps_high_score() {
    let mut session = Session::new();
    run_until_game_over(&mut session);

    assert_eq!(session.press(Key::Other('r')), PressOutcome::Ignored);
    assert!(session.game_over());

    assert_eq!(session.press(Key::Space), PressOutcome::Restarted);
    assert!(!session.game_over());
    assert_eq!(session.ticks(), 0);
    assert_eq!(session.score(), 0);
    assert_eq!(session.restarts(), 1);
    assert_eq!(session.scoreboard().to_string(), "HI 00024  00000");
    assert_eq!(session.snapshot().obstacles, vec![Position::new(80, 10)]);
    assert_eq!(session.player().position(), Position::new(3, GROUND_Y));

    // The restarting key carries over as the first jump.
    assert_eq!(session.latched(), Some(Key::Space));
    session.tick();
    assert_eq!(session.player().state(), PlayerState::Jumping);
    assert_eq!(session.player().position().y, GROUND_Y - 1);

    // A second identical game cannot lower the best.
    assert_eq!(run_until_game_over(&mut session), 72);
    assert_eq!(session.scoreboard().to_string(), "HI 00024  00024");
    assert_eq!(session.high_score(), 24);
}
