//! Session tests - the public driver-facing API
//!
//! Everything here goes through intents, ticks, events, and snapshots, the
//! way a frontend drives the engine. Piece streams are pinned with the
//! scripted source.

use neon_tetris::core::{GameSession, ScriptedPieces};
use neon_tetris::types::{
    GameAction, GameEvent, PieceKind, DROP_INTERVAL_MS, SPAWN_X, SPAWN_Y, START_LEVEL,
};

fn scripted(seq: &[PieceKind]) -> GameSession<ScriptedPieces> {
    GameSession::with_source(ScriptedPieces::new(seq))
}

/// Soft-drop until the active piece locks.
fn drop_to_lock<P: neon_tetris::core::PieceSource>(session: &mut GameSession<P>) {
    while session.apply_action(GameAction::SoftDrop) {}
}

fn shift(session: &mut GameSession<ScriptedPieces>, action: GameAction, times: usize) {
    for _ in 0..times {
        assert!(session.apply_action(action));
    }
}

#[test]
fn test_fresh_session_snapshot() {
    let session = scripted(&[PieceKind::T]);
    let snap = session.snapshot();

    assert_eq!(snap.score, 0);
    assert_eq!(snap.high_score, 0);
    assert_eq!(snap.level, START_LEVEL);
    assert_eq!(snap.combo, 0);
    assert!(!snap.game_over);
    assert!(snap.board.iter().flatten().all(|&cell| cell == 0));

    let active = snap.active.unwrap();
    assert_eq!((active.x, active.y), (SPAWN_X, SPAWN_Y));
}

#[test]
fn test_bar_soft_drops_to_the_floor_without_scoring() {
    let mut session = scripted(&[PieceKind::I]);

    drop_to_lock(&mut session);

    assert_eq!(session.score(), 0);
    assert_eq!(session.combo(), 0);
    assert!(!session.game_over());
    assert_eq!(session.take_events().as_slice(), &[GameEvent::Locked]);

    let snap = session.snapshot();
    for x in 3..7 {
        assert_eq!(snap.board[19][x], 1);
    }
}

#[test]
fn test_single_line_clear_through_play() {
    let mut session = scripted(&[PieceKind::I, PieceKind::I, PieceKind::O]);

    // Two bars tile columns 0-7 of the bottom row.
    shift(&mut session, GameAction::MoveLeft, 3);
    drop_to_lock(&mut session);
    shift(&mut session, GameAction::MoveRight, 1);
    drop_to_lock(&mut session);
    assert_eq!(session.score(), 0);

    // The square fills columns 8-9 and completes the row.
    shift(&mut session, GameAction::MoveRight, 5);
    drop_to_lock(&mut session);

    assert_eq!(session.score(), 10);
    assert_eq!(session.combo(), 0);
    assert_eq!(
        session.take_events().as_slice(),
        &[GameEvent::Locked, GameEvent::LinesCleared(1)]
    );

    // The square's top half survives the clear and lands on the new bottom
    // row; the bars are gone with the cleared row.
    let snap = session.snapshot();
    assert_eq!(snap.board[19][8], 1);
    assert_eq!(snap.board[19][9], 1);
    assert_eq!(snap.board[19][0], 0);
    assert_eq!(snap.board[18][8], 0);
}

#[test]
fn test_double_line_clear_fires_combo() {
    let mut session = scripted(&[PieceKind::O]);

    // Five squares tile the bottom two rows completely.
    let moves = [
        (GameAction::MoveLeft, 3),
        (GameAction::MoveLeft, 1),
        (GameAction::MoveRight, 1),
        (GameAction::MoveRight, 3),
        (GameAction::MoveRight, 5),
    ];
    for (action, times) in moves {
        shift(&mut session, action, times);
        drop_to_lock(&mut session);
    }

    assert_eq!(session.score(), 20);
    assert_eq!(session.combo(), 1);
    assert_eq!(
        session.take_events().as_slice(),
        &[
            GameEvent::Locked,
            GameEvent::LinesCleared(2),
            GameEvent::ComboAchieved(2),
        ]
    );

    // Board is empty again.
    let snap = session.snapshot();
    assert!(snap.board.iter().flatten().all(|&cell| cell == 0));
}

#[test]
fn test_stack_to_game_over_and_restart() {
    let mut session = scripted(&[PieceKind::O]);
    session.set_high_score(5);

    // Untouched squares pile up the spawn columns; the tenth lock reaches
    // the top row.
    for _ in 0..10 {
        drop_to_lock(&mut session);
    }

    assert!(session.game_over());
    assert!(session.active().is_none());
    assert_eq!(
        session.take_events().as_slice(),
        &[GameEvent::Locked, GameEvent::GameOver(0)]
    );

    // Terminated sessions ignore everything but restart.
    assert!(!session.apply_action(GameAction::MoveLeft));
    assert!(!session.apply_action(GameAction::SoftDrop));
    session.tick(DROP_INTERVAL_MS * 4);
    assert!(session.game_over());

    assert!(session.apply_action(GameAction::Restart));
    assert!(!session.game_over());
    assert_eq!(session.score(), 0);
    assert_eq!(session.level(), START_LEVEL);
    assert_eq!(session.combo(), 0);
    assert_eq!(session.high_score(), 5);

    let snap = session.snapshot();
    assert!(snap.board.iter().flatten().all(|&cell| cell == 0));
    let active = snap.active.unwrap();
    assert_eq!((active.x, active.y), (SPAWN_X, SPAWN_Y));
}

#[test]
fn test_tick_drives_gravity_at_the_fixed_interval() {
    let mut session = scripted(&[PieceKind::T]);

    // Below the interval nothing moves.
    session.tick(DROP_INTERVAL_MS - 1);
    assert_eq!(session.active().unwrap().y, 0);

    // Crossing it produces exactly one descent.
    session.tick(1);
    assert_eq!(session.active().unwrap().y, 1);

    // Even a long stall yields a single descent per tick call.
    session.tick(DROP_INTERVAL_MS * 10);
    assert_eq!(session.active().unwrap().y, 2);
}

#[test]
fn test_tick_locks_a_grounded_piece() {
    let mut session = scripted(&[PieceKind::O]);

    // Ride gravity all the way down: 18 descents, then the lock.
    for _ in 0..18 {
        session.tick(DROP_INTERVAL_MS);
    }
    assert_eq!(session.active().unwrap().y, 18);
    assert!(session.take_events().is_empty());

    session.tick(DROP_INTERVAL_MS);
    assert_eq!(session.take_events().as_slice(), &[GameEvent::Locked]);
    assert_eq!(session.snapshot().board[19][3], 1);
}

#[test]
fn test_take_events_drains_the_queue() {
    let mut session = scripted(&[PieceKind::O]);
    drop_to_lock(&mut session);

    assert_eq!(session.take_events().as_slice(), &[GameEvent::Locked]);
    assert!(session.take_events().is_empty());
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameSession::new(20260806);
    let mut b = GameSession::new(20260806);

    for _ in 0..8 {
        for session in [&mut a, &mut b] {
            session.apply_action(GameAction::MoveLeft);
            session.apply_action(GameAction::Rotate);
            drop_to_lock(session);
            session.tick(DROP_INTERVAL_MS);
        }
    }

    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_rotation_survives_intent_roundtrip() {
    let mut session = scripted(&[PieceKind::T]);
    let flat = session.active().unwrap().shape;

    assert!(session.apply_action(GameAction::Rotate));
    let upright = session.active().unwrap().shape;
    assert_ne!(upright, flat);
    assert_eq!((upright.rows(), upright.cols()), (3, 2));

    // Three more quarter turns bring the matrix back.
    for _ in 0..3 {
        assert!(session.apply_action(GameAction::Rotate));
    }
    assert_eq!(session.active().unwrap().shape, flat);
}
