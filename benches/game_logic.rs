use criterion::{black_box, criterion_group, criterion_main, Criterion};
use neon_tetris::core::{Board, GameSession, GameSnapshot};
use neon_tetris::types::GameAction;

fn bench_tick(c: &mut Criterion) {
    let mut session = GameSession::new(12345);

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            session.tick(black_box(16));
            if session.game_over() {
                session.restart();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, true);
                }
            }
            board.clear_full_rows();
        })
    });
}

fn bench_moves(c: &mut Criterion) {
    let mut session = GameSession::new(12345);

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            session.apply_action(black_box(GameAction::MoveLeft));
            session.apply_action(black_box(GameAction::MoveRight));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut session = GameSession::new(12345);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            session.apply_action(black_box(GameAction::Rotate));
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let session = GameSession::new(12345);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            session.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_moves,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);
