//! Game session module - orchestrates board, piece, scoring, and lifecycle
//!
//! A session owns one board, one active piece, and one piece source. Drivers
//! feed it discrete intents plus elapsed time, then read the post-tick
//! snapshot and drain the event queue. Everything is synchronous; nothing
//! here blocks or allocates once the session exists.

use arrayvec::ArrayVec;
use neon_tetris_types::{
    GameAction, GameEvent, BOARD_WIDTH, DROP_INTERVAL_MS, MAX_EVENTS_PER_LOCK, SPAWN_X, SPAWN_Y,
    START_LEVEL,
};

use crate::board::Board;
use crate::pieces::{canonical_shape, try_rotate, Shape};
use crate::rng::{PieceSource, UniformPieces};
use crate::scoring::{is_combo_clear, line_clear_score, next_combo};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};

/// The currently falling piece: shape matrix plus board anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// A fresh piece at the fixed spawn column, top row.
    pub fn spawn(shape: Shape) -> Self {
        Self {
            shape,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }
}

/// Complete session state
///
/// Generic over the piece source so tests can inject a fixed sequence;
/// production sessions use the seeded uniform source.
#[derive(Debug, Clone)]
pub struct GameSession<P: PieceSource = UniformPieces> {
    board: Board,
    /// `None` only once the session has terminated.
    active: Option<ActivePiece>,
    pieces: P,
    score: u32,
    /// Best final score observed; seeded by the driver, raised on game over.
    high_score: u32,
    level: u32,
    combo: u32,
    drop_interval_ms: u32,
    /// Elapsed time since the last automatic descent.
    drop_timer_ms: u32,
    game_over: bool,
    /// Events from the most recent lock, drained by the driver.
    events: ArrayVec<GameEvent, MAX_EVENTS_PER_LOCK>,
}

impl GameSession<UniformPieces> {
    /// Create a session with the production randomness source.
    pub fn new(seed: u32) -> Self {
        Self::with_source(UniformPieces::new(seed))
    }
}

impl<P: PieceSource> GameSession<P> {
    /// Create a session drawing pieces from an injected source.
    pub fn with_source(mut pieces: P) -> Self {
        let first = ActivePiece::spawn(canonical_shape(pieces.next_piece()));
        Self {
            board: Board::new(),
            active: Some(first),
            pieces,
            score: 0,
            high_score: 0,
            level: START_LEVEL,
            combo: 0,
            drop_interval_ms: DROP_INTERVAL_MS,
            drop_timer_ms: 0,
            game_over: false,
            events: ArrayVec::new(),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Seed the high-score record (read from storage by the collaborator).
    pub fn set_high_score(&mut self, high_score: u32) {
        self.high_score = high_score;
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    /// Row the active piece would land on if dropped straight down (ghost
    /// piece support for renderers).
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        let mut y = active.y;
        while self.board.can_place(&active.shape, active.x, y + 1) {
            y += 1;
        }
        Some(y)
    }

    /// Apply a player intent.
    ///
    /// Returns whether the piece actually moved or rotated (`SoftDrop`
    /// reports false when the piece locked instead of descending). Once the
    /// session has terminated every intent but `Restart` is ignored.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over && action != GameAction::Restart {
            return false;
        }
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => self.move_down(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Advance the automatic drop timer.
    ///
    /// Once the accumulated time reaches the drop interval this performs
    /// exactly one descent and resets the reference point - the sole
    /// automatic-progression mechanism.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.game_over {
            return;
        }
        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms >= self.drop_interval_ms {
            self.drop_timer_ms = 0;
            self.move_down();
        }
    }

    /// Reinitialize to a fresh running session. The piece sequence continues
    /// where it left off and the high-score record survives.
    pub fn restart(&mut self) {
        self.board.clear();
        self.score = 0;
        self.level = START_LEVEL;
        self.combo = 0;
        self.drop_timer_ms = 0;
        self.game_over = false;
        self.events.clear();
        self.spawn_piece();
    }

    /// Drain the events produced by the most recent lock.
    pub fn take_events(&mut self) -> ArrayVec<GameEvent, MAX_EVENTS_PER_LOCK> {
        std::mem::take(&mut self.events)
    }

    /// Write the post-tick view into a caller-owned snapshot (no allocation).
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.score = self.score;
        out.high_score = self.high_score;
        out.level = self.level;
        out.combo = self.combo;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn move_left(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        // Anchor guard first, then the cell-level check.
        if active.x > 0 && self.board.can_place(&active.shape, active.x - 1, active.y) {
            self.active = Some(ActivePiece {
                x: active.x - 1,
                ..active
            });
            return true;
        }
        false
    }

    fn move_right(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        // Bounding-box guard against the right edge, then the cell check.
        let inside_edge = active.x + (active.shape.cols() as i8) < BOARD_WIDTH as i8;
        if inside_edge && self.board.can_place(&active.shape, active.x + 1, active.y) {
            self.active = Some(ActivePiece {
                x: active.x + 1,
                ..active
            });
            return true;
        }
        false
    }

    fn rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let board = &self.board;
        let kicked = try_rotate(&active.shape, active.x, active.y, |shape, x, y| {
            board.can_place(shape, x, y)
        });
        match kicked {
            Some((shape, x)) => {
                self.active = Some(ActivePiece { shape, x, ..active });
                true
            }
            None => false,
        }
    }

    /// One-row descent - the sole path by which the piece falls, shared by
    /// the soft-drop intent and the automatic tick. Returns true if the
    /// piece descended, false if it could not and locked instead.
    fn move_down(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        if self.board.can_place(&active.shape, active.x, active.y + 1) {
            self.active = Some(ActivePiece {
                y: active.y + 1,
                ..active
            });
            true
        } else {
            self.lock_active();
            false
        }
    }

    /// Lock & scoring protocol: transfer the piece, detect and score full
    /// rows, apply the removal, then evaluate game over before spawning.
    fn lock_active(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        self.board.lock(&active.shape, active.x, active.y);

        self.events.clear();
        self.events.push(GameEvent::Locked);

        // Two-phase clear: detect, score, then apply.
        let rows = self.board.full_rows();
        let cleared = rows.len();
        if cleared > 0 {
            self.events.push(GameEvent::LinesCleared(cleared as u32));
            self.score += line_clear_score(cleared);
            if is_combo_clear(cleared) {
                self.events.push(GameEvent::ComboAchieved(cleared as u32));
            }
        }
        self.combo = next_combo(self.combo, cleared);
        self.board.remove_rows(&rows);

        if self.board.is_top_row_occupied() {
            self.game_over = true;
            if self.score > self.high_score {
                self.high_score = self.score;
            }
            self.events.push(GameEvent::GameOver(self.score));
        } else {
            self.spawn_piece();
        }
    }

    fn spawn_piece(&mut self) {
        let shape = canonical_shape(self.pieces.next_piece());
        self.active = Some(ActivePiece::spawn(shape));
    }
}

impl Default for GameSession<UniformPieces> {
    fn default() -> Self {
        Self::new(1)
    }
}
