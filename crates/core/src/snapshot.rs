use neon_tetris_types::{BOARD_HEIGHT, BOARD_WIDTH, START_LEVEL};

use crate::game_state::ActivePiece;
use crate::pieces::Shape;

/// View of the active piece: current matrix plus board anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

/// Post-tick view of a session, consumed by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    /// Row the active piece would land on (ghost piece support).
    pub ghost_y: Option<i8>,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub combo: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = None;
        self.ghost_y = None;
        self.score = 0;
        self.high_score = 0;
        self.level = START_LEVEL;
        self.combo = 0;
        self.game_over = false;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            score: 0,
            high_score: 0,
            level: START_LEVEL,
            combo: 0,
            game_over: false,
        };
        s.clear();
        s
    }
}
