//! Shared types and constants for the puzzle engine
//!
//! Pure data with no dependencies, usable from the core, tests, and any
//! frontend that drives the engine.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: (3, 0), fixed for every piece
//!
//! # Timing
//!
//! The drop interval is a fixed 500ms. A `level` counter exists in the
//! session state but does not scale the interval.

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn column for a fresh piece (fixed, not width-derived)
pub const SPAWN_X: i8 = 3;

/// Spawn row for a fresh piece (top of the board)
pub const SPAWN_Y: i8 = 0;

/// Interval between automatic downward drops, in milliseconds
pub const DROP_INTERVAL_MS: u32 = 500;

/// Points awarded per cleared row
pub const POINTS_PER_LINE: u32 = 10;

/// Level a session starts (and restarts) at
pub const START_LEVEL: u32 = 1;

/// Largest bounding box a shape matrix can occupy (the bar is 4 long)
pub const MAX_SHAPE_DIM: usize = 4;

/// Most events a single lock can emit (locked, cleared, combo, game over)
pub const MAX_EVENTS_PER_LOCK: usize = 4;

/// The seven piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    Z,
    S,
    T,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
    ];
}

/// Player intents accepted by a session
///
/// Every action is a silent no-op when currently invalid; all but `Restart`
/// are ignored once the session has terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    Restart,
}

/// Discrete events emitted by a session, consumed by the driver after each
/// tick (sounds, score widgets, combo flashes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    /// The active piece was transferred into the board.
    Locked,
    /// Rows were removed; carries how many.
    LinesCleared(u32),
    /// A multi-line clear extended the combo chain; carries the line count.
    ComboAchieved(u32),
    /// The session terminated; carries the final score.
    GameOver(u32),
}
