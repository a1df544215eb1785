//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management for the
//! falling-block engine. It has **zero dependencies** on UI, audio, or I/O,
//! making it:
//!
//! - **Deterministic**: an injected piece source produces identical games
//! - **Testable**: every rule is exercised without a frontend
//! - **Portable**: runs in any environment (terminal, GUI, headless)
//! - **Fast**: allocation-free hot paths for tick processing
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision detection and line clearing
//! - [`game_state`]: the session - active piece, scoring, timing, lifecycle
//! - [`pieces`]: shape catalog, computed rotation, horizontal wall kicks
//! - [`rng`]: injected piece sources (seeded uniform, scripted)
//! - [`scoring`]: line-clear points and the combo counter
//! - [`snapshot`]: post-tick view consumed by the presentation layer
//!
//! # Game Rules
//!
//! This implementation reproduces arcade behavior rather than modern
//! guideline play:
//!
//! - **Uniform randomizer**: each piece is an independent uniform pick; no
//!   bag, no anti-repetition
//! - **Computed rotation**: one canonical matrix per piece, rotated by
//!   transpose-and-reverse
//! - **Horizontal kicks only**: unchanged column, one left, one right -
//!   otherwise the rotation is refused
//! - **Fixed gravity**: one descent per 500ms, regardless of level
//! - **Scoring**: ten points per cleared row; the combo counter tracks
//!   consecutive multi-line clears
//!
//! # Example
//!
//! ```
//! use neon_tetris_core::GameSession;
//! use neon_tetris_core::types::{GameAction, GameEvent};
//!
//! let mut game = GameSession::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.tick(500); // one automatic descent
//!
//! for event in game.take_events() {
//!     if let GameEvent::GameOver(final_score) = event {
//!         println!("final score: {final_score}");
//!     }
//! }
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use neon_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{ActivePiece, GameSession};
pub use pieces::{canonical_shape, try_rotate, Shape};
pub use rng::{PieceSource, ScriptedPieces, SimpleRng, UniformPieces};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
