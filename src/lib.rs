//! Neon Tetris engine (workspace facade crate).
//!
//! This package keeps a single `neon_tetris::{core,types}` public API while
//! the implementation lives in dedicated crates under `crates/`.

pub use neon_tetris_core as core;
pub use neon_tetris_types as types;
