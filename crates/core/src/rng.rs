//! Piece generation
//!
//! The randomness source is an injected capability so drivers and tests
//! control the piece stream. Production play uses a seeded LCG with a uniform
//! pick over the seven kinds — no bag randomizer and no anti-repetition.

use neon_tetris_types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Where the next falling piece comes from.
pub trait PieceSource {
    fn next_piece(&mut self) -> PieceKind;
}

/// Uniform random pick over the seven kinds.
#[derive(Debug, Clone)]
pub struct UniformPieces {
    rng: SimpleRng,
}

impl UniformPieces {
    /// Create a source with the given seed.
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl PieceSource for UniformPieces {
    fn next_piece(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }
}

impl Default for UniformPieces {
    fn default() -> Self {
        Self::new(1)
    }
}

/// A fixed piece sequence, cycling when exhausted. Used by tests for
/// deterministic piece streams; also usable for replays.
#[derive(Debug, Clone)]
pub struct ScriptedPieces {
    seq: Vec<PieceKind>,
    next: usize,
}

impl ScriptedPieces {
    /// Create a source that yields `seq` in order, then repeats it.
    pub fn new(seq: &[PieceKind]) -> Self {
        assert!(!seq.is_empty(), "scripted piece sequence must be non-empty");
        Self {
            seq: seq.to_vec(),
            next: 0,
        }
    }
}

impl PieceSource for ScriptedPieces {
    fn next_piece(&mut self) -> PieceKind {
        let kind = self.seq[self.next];
        self.next = (self.next + 1) % self.seq.len();
        kind
    }
}
