//! Piece catalog and rotation
//!
//! The catalog stores one canonical matrix per piece kind; every other
//! orientation is computed with a 90-degree clockwise transform rather than
//! looked up in a table. Wall kicks try the unchanged anchor, then one column
//! left, then one column right, and otherwise give up — no vertical kicks and
//! no per-piece kick tables.

use neon_tetris_types::{PieceKind, MAX_SHAPE_DIM};

/// A piece's cell matrix: a `rows` x `cols` window of a fixed backing array.
///
/// Small and `Copy`; passed around by value like the coordinates it anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: usize,
    cols: usize,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from 0/1 rows. Rows must be non-empty, rectangular, and
    /// fit the fixed backing array.
    pub fn new(rows: &[&[u8]]) -> Self {
        assert!(!rows.is_empty() && rows.len() <= MAX_SHAPE_DIM);
        let cols = rows[0].len();
        assert!(cols > 0 && cols <= MAX_SHAPE_DIM);

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), cols);
            for (x, &bit) in row.iter().enumerate() {
                cells[y][x] = bit != 0;
            }
        }
        Self {
            rows: rows.len(),
            cols,
            cells,
        }
    }

    /// Height of the bounding box in rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Width of the bounding box in columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the cell at (x, y) within the bounding box is filled.
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        debug_assert!(x < self.cols && y < self.rows);
        self.cells[y][x]
    }

    /// Iterate the filled cells as (dx, dy) offsets from the top-left anchor.
    pub fn filled_cells(self) -> impl Iterator<Item = (i8, i8)> {
        (0..self.rows).flat_map(move |y| {
            (0..self.cols).filter_map(move |x| self.cells[y][x].then_some((x as i8, y as i8)))
        })
    }

    /// The 90-degree clockwise rotation: new row `x` is old column `x` read
    /// bottom-to-top (transpose and reverse), with the dimensions swapped.
    pub fn rotated_cw(&self) -> Self {
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for x in 0..self.cols {
            for (k, y) in (0..self.rows).rev().enumerate() {
                cells[x][k] = self.cells[y][x];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// Canonical spawn-orientation matrix for a piece kind.
pub fn canonical_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::new(&[&[1, 1, 1, 1]]),
        PieceKind::O => Shape::new(&[&[1, 1], &[1, 1]]),
        PieceKind::Z => Shape::new(&[&[1, 1, 0], &[0, 1, 1]]),
        PieceKind::S => Shape::new(&[&[0, 1, 1], &[1, 1, 0]]),
        PieceKind::T => Shape::new(&[&[1, 1, 1], &[0, 1, 0]]),
        PieceKind::J => Shape::new(&[&[1, 1, 1], &[1, 0, 0]]),
        PieceKind::L => Shape::new(&[&[1, 1, 1], &[0, 0, 1]]),
    }
}

/// Horizontal kick offsets, tried in order: stay, one left, one right.
const KICK_OFFSETS: [i8; 3] = [0, -1, 1];

/// Try to rotate a shape anchored at (x, y) with horizontal wall kicks.
///
/// Returns the rotated shape and the accepted anchor column, or `None` when
/// every kick offset fails validation — the caller leaves the piece as it
/// was (a silent no-op, not an error).
pub fn try_rotate(
    shape: &Shape,
    x: i8,
    y: i8,
    is_valid: impl Fn(&Shape, i8, i8) -> bool,
) -> Option<(Shape, i8)> {
    let rotated = shape.rotated_cw();
    for &dx in KICK_OFFSETS.iter() {
        if is_valid(&rotated, x + dx, y) {
            return Some((rotated, x + dx));
        }
    }
    None
}
