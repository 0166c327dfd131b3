//! Pieces module - Tetromino shape matrices and rotation
//!
//! Shapes are stored as tight boolean matrices (bounding box only, no
//! padding rows) inside a fixed 4x4 backing array, so copying a shape
//! never allocates. Rotation is the plain 90-degree clockwise matrix
//! rotation around the bounding box; there is no wall kick search.

use crate::core::board::Board;
use crate::types::PieceKind;

/// Maximum bounding-box side. The I piece's 1x4 and 4x1 forms are the extreme.
pub const SHAPE_MAX: usize = 4;

/// Spawn position for new pieces (x, y)
pub const SPAWN_POSITION: (i8, i8) = (3, 0);

/// A piece shape: occupancy matrix with an explicit bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeGrid {
    cells: [[bool; SHAPE_MAX]; SHAPE_MAX],
    rows: u8,
    cols: u8,
}

impl ShapeGrid {
    /// Build from literal rows (non-zero = occupied). All rows must have
    /// the same length and fit the backing array.
    fn from_rows(rows: &[&[u8]]) -> Self {
        debug_assert!(!rows.is_empty() && rows.len() <= SHAPE_MAX);
        let cols = rows[0].len();
        debug_assert!((1..=SHAPE_MAX).contains(&cols));

        let mut cells = [[false; SHAPE_MAX]; SHAPE_MAX];
        for (r, row) in rows.iter().enumerate() {
            debug_assert_eq!(row.len(), cols);
            for (c, &v) in row.iter().enumerate() {
                cells[r][c] = v != 0;
            }
        }

        Self {
            cells,
            rows: rows.len() as u8,
            cols: cols as u8,
        }
    }

    /// Bounding-box height in rows
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Bounding-box width in columns
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Occupancy at matrix position (row, col); false outside the bounding box
    pub fn get(&self, row: u8, col: u8) -> bool {
        row < self.rows && col < self.cols && self.cells[row as usize][col as usize]
    }

    /// Rotate 90 degrees clockwise: an m x n matrix becomes n x m, with
    /// source row r landing in destination column (m - 1 - r).
    pub fn rotated_cw(&self) -> ShapeGrid {
        let mut out = ShapeGrid {
            cells: [[false; SHAPE_MAX]; SHAPE_MAX],
            rows: self.cols,
            cols: self.rows,
        };
        for r in 0..self.rows as usize {
            for c in 0..self.cols as usize {
                if self.cells[r][c] {
                    out.cells[c][self.rows as usize - 1 - r] = true;
                }
            }
        }
        out
    }

    /// Iterate the occupied sub-cells as (dx, dy) offsets from the piece
    /// anchor, row-major.
    pub fn offsets(&self) -> ShapeOffsets {
        ShapeOffsets {
            shape: *self,
            row: 0,
            col: 0,
        }
    }
}

/// Iterator over a shape's occupied (dx, dy) offsets
pub struct ShapeOffsets {
    shape: ShapeGrid,
    row: u8,
    col: u8,
}

impl Iterator for ShapeOffsets {
    type Item = (i8, i8);

    fn next(&mut self) -> Option<(i8, i8)> {
        while self.row < self.shape.rows {
            let (r, c) = (self.row, self.col);
            self.col += 1;
            if self.col >= self.shape.cols {
                self.col = 0;
                self.row += 1;
            }
            if self.shape.cells[r as usize][c as usize] {
                return Some((c as i8, r as i8));
            }
        }
        None
    }
}

/// Spawn-orientation shape for a piece kind
pub fn spawn_shape(kind: PieceKind) -> ShapeGrid {
    match kind {
        PieceKind::I => ShapeGrid::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::O => ShapeGrid::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::T => ShapeGrid::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
        PieceKind::L => ShapeGrid::from_rows(&[&[1, 0], &[1, 0], &[1, 1]]),
        PieceKind::J => ShapeGrid::from_rows(&[&[0, 1], &[0, 1], &[1, 1]]),
        PieceKind::S => ShapeGrid::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        PieceKind::Z => ShapeGrid::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
    }
}

/// The active falling piece: shape matrix plus board anchor.
///
/// `x` and `y` locate the shape's top-left matrix corner on the board.
/// Signed so a shifted candidate can sit outside the board and fail
/// validation instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: ShapeGrid,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// New piece of the given kind at the spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        let (x, y) = SPAWN_POSITION;
        Self {
            kind,
            shape: spawn_shape(kind),
            x,
            y,
        }
    }

    /// True when every occupied sub-cell lands on an empty board cell.
    /// Out-of-bounds and overlap with settled cells both fail. No side
    /// effects; candidate moves are probed with this before committing.
    pub fn is_valid(&self, board: &Board) -> bool {
        self.shape
            .offsets()
            .all(|(dx, dy)| board.is_valid(self.x + dx, self.y + dy))
    }

    /// Copy translated by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Copy rotated clockwise, anchor unchanged
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..*self
        }
    }
}
