//! Pieces module - tetromino catalog and rotation
//!
//! Each kind has exactly one authored matrix (its spawn orientation) inside a
//! 4x4 frame. Every other orientation is derived by repeated clockwise quarter
//! turns of that matrix, so rotation 0 always matches the catalog entry.
//!
//! There are no wall kicks: a rotation that collides is rejected by the game
//! state, never nudged into place.

use serde::{Deserialize, Serialize};

use crate::types::{PieceKind, Rotation, PIECE_FRAME};

/// Occupancy matrix of a piece, indexed `[y][x]` inside its 4x4 frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape([[bool; PIECE_FRAME]; PIECE_FRAME]);

impl Shape {
    const fn from_rows(rows: [[u8; PIECE_FRAME]; PIECE_FRAME]) -> Self {
        let mut cells = [[false; PIECE_FRAME]; PIECE_FRAME];
        let mut y = 0;
        while y < PIECE_FRAME {
            let mut x = 0;
            while x < PIECE_FRAME {
                cells[y][x] = rows[y][x] != 0;
                x += 1;
            }
            y += 1;
        }
        Self(cells)
    }

    /// Whether the frame cell at (x, y) is occupied.
    /// Cells outside the frame are never occupied.
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < PIECE_FRAME && y < PIECE_FRAME && self.0[y][x]
    }

    /// Offsets of every occupied cell relative to the frame origin
    pub fn minos(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.0.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &filled)| filled)
                .map(move |(x, _)| (x as i8, y as i8))
        })
    }

    /// One clockwise quarter turn inside the frame.
    ///
    /// Cell (x, y) lands on (3 - y, x): the top row becomes the right column.
    pub fn rotated_cw(&self) -> Self {
        let mut out = [[false; PIECE_FRAME]; PIECE_FRAME];
        for (y, row) in self.0.iter().enumerate() {
            for (x, &filled) in row.iter().enumerate() {
                out[x][PIECE_FRAME - 1 - y] = filled;
            }
        }
        Self(out)
    }
}

const I_SPAWN: Shape = Shape::from_rows([[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]);
const O_SPAWN: Shape = Shape::from_rows([[0, 1, 1, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
const T_SPAWN: Shape = Shape::from_rows([[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
const S_SPAWN: Shape = Shape::from_rows([[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
const Z_SPAWN: Shape = Shape::from_rows([[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
const J_SPAWN: Shape = Shape::from_rows([[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
const L_SPAWN: Shape = Shape::from_rows([[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);

/// The authored spawn-orientation matrix for a kind
pub fn spawn_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SPAWN,
        PieceKind::O => O_SPAWN,
        PieceKind::T => T_SPAWN,
        PieceKind::S => S_SPAWN,
        PieceKind::Z => Z_SPAWN,
        PieceKind::J => J_SPAWN,
        PieceKind::L => L_SPAWN,
    }
}

/// Shape of `kind` after `turns` clockwise quarter turns from spawn.
///
/// Total over every kind and turn count; `turns` and `turns + 4` agree.
pub fn shape_for(kind: PieceKind, turns: u8) -> Shape {
    let mut shape = spawn_shape(kind);
    for _ in 0..turns % 4 {
        shape = shape.rotated_cw();
    }
    shape
}

/// Shape for a kind at a named rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> Shape {
    shape_for(kind, rotation.index())
}
