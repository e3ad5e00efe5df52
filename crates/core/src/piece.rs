//! The falling piece and its placement validity check.

use crate::grid::Grid;
use crate::shapes::{self, ShapeCells};
use termtris_types::{ShapeKind, SPAWN_ANCHOR};

/// A falling piece: shape kind, rotation index, and grid anchor.
///
/// The rotation index is free-running; it wraps modulo the shape's
/// rotation-state count at mask lookup, so incrementing it never needs a
/// bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// A fresh piece at the spawn anchor. Every occupied cell starts above
    /// the visible grid and scrolls in as the piece descends.
    pub fn spawn(kind: ShapeKind) -> Self {
        let (x, y) = SPAWN_ANCHOR;
        Self {
            kind,
            rotation: 0,
            x,
            y,
        }
    }

    /// Absolute occupied cells for the current placement.
    pub fn cells(&self) -> ShapeCells {
        let mut cells = shapes::cell_offsets(self.kind, self.rotation);
        for (dx, dy) in cells.iter_mut() {
            *dx += self.x;
            *dy += self.y;
        }
        cells
    }

    /// The same piece translated by (dx, dy).
    pub fn moved(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// The same piece advanced to its next rotation state.
    pub fn rotated(&self) -> Self {
        Self {
            rotation: self.rotation.wrapping_add(1),
            ..*self
        }
    }

    /// Placement validity: every occupied cell must either lie above the
    /// visible grid (y < 0) or be an in-bounds empty cell. Pure, no side
    /// effects.
    pub fn is_valid(&self, grid: &Grid) -> bool {
        self.cells()
            .iter()
            .all(|&(x, y)| y < 0 || grid.is_open(x, y))
    }
}
