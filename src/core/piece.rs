//! Piece module - the active falling piece
//!
//! `Piece` is a plain value: movement and rotation checks build a trial copy,
//! validate it against the playfield, and commit only on success, so an
//! invalid attempt never leaks a partially applied mutation.

use arrayvec::ArrayVec;

use crate::core::board::Playfield;
use crate::core::shape::ShapeGrid;
use crate::types::{PieceKind, Rgb};

/// Active falling piece: bounding-box origin, kind, and rotation index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    /// Grid column of the shape's bounding-box top-left.
    pub x: i16,
    /// Grid row of the shape's bounding-box top-left.
    pub y: i16,
    /// Rotation index, interpreted mod 4.
    pub rotation: u8,
}

impl Piece {
    /// Place a new piece at the spawn origin for a board of the given width.
    pub fn spawn(kind: PieceKind, columns: u16) -> Self {
        Self {
            kind,
            x: (columns / 2) as i16 - 2,
            y: 0,
            rotation: 0,
        }
    }

    /// Filled-cell matrix at the current rotation, recomputed on demand.
    pub fn image(&self) -> ShapeGrid {
        let mut image = ShapeGrid::canonical(self.kind);
        for _ in 0..self.rotation % 4 {
            image = image.rotated_cw();
        }
        image
    }

    /// Absolute grid coordinates of the four filled cells.
    pub fn cells(&self) -> ArrayVec<(i16, i16), 4> {
        self.image()
            .filled_offsets()
            .map(|(row, col)| (self.x + col as i16, self.y + row as i16))
            .collect()
    }

    /// Palette color, derived from the kind.
    pub fn color(&self) -> Rgb {
        self.kind.color()
    }

    /// True if every filled cell sits inside the side walls, above the
    /// floor, and clear of settled cells.
    pub fn is_valid(&self, field: &Playfield) -> bool {
        self.cells().iter().all(|&(x, y)| field.allows(x, y))
    }

    /// Trial copy shifted by (dx, dy).
    pub fn translated(&self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Trial copy rotated one step counter-clockwise.
    pub fn rotated_ccw(&self) -> Self {
        Self {
            rotation: (self.rotation + 3) % 4,
            ..*self
        }
    }
}
