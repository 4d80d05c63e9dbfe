//! Shape module - piece geometry and the rotation transform
//!
//! A shape is a small rectangular boolean matrix describing which cells of a
//! piece's bounding box are filled, in its canonical (rotation 0)
//! orientation. Rotation is the transpose-and-reverse 90-degree clockwise
//! transform; applying it four times returns the original matrix.

use crate::types::PieceKind;

/// Rectangular boolean matrix, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShapeGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl ShapeGrid {
    fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows[0].len();
        debug_assert!(rows.iter().all(|row| row.len() == width));
        let cells = rows
            .iter()
            .flat_map(|row| row.iter().map(|&cell| cell != 0))
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    /// Canonical (rotation 0) shape for a piece kind.
    pub fn canonical(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_rows(&[&[1, 1, 1, 1]]),
            PieceKind::J => Self::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
            PieceKind::L => Self::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
            PieceKind::O => Self::from_rows(&[&[1, 1], &[1, 1]]),
            PieceKind::S => Self::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
            PieceKind::T => Self::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
            PieceKind::Z => Self::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the cell at (row, col) is filled.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.width + col]
    }

    /// 90 degrees clockwise: output row j is input column j read bottom-up.
    pub fn rotated_cw(&self) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for col in 0..self.width {
            for row in (0..self.height).rev() {
                cells.push(self.get(row, col));
            }
        }
        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }

    /// (row, col) offsets of every filled cell, top-left first.
    pub fn filled_offsets(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height).flat_map(move |row| {
            (0..self.width).filter_map(move |col| self.get(row, col).then_some((row, col)))
        })
    }
}
