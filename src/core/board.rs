//! Playfield module - bounded grid plus the locked-cells record
//!
//! The locked-cells map is the single source of truth for occupancy: entries
//! are added when a piece settles and reindexed when rows clear. The dense
//! grid handed to renderers is a derived projection rebuilt once per step.
//! Coordinates: (x, y) with x growing rightward and y growing downward;
//! row 0 is the topmost visible row.

use std::collections::HashMap;

use arrayvec::ArrayVec;

use crate::core::piece::Piece;
use crate::types::{Cell, PieceKind};

#[derive(Debug, Clone, PartialEq)]
pub struct Playfield {
    columns: i16,
    rows: i16,
    locked: HashMap<(i16, i16), PieceKind>,
}

impl Playfield {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            columns: columns as i16,
            rows: rows as i16,
            locked: HashMap::new(),
        }
    }

    pub fn columns(&self) -> i16 {
        self.columns
    }

    pub fn rows(&self) -> i16 {
        self.rows
    }

    /// Settled kind at (x, y), if any.
    pub fn get(&self, x: i16, y: i16) -> Cell {
        self.locked.get(&(x, y)).copied()
    }

    /// Settle a single cell. Returns false for out-of-range coordinates,
    /// which keeps every key inside the board bounds.
    pub fn set(&mut self, x: i16, y: i16, kind: PieceKind) -> bool {
        if x < 0 || x >= self.columns || y < 0 || y >= self.rows {
            return false;
        }
        self.locked.insert((x, y), kind);
        true
    }

    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        self.locked.contains_key(&(x, y))
    }

    /// Placement rule for a single piece cell: inside the side walls, above
    /// the floor, and not overlapping settled cells. Cells above the visible
    /// board (y < 0) are only checked against the horizontal bounds, which
    /// allows pieces to extend above the top during spawn.
    pub fn allows(&self, x: i16, y: i16) -> bool {
        if x < 0 || x >= self.columns || y >= self.rows {
            return false;
        }
        y < 0 || !self.locked.contains_key(&(x, y))
    }

    /// Number of settled cells.
    pub fn occupied_count(&self) -> usize {
        self.locked.len()
    }

    /// Write the piece's filled cells into the locked record.
    pub fn lock_piece(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            self.set(x, y, piece.kind);
        }
    }

    /// Whether every column of row y is occupied.
    pub fn is_row_full(&self, y: i16) -> bool {
        if y < 0 || y >= self.rows {
            return false;
        }
        (0..self.columns).all(|x| self.locked.contains_key(&(x, y)))
    }

    /// Clear all full rows in one atomic collapse and return their indices,
    /// bottom to top.
    ///
    /// Fullness is detected against the pre-clear snapshot; every surviving
    /// cell then shifts down by the number of cleared rows strictly below
    /// it. No cell moves horizontally. A single lock completes at most four
    /// rows (the tallest shape spans four), hence the fixed capacity.
    pub fn clear_full_rows(&mut self) -> ArrayVec<i16, 4> {
        let mut cleared = ArrayVec::new();
        for y in (0..self.rows).rev() {
            if self.is_row_full(y) {
                cleared.push(y);
                if cleared.is_full() {
                    break;
                }
            }
        }
        if cleared.is_empty() {
            return cleared;
        }

        let settled = std::mem::take(&mut self.locked);
        self.locked = settled
            .into_iter()
            .filter(|&((_, y), _)| !cleared.contains(&y))
            .map(|((x, y), kind)| {
                let shift = cleared.iter().filter(|&&row| row > y).count() as i16;
                ((x, y + shift), kind)
            })
            .collect();
        cleared
    }

    /// True if any settled cell sits at or above the topmost visible row.
    /// Checked after every lock event; this is the game-over signal.
    pub fn reaches_top(&self) -> bool {
        self.locked.keys().any(|&(_, y)| y < 1)
    }

    /// Overlay every locked cell onto a dense row-major grid, reusing the
    /// caller's buffer.
    pub fn project_into(&self, grid: &mut Vec<Cell>) {
        grid.clear();
        grid.resize(self.columns as usize * self.rows as usize, None);
        for (&(x, y), &kind) in &self.locked {
            grid[y as usize * self.columns as usize + x as usize] = Some(kind);
        }
    }
}
