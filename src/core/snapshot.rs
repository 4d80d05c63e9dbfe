//! Read-model handed to rendering collaborators between steps.

use arrayvec::ArrayVec;

use crate::core::piece::Piece;
use crate::types::{Cell, PieceKind};

/// Current piece as exported to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub x: i16,
    pub y: i16,
    pub rotation: u8,
    /// Absolute grid coordinates of the four filled cells.
    pub cells: ArrayVec<(i16, i16), 4>,
}

impl From<Piece> for PieceSnapshot {
    fn from(piece: Piece) -> Self {
        Self {
            kind: piece.kind,
            x: piece.x,
            y: piece.y,
            rotation: piece.rotation % 4,
            cells: piece.cells(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TimersSnapshot {
    pub fall_ms: u32,
    pub lock_ms: u32,
}

/// State of a session after a step.
///
/// `board` holds settled cells only; the current piece is exported
/// separately so renderers can overlay it (and its ghost projection) on top.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub columns: u16,
    pub rows: u16,
    /// Row-major, `rows x columns` settled cells.
    pub board: Vec<Cell>,
    pub current: PieceSnapshot,
    pub next: PieceKind,
    /// Lowest origin row the current piece could drop to (rendering aid).
    pub ghost_y: i16,
    /// Lock-delay countdown is running.
    pub landed: bool,
    pub score: u32,
    pub game_over: bool,
    pub timers: TimersSnapshot,
}

impl SessionSnapshot {
    /// Settled cell at (x, y); `None` when empty or out of range.
    pub fn cell(&self, x: i16, y: i16) -> Cell {
        if x < 0 || y < 0 || x >= self.columns as i16 || y >= self.rows as i16 {
            return None;
        }
        self.board[y as usize * self.columns as usize + x as usize]
    }

    /// Number of settled cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.board.iter().filter(|cell| cell.is_some()).count()
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            columns: 0,
            rows: 0,
            board: Vec::new(),
            current: PieceSnapshot {
                kind: PieceKind::I,
                x: 0,
                y: 0,
                rotation: 0,
                cells: ArrayVec::new(),
            },
            next: PieceKind::I,
            ghost_y: 0,
            landed: false,
            score: 0,
            game_over: false,
            timers: TimersSnapshot::default(),
        }
    }
}
