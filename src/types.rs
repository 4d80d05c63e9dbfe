//! Core types shared across the engine
//! This module contains pure data types with no external dependencies

/// Reference board dimensions
pub const DEFAULT_COLUMNS: u16 = 10;
pub const DEFAULT_ROWS: u16 = 20;

/// Advisory block size in pixels, consumed by rendering collaborators only
pub const DEFAULT_BLOCK_PIXEL_SIZE: u16 = 30;

/// Timing defaults (in milliseconds)
pub const DEFAULT_BASE_FALL_INTERVAL_MS: u32 = 500;
pub const DEFAULT_FAST_DROP_INTERVAL_MS: u32 = 50;
pub const DEFAULT_LOCK_DELAY_MS: u32 = 500;

/// Points awarded per row cleared in a single lock event
pub const DEFAULT_SCORE_PER_ROW: u32 = 100;

/// Opaque palette color bound to a piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Palette color for this kind, one per kind
    pub fn color(&self) -> Rgb {
        match self {
            PieceKind::I => Rgb(0, 255, 255),
            PieceKind::J => Rgb(0, 0, 255),
            PieceKind::L => Rgb(255, 165, 0),
            PieceKind::O => Rgb(255, 255, 0),
            PieceKind::S => Rgb(0, 255, 0),
            PieceKind::T => Rgb(128, 0, 128),
            PieceKind::Z => Rgb(255, 0, 0),
        }
    }
}

/// Cell on the board (None = empty, Some = settled piece kind)
pub type Cell = Option<PieceKind>;

/// Discrete commands applied to the current piece within a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    RotateCcw,
    HardDrop,
}
