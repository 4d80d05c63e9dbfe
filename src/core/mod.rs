//! Core module - pure game logic with no external I/O
//!
//! Everything under here is deterministic state-transition code: shapes and
//! rotation, the active piece, the playfield with its locked-cells record,
//! the piece supply, and the session orchestration.

pub mod board;
pub mod piece;
pub mod rng;
pub mod session;
pub mod shape;
pub mod snapshot;

pub use board::Playfield;
pub use piece::Piece;
pub use rng::{PieceSupply, SimpleRng};
pub use session::GameSession;
pub use shape::ShapeGrid;
pub use snapshot::{PieceSnapshot, SessionSnapshot, TimersSnapshot};
