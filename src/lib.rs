//! gridfall - a step-driven falling-block puzzle game engine.
//!
//! The crate is pure state-transition logic: no rendering, no input polling,
//! no clocks. The driving application calls [`GameSession::step`] once per
//! tick with the elapsed milliseconds and the current input snapshot, then
//! renders the returned [`SessionSnapshot`]. All timing state (gravity, lock
//! delay) lives in explicit millisecond accumulators advanced only by the
//! caller-supplied delta.

pub mod config;
pub mod core;
pub mod types;

pub use crate::config::{ConfigError, SessionConfig};
pub use crate::core::{GameSession, Piece, PieceSupply, Playfield, SessionSnapshot, ShapeGrid};
pub use crate::types::{Cell, Command, PieceKind, Rgb};
