//! Session configuration with fail-fast validation.
//!
//! Malformed configuration is the only hard failure in the engine; every
//! other rejected transition (invalid move, rotate, fall) is silent.

use thiserror::Error;

use crate::types::{
    DEFAULT_BASE_FALL_INTERVAL_MS, DEFAULT_BLOCK_PIXEL_SIZE, DEFAULT_COLUMNS,
    DEFAULT_FAST_DROP_INTERVAL_MS, DEFAULT_LOCK_DELAY_MS, DEFAULT_ROWS, DEFAULT_SCORE_PER_ROW,
};

/// Narrowest board that can host every canonical shape (the I piece is 4 wide).
pub const MIN_COLUMNS: u16 = 4;

/// Configuration error raised at session construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must be at least 4x1 cells, got {columns}x{rows}")]
    BoardTooSmall { columns: u16, rows: u16 },
    #[error("{name} must be non-zero")]
    ZeroInterval { name: &'static str },
}

/// Tunables for a [`GameSession`](crate::GameSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub columns: u16,
    pub rows: u16,
    /// Advisory only; the engine never reads it, rendering collaborators do.
    pub block_pixel_size: u16,
    pub base_fall_interval_ms: u32,
    pub fast_drop_interval_ms: u32,
    pub lock_delay_ms: u32,
    pub score_per_row: u32,
    /// Seed for the uniform piece supply.
    pub seed: u32,
}

impl SessionConfig {
    /// Check the configuration, returning a descriptive error on the first
    /// violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns < MIN_COLUMNS || self.rows == 0 {
            return Err(ConfigError::BoardTooSmall {
                columns: self.columns,
                rows: self.rows,
            });
        }
        let intervals = [
            ("base_fall_interval_ms", self.base_fall_interval_ms),
            ("fast_drop_interval_ms", self.fast_drop_interval_ms),
            ("lock_delay_ms", self.lock_delay_ms),
        ];
        for (name, value) in intervals {
            if value == 0 {
                return Err(ConfigError::ZeroInterval { name });
            }
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            block_pixel_size: DEFAULT_BLOCK_PIXEL_SIZE,
            base_fall_interval_ms: DEFAULT_BASE_FALL_INTERVAL_MS,
            fast_drop_interval_ms: DEFAULT_FAST_DROP_INTERVAL_MS,
            lock_delay_ms: DEFAULT_LOCK_DELAY_MS,
            score_per_row: DEFAULT_SCORE_PER_ROW,
            seed: 1,
        }
    }
}
