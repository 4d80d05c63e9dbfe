//! Piece supply module - seeded random piece selection
//!
//! Piece choice is a single uniform draw over the seven kinds; there is no
//! bag-fairness guarantee. A simple LCG keeps sessions reproducible from a
//! seed, and a cycling supply provides fixed sequences for demos and tests.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current internal state, usable as a seed to resume the sequence.
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Source of upcoming piece kinds.
#[derive(Debug, Clone)]
pub enum PieceSupply {
    /// Uniform random draw from a seeded LCG.
    Uniform(SimpleRng),
    /// Fixed repeating sequence, for demos and deterministic tests.
    Cycle {
        kinds: Vec<PieceKind>,
        index: usize,
    },
}

impl PieceSupply {
    pub fn uniform(seed: u32) -> Self {
        Self::Uniform(SimpleRng::new(seed))
    }

    /// Supply that repeats `kinds` forever.
    ///
    /// # Panics
    /// Panics if `kinds` is empty.
    pub fn cycle(kinds: Vec<PieceKind>) -> Self {
        assert!(!kinds.is_empty(), "cycle supply needs at least one kind");
        Self::Cycle { kinds, index: 0 }
    }

    /// Draw the next piece kind.
    pub fn draw(&mut self) -> PieceKind {
        match self {
            Self::Uniform(rng) => {
                PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize]
            }
            Self::Cycle { kinds, index } => {
                let kind = kinds[*index];
                *index = (*index + 1) % kinds.len();
                kind
            }
        }
    }
}
