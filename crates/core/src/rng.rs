//! Seeded RNG and the piece stream.
//!
//! Pieces are drawn uniformly at random from the seven kinds. A simple LCG
//! keeps the stream deterministic for a given seed, which the tests and
//! benchmarks rely on.

use termtris_types::ShapeKind;

/// Linear congruential generator with Numerical Recipes constants.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // A zero state would be a fixed point.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform value in [0, max).
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Endless uniform stream of shape kinds.
#[derive(Debug, Clone)]
pub struct PieceStream {
    rng: SimpleRng,
}

impl PieceStream {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next kind.
    pub fn draw(&mut self) -> ShapeKind {
        let i = self.rng.next_range(ShapeKind::ALL.len() as u32) as usize;
        ShapeKind::ALL[i]
    }

    /// Current RNG state, usable as a seed to reproduce the remainder of the
    /// stream.
    pub fn seed(&self) -> u32 {
        self.rng.state
    }
}

impl Default for PieceStream {
    fn default() -> Self {
        Self::new(1)
    }
}
