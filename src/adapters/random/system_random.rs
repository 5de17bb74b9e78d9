//! `rand`-backed random source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ports::RandomSource;

/// Uniform draws from a `StdRng`.
///
/// `seeded` gives a reproducible sequence, which the interactive binary
/// exposes for replaying a session.
#[derive(Debug, Clone)]
pub struct SystemRandom {
    rng: StdRng,
}

impl SystemRandom {
    /// Seeds from operating-system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }
}
