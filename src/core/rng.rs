//! Random source for coin placement
//!
//! The simulation only ever needs one primitive: a uniform integer in
//! `[0, n)` to pick a free cell. Keeping that behind a trait lets tests
//! substitute a deterministic source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform integer source consumed by coin placement.
pub trait RandomSource {
    /// Uniform value in `[0, n)`. Callers guarantee `n > 0`.
    fn uniform(&mut self, n: usize) -> usize;
}

/// Seedable RNG owned by a session. Remembers its seed so a run can be
/// reproduced.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_entropy() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SessionRng {
    fn uniform(&mut self, n: usize) -> usize {
        self.rng.random_range(0..n)
    }
}
