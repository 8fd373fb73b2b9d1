//! Randomness used for seeding and workload sizing
//!
//! The analyzer never touches a process-wide generator; it owns a [`Sampler`]
//! so a fixed seed reproduces the same subset and sizes.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Source of shuffles and sample sizes
pub trait Sampler: Send {
    /// Shuffle the pool in place
    fn shuffle(&mut self, pool: &mut [String]);

    /// A size drawn uniformly from `1..=upper`. Callers guarantee `upper >= 1`.
    fn sample_size(&mut self, upper: usize) -> usize;
}

/// [`Sampler`] backed by a [`StdRng`]
#[derive(Debug, Clone)]
pub struct RandomSampler {
    rng: StdRng,
}

impl RandomSampler {
    /// Deterministic sampler for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Sampler seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Seeded when `seed` is given, entropy otherwise
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl Sampler for RandomSampler {
    fn shuffle(&mut self, pool: &mut [String]) {
        pool.shuffle(&mut self.rng);
    }

    fn sample_size(&mut self, upper: usize) -> usize {
        self.rng.gen_range(1..=upper)
    }
}
