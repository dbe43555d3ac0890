//! RNG module - explicitly passed random source
//!
//! Every random decision in the simulation (spawn positions, per-dancer
//! constants, wind gusts, jitter, impulses) draws from a [`DanceRng`] that the
//! caller owns and passes in. There is no process-global random state, so a
//! seeded run is reproducible and testable.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seedable pseudo-random source for the simulation.
#[derive(Debug, Clone)]
pub struct DanceRng {
    rng: SmallRng,
    seed: u64,
}

impl DanceRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed used to build this RNG (useful for reproducing a run).
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `[0, max)`; returns 0 when `max == 0`.
    pub fn index(&mut self, max: usize) -> usize {
        if max == 0 {
            return 0;
        }
        self.rng.gen_range(0..max)
    }

    /// Uniform value in `[-amplitude, amplitude)`; zero when `amplitude <= 0`.
    pub fn symmetric(&mut self, amplitude: f32) -> f32 {
        if amplitude <= 0.0 {
            return 0.0;
        }
        self.rng.gen_range(-amplitude..amplitude)
    }

    /// Uniform value in `[0, max]` for spawn coordinates; zero when `max <= 0`.
    pub fn up_to(&mut self, max: f32) -> f32 {
        if max <= 0.0 {
            return 0.0;
        }
        self.rng.gen_range(0.0..=max)
    }

    /// `base + step * k` for a uniform `k` in `[0, count)`.
    pub fn stepped(&mut self, base: f32, step: f32, count: usize) -> f32 {
        base + step * self.index(count) as f32
    }

    /// Pick one element of a non-empty slice.
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        items.get(self.index(items.len())).copied()
    }
}

impl Default for DanceRng {
    fn default() -> Self {
        Self::new(1)
    }
}
