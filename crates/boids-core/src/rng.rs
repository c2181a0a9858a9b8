//! Deterministic RNG wrapper for population scatter.
//!
//! The engine itself is fully deterministic; randomness enters only when a
//! flock is (re)populated.  Wrapping a seeded `SmallRng` means the same
//! seed always scatters agents to the same positions, so runs — and tests —
//! are reproducible.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Flock-level deterministic RNG.
///
/// One per flock; all scatter draws go through it in agent order, so the
/// populated layout is a pure function of `(seed, count, bounds)`.
pub struct FlockRng(SmallRng);

impl FlockRng {
    pub fn new(seed: u64) -> Self {
        FlockRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
