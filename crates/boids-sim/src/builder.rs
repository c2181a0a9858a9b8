//! Fluent builder for constructing a [`Flock`].

use boids_core::{Bounds, FlockRng, SteeringParams, Vector};

use crate::flock::{Flock, UpdateMode};

/// Fluent builder for [`Flock<V>`].
///
/// The dimensionality is the type parameter: build a `FlockBuilder<Vec3>`
/// for a 3-D flock, `FlockBuilder<Vec2>` for 2-D.
///
/// # Required inputs
///
/// - [`SteeringParams`] — the shared parameter set agents are created with.
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                |
/// |---------------------|------------------------|
/// | `.mode(m)`          | `UpdateMode::Snapshot` |
/// | `.seed(s)`          | `0`                    |
/// | `.populate(n, b)`   | empty flock            |
///
/// # Example
///
/// ```rust,ignore
/// let bounds = Bounds::<Vec3>::centered(0.5);
/// let mut flock = FlockBuilder::new(SteeringParams::fine_3d())
///     .seed(42)
///     .populate(60, bounds)
///     .build();
/// flock.advance();
/// ```
pub struct FlockBuilder<V: Vector> {
    params: SteeringParams,
    mode: UpdateMode,
    seed: u64,
    population: Option<(usize, Bounds<V>)>,
}

impl<V: Vector> FlockBuilder<V> {
    pub fn new(params: SteeringParams) -> Self {
        Self {
            params,
            mode: UpdateMode::Snapshot,
            seed: 0,
            population: None,
        }
    }

    /// Choose the per-tick update strategy.
    pub fn mode(mut self, mode: UpdateMode) -> Self {
        self.mode = mode;
        self
    }

    /// Seed the scatter RNG.  The same seed always produces the same
    /// initial layout.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Scatter `count` agents uniformly inside `bounds` at build time.
    /// `bounds` is validated at its own construction; nothing can fail here.
    pub fn populate(mut self, count: usize, bounds: Bounds<V>) -> Self {
        self.population = Some((count, bounds));
        self
    }

    pub fn build(self) -> Flock<V> {
        let mut flock = Flock::with_parts(self.params, self.mode, FlockRng::new(self.seed));
        if let Some((count, bounds)) = self.population {
            flock.repopulate(count, bounds);
        }
        flock
    }
}
