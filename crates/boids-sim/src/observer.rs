//! Tick observer trait for headless drivers, recorders, and tests.

use boids_core::{Tick, Vector};

use crate::boid::Boid;

/// Callbacks invoked by [`Flock::run_ticks`][crate::Flock::run_ticks] at
/// tick boundaries.
///
/// Both methods have default no-op implementations, so implementors only
/// override what they care about.
///
/// # Example — speed histogram sampler
///
/// ```rust,ignore
/// struct SpeedSampler { samples: Vec<f32> }
///
/// impl FlockObserver<Vec3> for SpeedSampler {
///     fn on_tick_end(&mut self, _tick: Tick, boids: &[Boid<Vec3>]) {
///         self.samples.extend(boids.iter().map(Boid::speed));
///     }
/// }
/// ```
pub trait FlockObserver<V: Vector> {
    /// Called immediately before the tick runs.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the tick completes, with read-only access to the
    /// updated agents.  `tick` is the tick that just ran.
    fn on_tick_end(&mut self, _tick: Tick, _boids: &[Boid<V>]) {}
}

/// A [`FlockObserver`] that does nothing.  Use when calling `run_ticks`
/// without needing callbacks.
pub struct NoopObserver;

impl<V: Vector> FlockObserver<V> for NoopObserver {}
