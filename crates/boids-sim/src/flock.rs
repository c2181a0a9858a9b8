//! The `Flock` — population owner and tick-loop driver.

use boids_core::{Bounds, FlockRng, ParamUpdate, SteeringParams, Tick, Vector};

use crate::boid::Boid;
use crate::forces::{self, AgentSnapshot};
use crate::observer::FlockObserver;

// ── UpdateMode ────────────────────────────────────────────────────────────────

/// How peer state is read during one tick.
///
/// The two modes produce different (both deterministic) trajectories; the
/// difference is which tick's state an agent's neighbors present.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum UpdateMode {
    /// All positions/velocities are copied at tick start and every agent
    /// reads that snapshot: order-independent, symmetric interactions.
    /// The default.
    #[default]
    Snapshot,

    /// Agents are updated in collection order, in place: later agents see
    /// already-updated state of earlier agents within the same tick.  This
    /// reproduces the legacy sequential behavior exactly; the interaction
    /// model is order-dependent and non-symmetric.
    InPlace,
}

// ── RenderState ───────────────────────────────────────────────────────────────

/// Per-agent read-out for an external renderer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderState<V: Vector> {
    pub position: V,
    /// `normalize(velocity)`; the zero vector for a stationary agent.
    pub facing: V,
}

// ── Flock ─────────────────────────────────────────────────────────────────────

/// An ordered collection of [`Boid`]s plus the per-tick update strategy.
///
/// The collection order is stable and significant: in
/// [`UpdateMode::InPlace`] it determines which agents see already-updated
/// peers within a tick.  `repopulate` preserves scatter order (agent `i` is
/// the `i`-th draw from the seeded RNG).
///
/// Create via [`FlockBuilder`][crate::FlockBuilder], or [`Flock::new`] for
/// an empty flock with defaults.
pub struct Flock<V: Vector> {
    boids: Vec<Boid<V>>,
    params: SteeringParams,
    mode: UpdateMode,
    rng: FlockRng,
    tick: Tick,
}

impl<V: Vector> Flock<V> {
    /// An empty flock: snapshot mode, seed 0.
    pub fn new(params: SteeringParams) -> Self {
        Self::with_parts(params, UpdateMode::Snapshot, FlockRng::new(0))
    }

    pub(crate) fn with_parts(params: SteeringParams, mode: UpdateMode, rng: FlockRng) -> Self {
        Self {
            boids: Vec::new(),
            params,
            mode,
            rng,
            tick: Tick::ZERO,
        }
    }

    // ── Tick entry points ─────────────────────────────────────────────────

    /// Advance every agent by one fixed step.  Motion speed is tied to call
    /// frequency; callers wanting frame-rate-independent stepping use
    /// [`advance_dt`][Self::advance_dt].
    pub fn advance(&mut self) {
        self.advance_dt(1.0);
    }

    /// Advance every agent by one step scaled by `dt`.  `dt = 1.0` is
    /// bit-identical to [`advance`][Self::advance].
    pub fn advance_dt(&mut self, dt: f32) {
        match self.mode {
            UpdateMode::Snapshot => self.advance_snapshot(dt),
            UpdateMode::InPlace => self.advance_in_place(dt),
        }
        self.tick = self.tick + 1;
    }

    /// Run `n` fixed-step ticks, invoking observer hooks at each boundary.
    pub fn run_ticks<O: FlockObserver<V>>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            let now = self.tick;
            observer.on_tick_start(now);
            self.advance();
            observer.on_tick_end(now, &self.boids);
        }
    }

    /// Snapshot mode: produce forces from the tick-start state, then apply.
    ///
    /// With the `parallel` feature the produce half runs on Rayon's thread
    /// pool — every worker reads the same immutable snapshot, and all
    /// writes happen in the sequential apply half, so results are identical
    /// to the single-threaded path.
    fn advance_snapshot(&mut self, dt: f32) {
        let snapshot: Vec<AgentSnapshot<V>> = self.boids.iter().map(Boid::snapshot).collect();

        #[cfg(not(feature = "parallel"))]
        {
            for boid in &mut self.boids {
                boid.tick(&snapshot, dt);
            }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let computed: Vec<_> = self
                .boids
                .par_iter()
                .map(|b| {
                    forces::aggregate(b.position, b.velocity, &b.params, snapshot.iter().copied())
                })
                .collect();
            for (boid, f) in self.boids.iter_mut().zip(computed) {
                boid.apply(f, dt);
            }
        }
    }

    /// In-place mode: each agent reads the live peer list at the moment it
    /// runs.  Sequential by necessity — the agent-order data dependency is
    /// the observable behavior being reproduced.
    fn advance_in_place(&mut self, dt: f32) {
        for i in 0..self.boids.len() {
            let b = &self.boids[i];
            let f = forces::aggregate(
                b.position,
                b.velocity,
                &b.params,
                self.boids.iter().map(Boid::snapshot),
            );
            self.boids[i].apply(f, dt);
        }
    }

    // ── Population control ────────────────────────────────────────────────

    /// Discard the current population and scatter `count` fresh stationary
    /// agents uniformly inside `bounds`, each carrying the flock's current
    /// parameter set.  `count = 0` yields an empty flock; advancing an
    /// empty flock is a no-op.
    pub fn repopulate(&mut self, count: usize, bounds: Bounds<V>) {
        self.boids.clear();
        self.boids.reserve(count);
        for _ in 0..count {
            self.boids
                .push(Boid::new(bounds.sample(&mut self.rng), self.params));
        }
    }

    /// Append one agent at an exact position/velocity (manual placement).
    pub fn push(&mut self, boid: Boid<V>) {
        self.boids.push(boid);
    }

    /// Remove all agents.
    pub fn clear(&mut self) {
        self.boids.clear();
    }

    // ── Reconfiguration ───────────────────────────────────────────────────

    /// Whitelist-merge a sparse parameter update onto every agent and onto
    /// the flock's own parameter set (used for future repopulation).
    /// Fields absent from `update` are untouched; there is nothing to
    /// reject, so this never fails.
    pub fn reconfigure(&mut self, update: &ParamUpdate) {
        update.apply_to(&mut self.params);
        for boid in &mut self.boids {
            update.apply_to(&mut boid.params);
        }
    }

    /// Switch the per-tick update strategy.  Takes effect from the next
    /// `advance` call.
    pub fn set_mode(&mut self, mode: UpdateMode) {
        self.mode = mode;
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    pub fn boids(&self) -> &[Boid<V>] {
        &self.boids
    }

    /// Mutable access for drivers that reposition agents directly.
    pub fn boids_mut(&mut self) -> &mut [Boid<V>] {
        &mut self.boids
    }

    pub fn params(&self) -> &SteeringParams {
        &self.params
    }

    pub fn mode(&self) -> UpdateMode {
        self.mode
    }

    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    /// Read-only per-agent `(position, facing)` projection for renderers.
    pub fn render_states(&self) -> impl Iterator<Item = RenderState<V>> + '_ {
        self.boids.iter().map(|b| RenderState {
            position: b.position,
            facing: b.facing(),
        })
    }
}
