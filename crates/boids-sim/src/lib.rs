//! `boids-sim` — the steering-behavior flocking engine.
//!
//! Each agent independently derives a steering acceleration every tick from
//! the positions and velocities of nearby peers — alignment, cohesion,
//! separation — plus a soft constraint pulling strays back toward a home
//! region around the origin.  The engine is single-threaded and synchronous
//! by default; one [`Flock::advance`] call updates every agent and returns.
//!
//! # Two-phase tick (snapshot mode, the default)
//!
//! ```text
//! advance():
//!   ① Snapshot — copy every agent's (position, velocity).
//!   ② Produce  — for each agent, one O(n) aggregation pass over the
//!                snapshot yields its three bounded steering forces
//!                (parallel with the `parallel` feature).
//!   ③ Apply    — weight and sum forces, add the home constraint,
//!                integrate velocity (speed-capped) and position,
//!                reset the accumulator.
//! ```
//!
//! [`UpdateMode::InPlace`] collapses ①–③ into one sequential in-order pass
//! where each agent reads live peer state — the legacy order-dependent
//! behavior, kept behind an explicit mode switch.
//!
//! # Crate layout
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`forces`]   | `aggregate` (neighbor pass), `steer_to`, `SteeringForces`, `AgentSnapshot` |
//! | [`boid`]     | `Boid<V>` — per-agent state and tick transition       |
//! | [`flock`]    | `Flock<V>`, `UpdateMode`, `RenderState`               |
//! | [`builder`]  | `FlockBuilder<V>`                                     |
//! | [`observer`] | `FlockObserver`, `NoopObserver`                       |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Snapshot-mode force phase runs on Rayon's thread pool.  |
//! | `serde`    | Serde derives on the boids-core value types.            |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use boids_core::{Bounds, SteeringParams, Vec3};
//! use boids_sim::FlockBuilder;
//!
//! let mut flock = FlockBuilder::<Vec3>::new(SteeringParams::fine_3d())
//!     .seed(42)
//!     .populate(60, Bounds::centered(0.5))
//!     .build();
//!
//! loop {
//!     flock.advance();
//!     for state in flock.render_states() {
//!         // hand (state.position, state.facing) to the renderer
//!     }
//! }
//! ```

pub mod boid;
pub mod builder;
pub mod flock;
pub mod forces;
pub mod observer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use boid::Boid;
pub use builder::FlockBuilder;
pub use flock::{Flock, RenderState, UpdateMode};
pub use forces::{AgentSnapshot, SteeringForces, aggregate, steer_to};
pub use observer::{FlockObserver, NoopObserver};

pub use boids_core::{
    Bounds, BoidsError, BoidsResult, FlockRng, ParamUpdate, SteeringParams, Tick, Vec2, Vec3,
    Vector,
};
