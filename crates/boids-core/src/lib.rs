//! `boids-core` — foundational types for the `rust_boids` flocking engine.
//!
//! This crate holds everything the steering engine (`boids-sim`) builds on,
//! and intentionally has minimal external dependencies (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`vector`]  | `Vector` trait, `Vec2`, `Vec3`                        |
//! | [`params`]  | `SteeringParams`, `ParamUpdate` (whitelist merge)     |
//! | [`bounds`]  | `Bounds` scatter extent                               |
//! | [`rng`]     | `FlockRng` (seeded, reproducible scatter)             |
//! | [`tick`]    | `Tick` counter                                        |
//! | [`error`]   | `BoidsError`, `BoidsResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.      |

pub mod bounds;
pub mod error;
pub mod params;
pub mod rng;
pub mod tick;
pub mod vector;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bounds::Bounds;
pub use error::{BoidsError, BoidsResult};
pub use params::{ParamUpdate, SteeringParams};
pub use rng::FlockRng;
pub use tick::Tick;
pub use vector::{Vec2, Vec3, Vector};
