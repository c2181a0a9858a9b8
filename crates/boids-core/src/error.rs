//! Engine error type.
//!
//! The tick path is infallible by construction — degenerate geometry
//! collapses to the zero vector and unknown reconfiguration keys are
//! ignored — so errors only arise at construction time, from inputs the
//! type system cannot rule out (e.g. an inverted scatter extent).

use thiserror::Error;

/// The error type shared by `boids-core` and `boids-sim`.
#[derive(Debug, Error)]
pub enum BoidsError {
    #[error("scatter bounds invalid on axis {axis}: min {min} must be finite and <= max {max}")]
    InvalidBounds { axis: usize, min: f32, max: f32 },
}

/// Shorthand result type for both `boids-*` crates.
pub type BoidsResult<T> = Result<T, BoidsError>;
