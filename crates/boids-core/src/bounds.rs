//! Axis-aligned scatter extents for flock population.

use crate::error::{BoidsError, BoidsResult};
use crate::rng::FlockRng;
use crate::vector::Vector;

/// An axis-aligned box from which initial agent positions are drawn.
///
/// Validated at construction: every axis must satisfy `min <= max` with
/// finite endpoints.  A zero-extent axis (`min == max`) is allowed and
/// pins that coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds<V: Vector> {
    min: V,
    max: V,
}

impl<V: Vector> Bounds<V> {
    /// Create a bounds box, validating each axis.
    pub fn new(min: V, max: V) -> BoidsResult<Self> {
        for axis in 0..V::DIM {
            let lo = min.component(axis);
            let hi = max.component(axis);
            if !lo.is_finite() || !hi.is_finite() || lo > hi {
                return Err(BoidsError::InvalidBounds { axis, min: lo, max: hi });
            }
        }
        Ok(Self { min, max })
    }

    /// A box centered on the origin spanning `±half_extent` on every axis.
    ///
    /// # Panics
    /// Panics if `half_extent` is negative or non-finite.
    pub fn centered(half_extent: f32) -> Self {
        Self::new(
            V::from_fn(|_| -half_extent),
            V::from_fn(|_| half_extent),
        )
        .expect("half_extent must be finite and non-negative")
    }

    pub fn min(&self) -> V {
        self.min
    }

    pub fn max(&self) -> V {
        self.max
    }

    /// Draw a position uniformly from the box — the reference scatter
    /// distribution for `repopulate`.
    pub fn sample(&self, rng: &mut FlockRng) -> V {
        V::from_fn(|axis| {
            let lo = self.min.component(axis);
            let hi = self.max.component(axis);
            if lo == hi {
                lo
            } else {
                rng.gen_range(lo..hi)
            }
        })
    }

    /// `true` if `point` lies inside the box (inclusive on both faces).
    pub fn contains(&self, point: V) -> bool {
        (0..V::DIM).all(|axis| {
            let c = point.component(axis);
            c >= self.min.component(axis) && c <= self.max.component(axis)
        })
    }
}
