//! Dimension-generic vector arithmetic.
//!
//! All steering math in `boids-sim` is expressed through the [`Vector`]
//! trait, so the same agent and flock code drives both the 2-D and 3-D
//! variants — the dimensionality is chosen once, by picking [`Vec2`] or
//! [`Vec3`] as the flock's type parameter.
//!
//! # Degenerate-geometry policy
//!
//! Only exactly-zero vectors are degenerate: `normalize` and `set_length`
//! return zero for them instead of dividing by a zero length, and `div` by
//! a zero scalar returns zero.  The guard must not widen to an epsilon
//! band — a tiny direction still carries meaning (separation pushes are at
//! their strongest between near-coincident agents), so any non-zero length
//! is rescaled.  Callers in the steering engine only normalize non-zero
//! directions, making these branches a structural backstop, never an error
//! path.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// ── Vector trait ──────────────────────────────────────────────────────────────

/// The arithmetic contract shared by [`Vec2`] and [`Vec3`].
///
/// Required methods cover component access and the dot product; everything
/// else (length, normalize, set-length, clamp-length, …) is derived in
/// provided methods so the two impls stay trivially small.
pub trait Vector:
    Copy
    + fmt::Debug
    + Default
    + PartialEq
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + AddAssign
    + SubAssign
    + Mul<f32, Output = Self>
{
    /// Number of scalar components (2 or 3).
    const DIM: usize;

    /// Build a vector by evaluating `f` for each axis index `0..DIM`.
    fn from_fn(f: impl FnMut(usize) -> f32) -> Self;

    /// The component on `axis` (`0..DIM`).
    ///
    /// # Panics
    /// Panics if `axis >= DIM`.
    fn component(self, axis: usize) -> f32;

    /// Dot product.
    fn dot(self, other: Self) -> f32;

    /// The zero vector.
    #[inline]
    fn zero() -> Self {
        Self::default()
    }

    /// Squared Euclidean length — cheaper than [`length`][Self::length]
    /// when only comparisons are needed.
    #[inline]
    fn length_sq(self) -> f32 {
        self.dot(self)
    }

    /// Euclidean length.
    #[inline]
    fn length(self) -> f32 {
        self.length_sq().sqrt()
    }

    /// Euclidean distance to `other`.
    #[inline]
    fn distance_to(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// Divide by a scalar.  `k == 0` returns the zero vector — the caller
    /// must guard if zero is not a meaningful result.
    #[inline]
    fn div(self, k: f32) -> Self {
        if k == 0.0 {
            Self::zero()
        } else {
            self * (1.0 / k)
        }
    }

    /// Unit vector in the same direction, or zero for a zero vector.
    #[inline]
    fn normalize(self) -> Self {
        self.set_length(1.0)
    }

    /// Rescale to exact magnitude `len`, or zero for a zero vector.
    fn set_length(self, len: f32) -> Self {
        let len_sq = self.length_sq();
        if len_sq == 0.0 {
            return Self::zero();
        }
        self * (len / len_sq.sqrt())
    }

    /// Constrain the magnitude to `[min, max]`: vectors longer than `max`
    /// are capped, non-zero vectors shorter than `min` are raised.  The
    /// steering engine always passes `min = 0`, making this a pure cap.
    fn clamp_length(self, min: f32, max: f32) -> Self {
        let len_sq = self.length_sq();
        if len_sq > max * max {
            return self.set_length(max);
        }
        if len_sq < min * min && len_sq > 0.0 {
            return self.set_length(min);
        }
        self
    }
}

// ── Vec2 ──────────────────────────────────────────────────────────────────────

/// A 2-D vector of `f32` components.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, k: f32) -> Vec2 {
        Vec2::new(self.x * k, self.y * k)
    }
}

impl Vector for Vec2 {
    const DIM: usize = 2;

    #[inline]
    fn from_fn(mut f: impl FnMut(usize) -> f32) -> Self {
        Vec2::new(f(0), f(1))
    }

    #[inline]
    fn component(self, axis: usize) -> f32 {
        match axis {
            0 => self.x,
            1 => self.y,
            _ => panic!("Vec2 has no axis {axis}"),
        }
    }

    #[inline]
    fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

// ── Vec3 ──────────────────────────────────────────────────────────────────────

/// A 3-D vector of `f32` components.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec3) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, k: f32) -> Vec3 {
        Vec3::new(self.x * k, self.y * k, self.z * k)
    }
}

impl Vector for Vec3 {
    const DIM: usize = 3;

    #[inline]
    fn from_fn(mut f: impl FnMut(usize) -> f32) -> Self {
        Vec3::new(f(0), f(1), f(2))
    }

    #[inline]
    fn component(self, axis: usize) -> f32 {
        match axis {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => panic!("Vec3 has no axis {axis}"),
        }
    }

    #[inline]
    fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}
