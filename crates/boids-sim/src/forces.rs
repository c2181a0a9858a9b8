//! Neighbor aggregation — the core steering algorithm.
//!
//! One pass over the peer list accumulates three sums (alignment velocities,
//! cohesion positions, distance-biased separation directions), each with its
//! own counter and its own radius.  The pass then turns each mean into a
//! bounded steering force.
//!
//! # Contract details that matter
//!
//! - Thresholds are strict: a peer at exactly the radius does not count.
//! - Peers at distance zero (exact coincidence, including the agent itself
//!   when the full list is passed in) never count toward any sum.
//! - Separation contributions are `normalize(self − peer) / d`, not pure
//!   unit vectors: closer peers push harder.
//! - [`steer_to`] uses the `velocity − desired` convention.  This is
//!   inverted relative to the canonical steering formulation, and the force
//!   combination in [`Boid`][crate::Boid] depends on it (the home force is
//!   *subtracted* from the acceleration).  Verified against the observed
//!   group behavior; do not "fix" the sign in isolation.

use boids_core::{SteeringParams, Vector};

/// A position/velocity pair — the read-only view of one agent that the
/// aggregation pass consumes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentSnapshot<V: Vector> {
    pub position: V,
    pub velocity: V,
}

/// The three neighbor-derived forces for one agent, unweighted.
///
/// Invariant: each component has magnitude `<= max_force`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SteeringForces<V: Vector> {
    pub separation: V,
    pub alignment: V,
    pub cohesion: V,
}

impl<V: Vector> SteeringForces<V> {
    pub fn zero() -> Self {
        Self {
            separation: V::zero(),
            alignment: V::zero(),
            cohesion: V::zero(),
        }
    }
}

/// Steering force toward `target`: the desired heading is
/// `(target − position)` rescaled to `max_speed`, and the returned force is
/// `velocity − desired`, clamped to `max_force`.
///
/// Used for cohesion (toward the neighborhood centroid) and for the home
/// return force (toward the origin).
pub fn steer_to<V: Vector>(
    position: V,
    velocity: V,
    target: V,
    max_speed: f32,
    max_force: f32,
) -> V {
    let desired = (target - position).set_length(max_speed);
    (velocity - desired).clamp_length(0.0, max_force)
}

/// Run the aggregation pass for one agent over `peers` (the full agent
/// list — the agent itself is excluded by the zero-distance rule).
///
/// Over zero peers, all three forces are the zero vector.
pub fn aggregate<V: Vector>(
    position: V,
    velocity: V,
    params: &SteeringParams,
    peers: impl Iterator<Item = AgentSnapshot<V>>,
) -> SteeringForces<V> {
    let mut separation_sum = V::zero();
    let mut alignment_sum = V::zero();
    let mut cohesion_sum = V::zero();
    let mut separation_count: u32 = 0;
    let mut alignment_count: u32 = 0;
    let mut cohesion_count: u32 = 0;

    for peer in peers {
        let d = position.distance_to(peer.position);
        if d == 0.0 {
            continue;
        }
        if d < params.align_dist {
            alignment_sum += peer.velocity;
            alignment_count += 1;
        }
        if d < params.cohesion_dist {
            cohesion_sum += peer.position;
            cohesion_count += 1;
        }
        if d < params.separation_dist {
            // Unit direction away from the peer, biased by 1/d so closer
            // peers dominate the mean.
            separation_sum += (position - peer.position).normalize().div(d);
            separation_count += 1;
        }
    }

    let alignment = if alignment_count > 0 {
        let mean = alignment_sum.div(alignment_count as f32);
        (mean.set_length(params.max_speed) - velocity).clamp_length(0.0, params.max_force)
    } else {
        V::zero()
    };

    let cohesion = if cohesion_count > 0 {
        let centroid = cohesion_sum.div(cohesion_count as f32);
        steer_to(position, velocity, centroid, params.max_speed, params.max_force)
    } else {
        V::zero()
    };

    let mut separation = if separation_count > 0 {
        separation_sum.div(separation_count as f32)
    } else {
        separation_sum
    };
    if separation.length_sq() > 0.0 {
        separation =
            (separation.set_length(params.max_speed) - velocity).clamp_length(0.0, params.max_force);
    }

    SteeringForces {
        separation,
        alignment,
        cohesion,
    }
}
