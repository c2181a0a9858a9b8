//! The per-agent state and tick transition.

use boids_core::{SteeringParams, Vector};

use crate::forces::{self, AgentSnapshot, SteeringForces};

/// One flocking agent: position, velocity, a transient per-tick
/// acceleration accumulator, and its own copy of the steering parameters.
///
/// The acceleration is always zero between ticks — forces accumulate into
/// it during [`tick`][Self::tick] and it is reset as the final step, so no
/// force ever carries over.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Boid<V: Vector> {
    pub position: V,
    pub velocity: V,
    acceleration: V,
    pub params: SteeringParams,
}

impl<V: Vector> Boid<V> {
    /// A stationary agent at `position`.
    pub fn new(position: V, params: SteeringParams) -> Self {
        Self {
            position,
            velocity: V::zero(),
            acceleration: V::zero(),
            params,
        }
    }

    /// An agent with an initial velocity.
    pub fn with_velocity(position: V, velocity: V, params: SteeringParams) -> Self {
        Self {
            position,
            velocity,
            acceleration: V::zero(),
            params,
        }
    }

    /// The read-only view consumed by peers' aggregation passes.
    #[inline]
    pub fn snapshot(&self) -> AgentSnapshot<V> {
        AgentSnapshot {
            position: self.position,
            velocity: self.velocity,
        }
    }

    /// Current speed (`|velocity|`).  Invariant after every tick:
    /// `speed() <= params.max_speed`.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Facing direction for renderers: `normalize(velocity)`, or the zero
    /// vector for a stationary agent.  A pure read — not part of the
    /// simulated dynamics.
    #[inline]
    pub fn facing(&self) -> V {
        self.velocity.normalize()
    }

    /// One full tick against `peers` (the current agent list, self
    /// included — the aggregation pass skips coincident agents).
    ///
    /// `dt = 1.0` is the reference fixed step.
    pub fn tick(&mut self, peers: &[AgentSnapshot<V>], dt: f32) {
        let forces = forces::aggregate(
            self.position,
            self.velocity,
            &self.params,
            peers.iter().copied(),
        );
        self.apply(forces, dt);
    }

    /// Blend pre-computed forces into the acceleration, add the home
    /// constraint, integrate, and reset the accumulator.
    pub(crate) fn apply(&mut self, forces: SteeringForces<V>, dt: f32) {
        self.acceleration += forces.separation * self.params.separation_weight;
        self.acceleration += forces.alignment * self.params.alignment_weight;
        self.acceleration += forces.cohesion * self.params.cohesion_weight;

        // Corrective pull back toward the origin, active only once the
        // agent has drifted past the home radius.  Subtracted, not added:
        // steer_to returns velocity − desired, so the pull needs the
        // opposite sign.
        if self.position.length() > self.params.home_dist {
            let home = steer_home(self) * self.params.home_weight;
            self.acceleration -= home;
        }

        self.velocity =
            (self.velocity + self.acceleration * dt).clamp_length(0.0, self.params.max_speed);
        self.position += self.velocity * dt;
        self.acceleration = V::zero();
    }
}

fn steer_home<V: Vector>(boid: &Boid<V>) -> V {
    forces::steer_to(
        boid.position,
        boid.velocity,
        V::zero(),
        boid.params.max_speed,
        boid.params.max_force,
    )
}
