//! Free-running momentum after a fling.

use crate::physics_constants::{INERTIA_FRICTION, INERTIA_MIN_VELOCITY};

/// A 1-D inertia simulation with exponential velocity decay.
///
/// `is_moving()` is false exactly when the speed is at or below
/// [`INERTIA_MIN_VELOCITY`]. A stopped state has a velocity of exactly zero
/// and stepping it returns it unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InertiaState {
    velocity: f32,
    position: f32,
    moving: bool,
}

impl InertiaState {
    /// Starts coasting from `position` at `velocity` pixels per frame.
    pub fn new(velocity: f32, position: f32) -> Self {
        let moving = velocity.abs() > INERTIA_MIN_VELOCITY;
        Self {
            velocity,
            position,
            moving,
        }
    }

    /// Starts coasting from the origin.
    pub fn from_velocity(velocity: f32) -> Self {
        Self::new(velocity, 0.0)
    }

    /// Advances one frame with the default friction.
    #[must_use]
    pub fn step(&self) -> Self {
        self.step_with(INERTIA_FRICTION)
    }

    /// Advances one frame, multiplying the velocity by `friction`.
    #[must_use]
    pub fn step_with(&self, friction: f32) -> Self {
        if !self.moving {
            return *self;
        }

        let velocity = self.velocity * friction;
        let position = self.position + velocity;
        let moving = velocity.abs() > INERTIA_MIN_VELOCITY;
        if !moving {
            log::trace!("inertia stopped at {:.2}", position);
        }

        Self {
            velocity: if moving { velocity } else { 0.0 },
            position,
            moving,
        }
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }
}

/// Predicts how far a fling at `velocity` will coast with the default friction.
pub fn predict_inertia_distance(velocity: f32) -> f32 {
    predict_inertia_distance_with(velocity, INERTIA_FRICTION)
}

/// Predicts how far a fling at `velocity` will coast.
///
/// This is the sum of the infinite geometric series `v·f + v·f² + …`. It
/// ignores the minimum-velocity cutoff, so the real simulation always stops
/// slightly short of the prediction. Snap-target logic built on it already
/// accounts for the overestimate; keep it an upper bound.
pub fn predict_inertia_distance_with(velocity: f32, friction: f32) -> f32 {
    if velocity.abs() < INERTIA_MIN_VELOCITY {
        return 0.0;
    }
    velocity * friction / (1.0 - friction)
}

#[cfg(test)]
#[path = "tests/inertia_tests.rs"]
mod tests;
