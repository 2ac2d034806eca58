//! Rubber-band behaviour at scroll boundaries.
//!
//! While a drag is past a boundary, [`compress_boundary`] shrinks how far the
//! content follows the finger. Once released, a [`SpringState`] pulls the
//! overscroll back to the boundary, stepping a damped harmonic oscillator
//! once per frame.

use crate::physics_constants::{
    BOUNDARY_RESISTANCE, SPRING_DAMPING, SPRING_REST_THRESHOLD, SPRING_STIFFNESS,
};

/// Scales a past-the-boundary drag by the default resistance.
pub fn compress_boundary(overscroll: f32) -> f32 {
    compress_boundary_with(overscroll, BOUNDARY_RESISTANCE)
}

/// Scales a past-the-boundary drag by `resistance`.
///
/// Called every drag frame; sign is preserved.
pub fn compress_boundary_with(overscroll: f32, resistance: f32) -> f32 {
    overscroll * resistance
}

/// A 1-D spring pulling `position` toward zero.
///
/// Positions are relative to the boundary the spring returns to. The spring
/// is settled when both position and velocity are below
/// [`SPRING_REST_THRESHOLD`] in magnitude; a settled spring has both fields
/// at exactly zero and stepping it returns it unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringState {
    position: f32,
    velocity: f32,
    settled: bool,
}

impl SpringState {
    const SETTLED: Self = Self {
        position: 0.0,
        velocity: 0.0,
        settled: true,
    };

    /// Starts a spring `position` pixels past its boundary.
    ///
    /// A state that starts inside the rest threshold is settled at zero.
    pub fn new(position: f32, velocity: f32) -> Self {
        if is_at_rest(position, velocity) {
            return Self::SETTLED;
        }
        Self {
            position,
            velocity,
            settled: false,
        }
    }

    /// Starts a spring from rest at `position`.
    pub fn at(position: f32) -> Self {
        Self::new(position, 0.0)
    }

    /// Advances one frame with the default stiffness and damping.
    #[must_use]
    pub fn step(&self) -> Self {
        self.step_with(SPRING_STIFFNESS, SPRING_DAMPING)
    }

    /// Advances one frame of damped harmonic motion.
    #[must_use]
    pub fn step_with(&self, stiffness: f32, damping: f32) -> Self {
        if self.settled {
            return *self;
        }

        let acceleration = -stiffness * self.position - damping * self.velocity;
        let velocity = self.velocity + acceleration;
        let position = self.position + velocity;

        if is_at_rest(position, velocity) {
            log::trace!("spring settled");
            return Self::SETTLED;
        }

        Self {
            position,
            velocity,
            settled: false,
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }
}

fn is_at_rest(position: f32, velocity: f32) -> bool {
    position.abs() < SPRING_REST_THRESHOLD && velocity.abs() < SPRING_REST_THRESHOLD
}

#[cfg(test)]
#[path = "tests/spring_tests.rs"]
mod tests;
