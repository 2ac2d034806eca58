use crate::physics_constants::{
    BOUNDARY_RESISTANCE, INERTIA_FRICTION, SPRING_DAMPING, SPRING_STIFFNESS,
};
use crate::{
    compress_boundary_with, predict_inertia_distance_with, InertiaState, SpringState,
};

/// Inertia configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InertiaSpec {
    /// Per-frame velocity multiplier, in `(0, 1)`.
    pub friction: f32,
}

impl InertiaSpec {
    /// The Metro coasting feel.
    pub const fn metro() -> Self {
        Self {
            friction: INERTIA_FRICTION,
        }
    }

    /// Coasts further before stopping.
    pub const fn glide() -> Self {
        Self { friction: 0.985 }
    }

    /// Stops quickly; for short lists and pickers.
    pub const fn brake() -> Self {
        Self { friction: 0.9 }
    }

    pub fn step(&self, state: &InertiaState) -> InertiaState {
        state.step_with(self.friction)
    }

    pub fn predict_distance(&self, velocity: f32) -> f32 {
        predict_inertia_distance_with(velocity, self.friction)
    }

    pub fn validate(&self) -> Result<(), PhysicsSpecError> {
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(PhysicsSpecError::Friction {
                value: self.friction,
            });
        }
        Ok(())
    }
}

impl Default for InertiaSpec {
    fn default() -> Self {
        Self::metro()
    }
}

/// Boundary spring and drag resistance configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundarySpringSpec {
    pub stiffness: f32,
    pub damping: f32,
    /// Fraction of an overscrolling drag that moves content, in `(0, 1]`.
    pub resistance: f32,
}

impl BoundarySpringSpec {
    /// The Metro rubber-band feel.
    pub const fn metro() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            resistance: BOUNDARY_RESISTANCE,
        }
    }

    pub fn step(&self, state: &SpringState) -> SpringState {
        state.step_with(self.stiffness, self.damping)
    }

    pub fn compress(&self, overscroll: f32) -> f32 {
        compress_boundary_with(overscroll, self.resistance)
    }

    /// Inverse of [`compress`](Self::compress): the drag distance that
    /// produced a visible overscroll.
    pub fn decompress(&self, visible_overscroll: f32) -> f32 {
        visible_overscroll / self.resistance
    }

    pub fn validate(&self) -> Result<(), PhysicsSpecError> {
        if !(self.stiffness > 0.0 && self.stiffness.is_finite()) {
            return Err(PhysicsSpecError::Stiffness {
                value: self.stiffness,
            });
        }
        if !(self.damping >= 0.0 && self.damping < 1.0) {
            return Err(PhysicsSpecError::Damping {
                value: self.damping,
            });
        }
        if !(self.resistance > 0.0 && self.resistance <= 1.0) {
            return Err(PhysicsSpecError::Resistance {
                value: self.resistance,
            });
        }
        Ok(())
    }
}

impl Default for BoundarySpringSpec {
    fn default() -> Self {
        Self::metro()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhysicsSpecError {
    Friction { value: f32 },
    Stiffness { value: f32 },
    Damping { value: f32 },
    Resistance { value: f32 },
}

impl std::fmt::Display for PhysicsSpecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhysicsSpecError::Friction { value } => {
                write!(f, "inertia friction {value} must lie strictly between 0 and 1")
            }
            PhysicsSpecError::Stiffness { value } => {
                write!(f, "spring stiffness {value} must be finite and positive")
            }
            PhysicsSpecError::Damping { value } => {
                write!(f, "spring damping {value} must lie in [0, 1)")
            }
            PhysicsSpecError::Resistance { value } => {
                write!(f, "boundary resistance {value} must lie in (0, 1]")
            }
        }
    }
}

impl std::error::Error for PhysicsSpecError {}
