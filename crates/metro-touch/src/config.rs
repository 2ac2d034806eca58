use metro_gestures::{GestureSpec, GestureSpecError};
use metro_physics::{BoundarySpringSpec, InertiaSpec, PhysicsSpecError};

/// Every tunable of a touch surface in one place.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchPhysicsConfig {
    /// Gesture and axis-rail thresholds.
    pub gesture: GestureSpec,
    /// Coasting after a fling.
    pub inertia: InertiaSpec,
    /// Rubber-banding at the scroll bounds.
    pub spring: BoundarySpringSpec,
}

impl TouchPhysicsConfig {
    /// The configuration every Metro surface ships with.
    pub const fn metro() -> Self {
        Self {
            gesture: GestureSpec::metro(),
            inertia: InertiaSpec::metro(),
            spring: BoundarySpringSpec::metro(),
        }
    }

    /// Replaces the inertia settings.
    pub fn with_inertia(mut self, inertia: InertiaSpec) -> Self {
        self.inertia = inertia;
        self
    }

    /// Replaces the boundary spring settings.
    pub fn with_spring(mut self, spring: BoundarySpringSpec) -> Self {
        self.spring = spring;
        self
    }

    /// Replaces the gesture thresholds.
    pub fn with_gesture(mut self, gesture: GestureSpec) -> Self {
        self.gesture = gesture;
        self
    }

    /// Checks every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gesture.validate()?;
        self.inertia.validate()?;
        self.spring.validate()?;
        Ok(())
    }
}

/// A touch surface was configured with values it cannot run with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// A gesture threshold is out of range.
    Gesture(GestureSpecError),
    /// An inertia or spring parameter is out of range.
    Physics(PhysicsSpecError),
    /// Scroll bounds are not finite or are inverted.
    Bounds {
        /// Requested lower bound.
        min: f32,
        /// Requested upper bound.
        max: f32,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Gesture(err) => write!(f, "invalid gesture config: {err}"),
            ConfigError::Physics(err) => write!(f, "invalid physics config: {err}"),
            ConfigError::Bounds { min, max } => {
                write!(f, "scroll bounds [{min}, {max}] must be finite with min <= max")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Gesture(err) => Some(err),
            ConfigError::Physics(err) => Some(err),
            ConfigError::Bounds { .. } => None,
        }
    }
}

impl From<GestureSpecError> for ConfigError {
    fn from(err: GestureSpecError) -> Self {
        ConfigError::Gesture(err)
    }
}

impl From<PhysicsSpecError> for ConfigError {
    fn from(err: PhysicsSpecError) -> Self {
        ConfigError::Physics(err)
    }
}
