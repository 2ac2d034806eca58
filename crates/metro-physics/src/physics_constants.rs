//! Tuning constants for the Metro motion feel.
//!
//! These are empirical. They are preserved exactly; hosts that want a
//! different feel pass their own values through `InertiaSpec` and `BoundarySpringSpec`.

/// Per-frame velocity multiplier while coasting after a fling.
pub const INERTIA_FRICTION: f32 = 0.97;

/// Speed in pixels per frame at or below which inertia stops.
pub const INERTIA_MIN_VELOCITY: f32 = 0.5;

/// Pull of the boundary spring toward its resting point.
pub const SPRING_STIFFNESS: f32 = 0.1;

/// Velocity damping of the boundary spring.
pub const SPRING_DAMPING: f32 = 0.7;

/// Fraction of a past-the-boundary drag that actually moves content.
pub const BOUNDARY_RESISTANCE: f32 = 0.4;

/// Position and velocity magnitude below which a spring has settled.
pub const SPRING_REST_THRESHOLD: f32 = 0.5;
