//! Shared gesture constants for consistent touch/pointer handling.
//!
//! The scroll viewer, panorama and flip-view all disambiguate gestures with
//! the same thresholds so a drag that scrolls one surface never taps another.
//!
//! # DPI Considerations
//!
//! These values are in logical (CSS) pixels. They are tuned for feel rather
//! than derived; hosts that need different values override them through
//! [`GestureSpec`](crate::GestureSpec) instead of editing the constants.

/// Movement threshold in logical pixels.
///
/// Until the pointer has travelled this far from where it went down the
/// gesture stays unresolved and would be reported as a tap. The axis rail
/// uses the same distance before it locks.
pub const GESTURE_THRESHOLD: f32 = 10.0;

/// Perpendicular movement that turns a horizontal drag into a cross-slide.
///
/// Only horizontal drags have a cross-slide variant.
pub const CROSS_SLIDE_THRESHOLD: f32 = 10.0;

/// Angle in degrees past which a locked axis rail flips to the other axis.
pub const AXIS_LOCK_ANGLE: f32 = 30.0;

/// Length of the trailing sample window used for velocity estimation.
pub const MAX_VELOCITY_SAMPLES: usize = 5;

/// Duration of one animation frame in milliseconds.
///
/// Velocities are reported in pixels per frame of this length regardless of
/// the actual spacing of the pointer samples.
pub const FRAME_MS: f64 = 16.67;
