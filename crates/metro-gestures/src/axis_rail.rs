//! Axis rail: a continuous filter that keeps a drag on one cardinal axis.
//!
//! Unlike [`GestureState`](crate::GestureState), whose classification is
//! write-once, a rail may flip to the other axis when the cumulative drag
//! turns far enough away from the locked one. Live rubber-banding surfaces
//! feed raw per-frame deltas through the rail and apply the returned
//! movement directly to their scroll offsets.

use crate::{Axis, GestureSpec};

/// A per-frame delta after rail filtering.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Movement {
    pub x: f32,
    pub y: f32,
}

impl Movement {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The component along `axis`.
    pub fn along(&self, axis: Axis) -> f32 {
        axis.select(self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct AxisRailState {
    locked: Option<Axis>,
    total_dx: f32,
    total_dy: f32,
}

impl AxisRailState {
    /// A fresh, unlocked rail.
    pub const fn new() -> Self {
        Self {
            locked: None,
            total_dx: 0.0,
            total_dy: 0.0,
        }
    }

    /// Returns a fresh rail. Call at the end of every gesture.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self::new()
    }

    /// Feeds one delta through the rail with the default thresholds.
    #[must_use]
    pub fn feed(&self, dx: f32, dy: f32) -> (Movement, Self) {
        self.feed_with(dx, dy, &GestureSpec::default())
    }

    /// Feeds one delta through the rail.
    ///
    /// The delta is filtered by the lock in force when it arrives: it passes
    /// through untouched while the rail is unlocked, and loses its
    /// perpendicular component once locked. The accumulated totals then
    /// decide the lock for the next delta.
    #[must_use]
    pub fn feed_with(&self, dx: f32, dy: f32, spec: &GestureSpec) -> (Movement, Self) {
        let movement = match self.locked {
            None => Movement::new(dx, dy),
            Some(Axis::Horizontal) => Movement::new(dx, 0.0),
            Some(Axis::Vertical) => Movement::new(0.0, dy),
        };

        let total_dx = self.total_dx + dx;
        let total_dy = self.total_dy + dy;
        let locked = match self.locked {
            None => initial_lock(total_dx, total_dy, spec),
            Some(axis) => Some(relock(axis, total_dx, total_dy, spec)),
        };

        (
            movement,
            Self {
                locked,
                total_dx,
                total_dy,
            },
        )
    }

    /// The axis the rail is locked to, if any.
    pub fn locked(&self) -> Option<Axis> {
        self.locked
    }

    pub fn is_locked(&self) -> bool {
        self.locked.is_some()
    }

    /// Cumulative horizontal displacement since the rail was created.
    pub fn total_dx(&self) -> f32 {
        self.total_dx
    }

    /// Cumulative vertical displacement since the rail was created.
    pub fn total_dy(&self) -> f32 {
        self.total_dy
    }
}

fn initial_lock(total_dx: f32, total_dy: f32, spec: &GestureSpec) -> Option<Axis> {
    if total_dx.hypot(total_dy) <= spec.threshold {
        return None;
    }
    let axis = if total_dx.abs() > total_dy.abs() {
        Axis::Horizontal
    } else {
        Axis::Vertical
    };
    log::trace!("axis rail locked to {:?}", axis);
    Some(axis)
}

fn relock(axis: Axis, total_dx: f32, total_dy: f32, spec: &GestureSpec) -> Axis {
    // Angle of the cumulative drag above the x axis, in 0..=90 degrees.
    let angle = total_dy.abs().atan2(total_dx.abs()).to_degrees();
    let flipped = match axis {
        Axis::Horizontal => angle > spec.axis_lock_angle,
        Axis::Vertical => 90.0 - angle > spec.axis_lock_angle,
    };
    if flipped {
        let next = axis.cross_axis();
        log::trace!("axis rail flipped to {:?} at {:.1} degrees", next, angle);
        next
    } else {
        axis
    }
}

#[cfg(test)]
#[path = "tests/axis_rail_tests.rs"]
mod tests;
