use crate::gesture_constants::{AXIS_LOCK_ANGLE, CROSS_SLIDE_THRESHOLD, GESTURE_THRESHOLD};

/// Tunable thresholds for gesture disambiguation and the axis rail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSpec {
    /// Distance in pixels a pointer must travel before a gesture resolves.
    pub threshold: f32,
    /// Perpendicular travel that turns a horizontal drag into a cross-slide.
    pub cross_slide_threshold: f32,
    /// Angle in degrees past which a locked rail flips axis.
    pub axis_lock_angle: f32,
}

impl GestureSpec {
    /// The thresholds every Metro surface ships with.
    pub const fn metro() -> Self {
        Self {
            threshold: GESTURE_THRESHOLD,
            cross_slide_threshold: CROSS_SLIDE_THRESHOLD,
            axis_lock_angle: AXIS_LOCK_ANGLE,
        }
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_cross_slide_threshold(mut self, threshold: f32) -> Self {
        self.cross_slide_threshold = threshold;
        self
    }

    pub fn with_axis_lock_angle(mut self, degrees: f32) -> Self {
        self.axis_lock_angle = degrees;
        self
    }

    /// Checks that every threshold is usable.
    ///
    /// The gesture functions themselves accept any value; this is for hosts
    /// loading thresholds from outside the program.
    pub fn validate(&self) -> Result<(), GestureSpecError> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(GestureSpecError::Threshold {
                value: self.threshold,
            });
        }
        if !self.cross_slide_threshold.is_finite() || self.cross_slide_threshold < 0.0 {
            return Err(GestureSpecError::CrossSlideThreshold {
                value: self.cross_slide_threshold,
            });
        }
        if !(self.axis_lock_angle > 0.0 && self.axis_lock_angle < 90.0) {
            return Err(GestureSpecError::AxisLockAngle {
                value: self.axis_lock_angle,
            });
        }
        Ok(())
    }
}

impl Default for GestureSpec {
    fn default() -> Self {
        Self::metro()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureSpecError {
    Threshold { value: f32 },
    CrossSlideThreshold { value: f32 },
    AxisLockAngle { value: f32 },
}

impl std::fmt::Display for GestureSpecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GestureSpecError::Threshold { value } => {
                write!(f, "gesture threshold {value} must be finite and non-negative")
            }
            GestureSpecError::CrossSlideThreshold { value } => {
                write!(f, "cross-slide threshold {value} must be finite and non-negative")
            }
            GestureSpecError::AxisLockAngle { value } => {
                write!(f, "axis lock angle {value} must lie strictly between 0 and 90 degrees")
            }
        }
    }
}

impl std::error::Error for GestureSpecError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_is_valid() {
        assert_eq!(GestureSpec::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_negative_threshold() {
        let spec = GestureSpec::metro().with_threshold(-1.0);
        assert_eq!(
            spec.validate(),
            Err(GestureSpecError::Threshold { value: -1.0 })
        );
    }

    #[test]
    fn rejects_lock_angle_outside_quadrant() {
        for angle in [0.0, 90.0, 120.0, f32::NAN] {
            let spec = GestureSpec::metro().with_axis_lock_angle(angle);
            assert!(
                matches!(spec.validate(), Err(GestureSpecError::AxisLockAngle { .. })),
                "angle {angle} should be rejected"
            );
        }
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = GestureSpecError::CrossSlideThreshold { value: -2.0 };
        assert!(err.to_string().contains("cross-slide"));
    }
}
