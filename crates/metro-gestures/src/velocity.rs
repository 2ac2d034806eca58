//! Release velocity estimation.
//!
//! Velocity is the slope between the oldest and newest samples of a short
//! trailing window, rescaled to pixels per animation frame. The window keeps
//! the estimate responsive to the last few pointer moves and ignores how the
//! gesture started.

use crate::gesture_constants::{FRAME_MS, MAX_VELOCITY_SAMPLES};
use crate::{Axis, PointerSample};

/// Estimates the velocity along `axis` in pixels per frame.
///
/// Only the last [`MAX_VELOCITY_SAMPLES`] samples are considered. Returns 0.0
/// for fewer than two samples, and when the window spans no time (duplicate
/// or out-of-order timestamps).
pub fn calculate_velocity(samples: &[PointerSample], axis: Axis) -> f32 {
    let window = &samples[samples.len().saturating_sub(MAX_VELOCITY_SAMPLES)..];
    if window.len() < 2 {
        return 0.0;
    }
    let first = window[0];
    let last = window[window.len() - 1];

    let dt = last.time - first.time;
    if dt.is_nan() || dt <= 0.0 {
        return 0.0;
    }

    let distance = axis.select(last.x, last.y) - axis.select(first.x, first.y);
    (distance as f64 / dt * FRAME_MS) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_x(x: f32, time: f64) -> PointerSample {
        PointerSample::new(x, 0.0, time)
    }

    #[test]
    fn empty_and_single_sample_return_zero() {
        assert_eq!(calculate_velocity(&[], Axis::Horizontal), 0.0);
        assert_eq!(
            calculate_velocity(&[sample_x(100.0, 0.0)], Axis::Horizontal),
            0.0
        );
    }

    #[test]
    fn two_samples_scale_to_frame_velocity() {
        let samples = [sample_x(0.0, 0.0), sample_x(100.0, 100.0)];
        let velocity = calculate_velocity(&samples, Axis::Horizontal);
        assert!(
            (velocity - 16.67).abs() < 0.1,
            "Expected ~16.67, got {}",
            velocity
        );
        assert_eq!(calculate_velocity(&samples, Axis::Vertical), 0.0);
    }

    #[test]
    fn only_trailing_window_is_used() {
        // The first sample is a slow start that falls outside the window.
        let samples = [
            sample_x(0.0, 0.0),
            sample_x(1.0, 500.0),
            sample_x(11.0, 510.0),
            sample_x(21.0, 520.0),
            sample_x(31.0, 530.0),
            sample_x(41.0, 540.0),
        ];
        let velocity = calculate_velocity(&samples, Axis::Horizontal);
        // 40px over 40ms = 1px/ms
        assert!((velocity - 16.67).abs() < 0.01, "got {velocity}");
    }

    #[test]
    fn zero_or_negative_span_returns_zero() {
        let same_time = [sample_x(0.0, 10.0), sample_x(50.0, 10.0)];
        assert_eq!(calculate_velocity(&same_time, Axis::Horizontal), 0.0);

        let backwards = [sample_x(0.0, 20.0), sample_x(50.0, 10.0)];
        assert_eq!(calculate_velocity(&backwards, Axis::Horizontal), 0.0);
    }

    #[test]
    fn negative_motion_gives_negative_velocity() {
        let samples = [
            PointerSample::new(0.0, 300.0, 0.0),
            PointerSample::new(0.0, 200.0, 16.0),
            PointerSample::new(0.0, 100.0, 32.0),
        ];
        assert!(calculate_velocity(&samples, Axis::Vertical) < 0.0);
    }
}
