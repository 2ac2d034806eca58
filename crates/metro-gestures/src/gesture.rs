//! One-shot gesture disambiguation.
//!
//! A [`GestureState`] follows a single pointer from down to up. It stays
//! unresolved while the pointer wanders within the movement threshold, then
//! classifies the gesture the first time the threshold is crossed and keeps
//! that classification until the pointer lifts. Freezing the first answer
//! stops a navigation gesture from flipping between drag axes mid-flight;
//! surfaces that need a reversible lock use the axis rail instead.

use crate::gesture_constants::MAX_VELOCITY_SAMPLES;
use crate::{calculate_velocity, Axis, GestureSpec, PointerSample};
use smallvec::SmallVec;

/// Trailing samples kept for velocity estimation.
pub type SampleWindow = SmallVec<[PointerSample; MAX_VELOCITY_SAMPLES]>;

/// Classification of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// The pointer never left the movement threshold.
    Tap,
    /// Predominantly horizontal drag.
    DragX,
    /// Predominantly vertical drag.
    DragY,
    /// Horizontal drag with enough vertical travel to be a distinct
    /// interaction, such as selecting or reordering an item.
    CrossSlide,
}

impl GestureKind {
    /// The axis a drag moves along; `None` for taps and cross-slides.
    pub fn drag_axis(self) -> Option<Axis> {
        match self {
            GestureKind::DragX => Some(Axis::Horizontal),
            GestureKind::DragY => Some(Axis::Vertical),
            GestureKind::Tap | GestureKind::CrossSlide => None,
        }
    }
}

/// Tracks one contiguous pointer-down to pointer-up interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureState {
    start: PointerSample,
    current: PointerSample,
    resolved: Option<GestureKind>,
    samples: SampleWindow,
}

impl GestureState {
    /// Starts a gesture at pointer-down.
    pub fn new(x: f32, y: f32, time: f64) -> Self {
        Self::from_sample(PointerSample::new(x, y, time))
    }

    pub fn from_sample(sample: PointerSample) -> Self {
        let mut samples = SampleWindow::new();
        samples.push(sample);
        Self {
            start: sample,
            current: sample,
            resolved: None,
            samples,
        }
    }

    /// Records a pointer-move with the default thresholds.
    #[must_use]
    pub fn update(&self, x: f32, y: f32, time: f64) -> Self {
        self.update_with(PointerSample::new(x, y, time), &GestureSpec::default())
    }

    /// Records a pointer-move and classifies the gesture if it is still
    /// unresolved and has left the movement threshold.
    #[must_use]
    pub fn update_with(&self, sample: PointerSample, spec: &GestureSpec) -> Self {
        let mut samples = self.samples.clone();
        if samples.len() == MAX_VELOCITY_SAMPLES {
            samples.remove(0);
        }
        samples.push(sample);

        let resolved = match self.resolved {
            Some(kind) => Some(kind),
            None => {
                let kind = classify(self.start, sample, spec);
                if let Some(kind) = kind {
                    log::trace!(
                        "gesture resolved as {:?} after {:.1}ms",
                        kind,
                        sample.time - self.start.time
                    );
                }
                kind
            }
        };

        Self {
            start: self.start,
            current: sample,
            resolved,
            samples,
        }
    }

    /// Finalizes the gesture at pointer-up without consuming the state.
    pub fn resolve(&self) -> GestureResult {
        GestureResult {
            kind: self.resolved.unwrap_or(GestureKind::Tap),
            dx: self.current.x - self.start.x,
            dy: self.current.y - self.start.y,
            velocity_x: calculate_velocity(&self.samples, Axis::Horizontal),
            velocity_y: calculate_velocity(&self.samples, Axis::Vertical),
            duration: self.current.time - self.start.time,
        }
    }

    pub fn start(&self) -> PointerSample {
        self.start
    }

    pub fn current(&self) -> PointerSample {
        self.current
    }

    /// The classification, once the gesture has left the movement threshold.
    pub fn resolved(&self) -> Option<GestureKind> {
        self.resolved
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }

    /// Trailing samples, oldest first. Never empty.
    pub fn samples(&self) -> &[PointerSample] {
        &self.samples
    }
}

fn classify(start: PointerSample, current: PointerSample, spec: &GestureSpec) -> Option<GestureKind> {
    if start.position().distance_to(current.position()) < spec.threshold {
        return None;
    }

    let dx = current.x - start.x;
    let dy = current.y - start.y;

    let kind = if dx.abs() > dy.abs() {
        if dy.abs() > spec.cross_slide_threshold {
            GestureKind::CrossSlide
        } else {
            GestureKind::DragX
        }
    } else {
        GestureKind::DragY
    };
    Some(kind)
}

/// The finalized outcome of a gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureResult {
    pub kind: GestureKind,
    /// Net horizontal displacement from pointer-down to the last sample.
    pub dx: f32,
    /// Net vertical displacement from pointer-down to the last sample.
    pub dy: f32,
    /// Release velocity in pixels per frame.
    pub velocity_x: f32,
    /// Release velocity in pixels per frame.
    pub velocity_y: f32,
    /// Milliseconds from pointer-down to the last sample.
    pub duration: f64,
}

impl GestureResult {
    pub fn is_tap(&self) -> bool {
        self.kind == GestureKind::Tap
    }

    /// Release velocity along `axis`.
    pub fn velocity(&self, axis: Axis) -> f32 {
        axis.select(self.velocity_x, self.velocity_y)
    }

    /// Net displacement along `axis`.
    pub fn displacement(&self, axis: Axis) -> f32 {
        axis.select(self.dx, self.dy)
    }
}

#[cfg(test)]
#[path = "tests/gesture_tests.rs"]
mod tests;
