//! Platform-neutral pointer events and the samples derived from them.

use crate::Point;
use smallvec::SmallVec;

/// Client positions of the touch points carried by a touch event.
pub type TouchPoints = SmallVec<[Point; 2]>;

/// A mouse, pointer or touch event reduced to the fields normalization reads.
///
/// Platform adapters build this from their native events; the web adapter
/// lives in `metro-platform-web`.
#[derive(Clone, Debug, PartialEq)]
pub enum RawPointerEvent {
    Mouse {
        client_x: f32,
        client_y: f32,
    },
    Pointer {
        client_x: f32,
        client_y: f32,
    },
    Touch {
        /// Touch points still on the surface.
        touches: TouchPoints,
        /// Touch points that changed in this event. On `touchend` this is the
        /// only list that still holds the lifted finger.
        changed_touches: TouchPoints,
    },
}

impl RawPointerEvent {
    pub fn mouse(client_x: f32, client_y: f32) -> Self {
        RawPointerEvent::Mouse { client_x, client_y }
    }

    pub fn pointer(client_x: f32, client_y: f32) -> Self {
        RawPointerEvent::Pointer { client_x, client_y }
    }

    pub fn touch(
        touches: impl IntoIterator<Item = Point>,
        changed_touches: impl IntoIterator<Item = Point>,
    ) -> Self {
        RawPointerEvent::Touch {
            touches: touches.into_iter().collect(),
            changed_touches: changed_touches.into_iter().collect(),
        }
    }
}

/// Reduces any pointer event to a single client position.
///
/// Touch events report their first active touch, falling back to the first
/// changed touch so that `touchend` still yields the lift-off position.
///
/// A touch event with neither list populated yields `(0, 0)`. This is a
/// permissive default rather than a validated contract; callers should treat
/// it as "no movement" and not as an error signal.
pub fn normalize_pointer_event(event: &RawPointerEvent) -> Point {
    match event {
        RawPointerEvent::Mouse { client_x, client_y }
        | RawPointerEvent::Pointer { client_x, client_y } => Point::new(*client_x, *client_y),
        RawPointerEvent::Touch {
            touches,
            changed_touches,
        } => touches
            .first()
            .or_else(|| changed_touches.first())
            .copied()
            .unwrap_or(Point::ZERO),
    }
}

/// One observation of the pointer at a monotonic timestamp in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub time: f64,
}

impl PointerSample {
    pub const fn new(x: f32, y: f32, time: f64) -> Self {
        Self { x, y, time }
    }

    /// Samples the normalized position of `event` at `time`.
    pub fn from_event(event: &RawPointerEvent, time: f64) -> Self {
        let position = normalize_pointer_event(event);
        Self::new(position.x, position.y, time)
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_and_pointer_use_client_position() {
        assert_eq!(
            normalize_pointer_event(&RawPointerEvent::mouse(12.0, 34.0)),
            Point::new(12.0, 34.0)
        );
        assert_eq!(
            normalize_pointer_event(&RawPointerEvent::pointer(-5.0, 8.5)),
            Point::new(-5.0, 8.5)
        );
    }

    #[test]
    fn touch_prefers_active_touches() {
        let event = RawPointerEvent::touch(
            [Point::new(1.0, 2.0), Point::new(3.0, 4.0)],
            [Point::new(9.0, 9.0)],
        );
        assert_eq!(normalize_pointer_event(&event), Point::new(1.0, 2.0));
    }

    #[test]
    fn touchend_falls_back_to_changed_touches() {
        let event = RawPointerEvent::touch([], [Point::new(40.0, 50.0)]);
        assert_eq!(normalize_pointer_event(&event), Point::new(40.0, 50.0));
    }

    #[test]
    fn touch_without_points_yields_origin() {
        let event = RawPointerEvent::touch([], []);
        assert_eq!(normalize_pointer_event(&event), Point::ZERO);
    }

    #[test]
    fn sample_from_event_keeps_time() {
        let sample = PointerSample::from_event(&RawPointerEvent::mouse(7.0, 8.0), 123.5);
        assert_eq!(sample, PointerSample::new(7.0, 8.0, 123.5));
        assert_eq!(sample.position(), Point::new(7.0, 8.0));
    }
}
