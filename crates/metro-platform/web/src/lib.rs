//! Browser event adapter: turns DOM mouse, pointer and touch events into
//! [`RawPointerEvent`]s and timestamped [`PointerSample`]s.

use metro_gestures::{Point, PointerSample, RawPointerEvent, TouchPoints};
use wasm_bindgen::JsCast;

/// DOM events that carry pointer input.
pub trait WebPointerInput {
    /// The event reduced to the platform-neutral shape.
    fn raw_event(&self) -> RawPointerEvent;

    /// `Event.timeStamp`, in milliseconds since the page's time origin.
    fn time_stamp(&self) -> f64;

    /// A sample at the event's normalized position and timestamp.
    fn sample(&self) -> PointerSample {
        PointerSample::from_event(&self.raw_event(), self.time_stamp())
    }
}

impl WebPointerInput for web_sys::MouseEvent {
    fn raw_event(&self) -> RawPointerEvent {
        let position = pointer_position(self.client_x() as f64, self.client_y() as f64);
        RawPointerEvent::mouse(position.x, position.y)
    }

    fn time_stamp(&self) -> f64 {
        web_sys::Event::time_stamp(self)
    }
}

impl WebPointerInput for web_sys::PointerEvent {
    fn raw_event(&self) -> RawPointerEvent {
        let position = pointer_position(self.client_x() as f64, self.client_y() as f64);
        RawPointerEvent::pointer(position.x, position.y)
    }

    fn time_stamp(&self) -> f64 {
        web_sys::Event::time_stamp(self)
    }
}

impl WebPointerInput for web_sys::TouchEvent {
    fn raw_event(&self) -> RawPointerEvent {
        RawPointerEvent::Touch {
            touches: touch_points(&self.touches()),
            changed_touches: touch_points(&self.changed_touches()),
        }
    }

    fn time_stamp(&self) -> f64 {
        web_sys::Event::time_stamp(self)
    }
}

/// Converts any DOM event to a sample if it is a mouse, pointer or touch
/// event. Pointer events are checked before mouse events since every
/// `PointerEvent` is also a `MouseEvent`.
pub fn sample_from_event(event: &web_sys::Event) -> Option<PointerSample> {
    if let Some(pointer) = event.dyn_ref::<web_sys::PointerEvent>() {
        Some(pointer.sample())
    } else if let Some(touch) = event.dyn_ref::<web_sys::TouchEvent>() {
        Some(touch.sample())
    } else if let Some(mouse) = event.dyn_ref::<web_sys::MouseEvent>() {
        Some(mouse.sample())
    } else {
        log::debug!("ignoring non-pointer event {:?}", event.type_());
        None
    }
}

/// The position of a DOM pointer coordinate pair.
///
/// `clientX`/`clientY` are already CSS pixels, the same logical units the
/// gesture thresholds are tuned in, so no device scale is applied.
pub fn pointer_position(client_x: f64, client_y: f64) -> Point {
    Point::new(client_x as f32, client_y as f32)
}

/// Client positions of every touch in `list`, in list order.
pub fn touch_points(list: &web_sys::TouchList) -> TouchPoints {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .map(|touch| pointer_position(touch.client_x() as f64, touch.client_y() as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_coordinates_pass_through_as_css_pixels() {
        assert_eq!(pointer_position(120.0, 48.5), Point::new(120.0, 48.5));
    }

    #[test]
    fn fractional_coordinates_keep_precision() {
        let point = pointer_position(0.25, -3.75);
        assert_eq!(point.x, 0.25);
        assert_eq!(point.y, -3.75);
    }
}
