//! Pointer input for Metro touch surfaces: sample normalization, release
//! velocity estimation, gesture disambiguation and the axis-rail filter.
//!
//! Every state type here is a plain value. Updating a state returns a new
//! value and leaves the old one untouched, so independent surfaces can keep
//! their own state threads without any shared bookkeeping.

mod axis;
mod axis_rail;
mod clock;
mod geometry;
mod gesture;
pub mod gesture_constants;
mod gesture_spec;
mod pointer;
mod velocity;

pub use axis::*;
pub use axis_rail::*;
pub use clock::*;
pub use geometry::*;
pub use gesture::*;
pub use gesture_constants::*;
pub use gesture_spec::*;
pub use pointer::*;
pub use velocity::*;

pub mod prelude {
    pub use crate::axis::Axis;
    pub use crate::axis_rail::{AxisRailState, Movement};
    pub use crate::geometry::Point;
    pub use crate::gesture::{GestureKind, GestureResult, GestureState};
    pub use crate::gesture_spec::GestureSpec;
    pub use crate::pointer::{normalize_pointer_event, PointerSample, RawPointerEvent};
    pub use crate::velocity::calculate_velocity;
}
