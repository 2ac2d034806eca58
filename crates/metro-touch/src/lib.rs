#![deny(missing_docs)]

//! Touch physics for Metro surfaces, behind a single crate.
//!
//! The primitives live in `metro-gestures` (pointer samples, velocity,
//! gesture disambiguation, axis rail) and `metro-physics` (inertia, boundary
//! spring, fling prediction). This crate re-exports both and adds
//! [`TouchScroller`], which wires them into the drag → fling → bounce
//! sequence of a scroll viewer, and page snapping for flip-views and
//! panoramas.

mod config;
mod scroller;
mod snap;

pub use config::{ConfigError, TouchPhysicsConfig};
pub use scroller::{FrameOutcome, ScrollPhase, TouchScroller};
pub use snap::{snap_offset, snap_page};

/// Re-export the primitive crates so surfaces can depend on a single crate.
pub use metro_gestures::*;
pub use metro_physics::*;

/// Browser event adapters.
#[cfg(feature = "web")]
pub use metro_platform_web as web;

/// Convenience imports for Metro surfaces.
pub mod prelude {
    pub use crate::{
        snap_offset, snap_page, FrameOutcome, ScrollPhase, TouchPhysicsConfig, TouchScroller,
    };
    pub use metro_gestures::prelude::*;
    pub use metro_physics::prelude::*;
}
