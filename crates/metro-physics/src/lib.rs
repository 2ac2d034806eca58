//! Frame-stepped motion models for Metro touch surfaces.
//!
//! - [`InertiaState`]: momentum after a fling, decaying geometrically per frame.
//! - [`predict_inertia_distance`]: closed-form travel of that decay, for
//!   choosing snap targets before the simulation runs.
//! - [`SpringState`]: the rubber-band return to a scroll boundary.
//! - [`compress_boundary`]: drag resistance while past a boundary.
//!
//! All units are pixels and pixels per frame. The host steps each state once
//! per animation frame and stops when the state reports it is at rest.

mod inertia;
mod physics_constants;
mod physics_spec;
mod spring;

pub use inertia::*;
pub use physics_constants::*;
pub use physics_spec::*;
pub use spring::*;

pub mod prelude {
    pub use crate::inertia::{predict_inertia_distance, InertiaState};
    pub use crate::physics_spec::{BoundarySpringSpec, InertiaSpec};
    pub use crate::spring::{compress_boundary, SpringState};
}
