//! Scroll driver for a single 1-D scroll surface.
//!
//! Pointer events move the content while a finger is down, and the host
//! calls [`TouchScroller::step_frame`] once per animation frame after
//! release. Frame scheduling stays with the host: it keeps requesting frames
//! while [`FrameOutcome::running`] is true and stops when it is false or when
//! it tears the surface down.
//!
//! Offsets are content translations. They follow the finger, so dragging
//! right increases the offset, and they are kept within `[min, max]` except
//! while rubber-banding.

use crate::{ConfigError, TouchPhysicsConfig};
use metro_gestures::{Axis, AxisRailState, GestureResult, GestureState, PointerSample};
use metro_physics::{InertiaState, SpringState};

/// What the scroller is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollPhase {
    /// At rest.
    Idle,
    /// A pointer is down and moving the content.
    Dragging,
    /// Coasting after a fling.
    Flinging,
    /// Springing back to a bound or settling on a target.
    Bouncing,
}

/// Result of one animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutcome {
    /// Content offset to apply this frame.
    pub offset: f32,
    /// Whether another frame is needed.
    pub running: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Motion {
    Idle,
    Dragging,
    Flinging(InertiaState),
    /// Spring positions are relative to `anchor`.
    Bouncing {
        spring: SpringState,
        anchor: f32,
    },
}

/// Drives drag, fling and bounce for one scroll surface.
#[derive(Debug, Clone)]
pub struct TouchScroller {
    config: TouchPhysicsConfig,
    orientation: Axis,
    min: f32,
    max: f32,
    offset: f32,
    /// Offset the drag would have reached without boundary resistance.
    drag_offset: f32,
    gesture: Option<GestureState>,
    rail: AxisRailState,
    last_sample: Option<PointerSample>,
    motion: Motion,
}

impl TouchScroller {
    /// Creates a scroller at offset `max`, the leading edge of the content.
    pub fn new(
        orientation: Axis,
        min: f32,
        max: f32,
        config: TouchPhysicsConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        check_bounds(min, max)?;
        Ok(Self {
            config,
            orientation,
            min,
            max,
            offset: max,
            drag_offset: max,
            gesture: None,
            rail: AxisRailState::new(),
            last_sample: None,
            motion: Motion::Idle,
        })
    }

    /// Creates a scroller with the Metro configuration.
    pub fn with_defaults(orientation: Axis, min: f32, max: f32) -> Result<Self, ConfigError> {
        Self::new(orientation, min, max, TouchPhysicsConfig::metro())
    }

    /// Starts a drag, interrupting any fling or bounce in flight.
    pub fn pointer_down(&mut self, sample: PointerSample) {
        if matches!(self.motion, Motion::Flinging(_) | Motion::Bouncing { .. }) {
            log::debug!("pointer down interrupts {:?} at {:.1}", self.phase(), self.offset);
        }
        self.drag_offset = self.unband(self.offset);
        self.gesture = Some(GestureState::from_sample(sample));
        self.rail = AxisRailState::new();
        self.last_sample = Some(sample);
        self.motion = Motion::Dragging;
    }

    /// Moves the content with the pointer and returns the new offset.
    ///
    /// Ignored unless a drag is in progress.
    pub fn pointer_move(&mut self, sample: PointerSample) -> f32 {
        let (Some(gesture), Some(last)) = (self.gesture.as_ref(), self.last_sample) else {
            return self.offset;
        };

        let gesture = gesture.update_with(sample, &self.config.gesture);
        let (movement, rail) =
            self.rail
                .feed_with(sample.x - last.x, sample.y - last.y, &self.config.gesture);

        self.gesture = Some(gesture);
        self.rail = rail;
        self.last_sample = Some(sample);
        self.drag_offset += movement.along(self.orientation);
        self.offset = self.band(self.drag_offset);
        self.offset
    }

    /// Ends the drag and hands over to a fling or a bounce.
    ///
    /// Returns the resolved gesture, or `None` when no drag was in progress.
    pub fn pointer_up(&mut self, sample: PointerSample) -> Option<GestureResult> {
        self.pointer_move(sample);
        let gesture = self.gesture.take()?;
        self.rail = self.rail.reset();
        self.last_sample = None;

        let result = gesture.resolve();
        self.motion = if let Some((anchor, overscroll)) = self.overscroll() {
            self.spring_to(anchor, SpringState::at(overscroll))
        } else if result.kind.drag_axis() == Some(self.orientation) {
            let inertia = InertiaState::new(result.velocity(self.orientation), self.offset);
            if inertia.is_moving() {
                Motion::Flinging(inertia)
            } else {
                Motion::Idle
            }
        } else {
            Motion::Idle
        };

        log::debug!(
            "{:?} released at {:.1}, now {:?}",
            result.kind,
            self.offset,
            self.phase()
        );
        Some(result)
    }

    /// Advances the fling or bounce by one frame.
    pub fn step_frame(&mut self) -> FrameOutcome {
        match self.motion {
            Motion::Idle | Motion::Dragging => {}
            Motion::Flinging(inertia) => {
                let next = self.config.inertia.step(&inertia);
                self.offset = next.position();
                self.motion = if let Some((anchor, overshoot)) = self.overscroll() {
                    // Overshoot and leftover momentum are rubber-banded like a drag.
                    let spring = self.config.spring;
                    log::debug!("fling hit bound {:.1}", anchor);
                    self.spring_to(
                        anchor,
                        SpringState::new(
                            spring.compress(overshoot),
                            spring.compress(next.velocity()),
                        ),
                    )
                } else if next.is_moving() {
                    Motion::Flinging(next)
                } else {
                    log::debug!("fling stopped at {:.1}", self.offset);
                    Motion::Idle
                };
            }
            Motion::Bouncing { spring, anchor } => {
                let next = self.config.spring.step(&spring);
                self.offset = anchor + next.position();
                self.motion = if next.is_settled() {
                    log::debug!("settled at {:.1}", anchor);
                    Motion::Idle
                } else {
                    Motion::Bouncing { spring: next, anchor }
                };
            }
        }

        FrameOutcome {
            offset: self.offset,
            running: self.is_animating(),
        }
    }

    /// Springs the content to `target`, clamped to the bounds.
    ///
    /// Used to settle on a snap point or page after a gesture.
    pub fn animate_to(&mut self, target: f32) {
        let anchor = target.clamp(self.min, self.max);
        self.gesture = None;
        self.last_sample = None;
        self.rail = self.rail.reset();
        self.motion = self.spring_to(anchor, SpringState::at(self.offset - anchor));
    }

    /// Jumps to `offset`, clamped to the bounds, without animating.
    pub fn scroll_to(&mut self, offset: f32) {
        self.cancel();
        self.offset = offset.clamp(self.min, self.max);
    }

    /// Stops any drag or animation, leaving the content where it is.
    pub fn cancel(&mut self) {
        if self.motion != Motion::Idle {
            log::debug!("cancelled {:?} at {:.1}", self.phase(), self.offset);
        }
        self.gesture = None;
        self.last_sample = None;
        self.rail = self.rail.reset();
        self.motion = Motion::Idle;
    }

    /// Changes the scroll bounds, for example after the content resized.
    ///
    /// An idle scroller outside the new bounds springs back into them on the
    /// next frames. A bounce in flight keeps its velocity and is re-anchored
    /// inside the new bounds.
    pub fn set_bounds(&mut self, min: f32, max: f32) -> Result<(), ConfigError> {
        check_bounds(min, max)?;
        self.min = min;
        self.max = max;
        match self.motion {
            Motion::Idle => {
                if let Some((anchor, overscroll)) = self.overscroll() {
                    self.motion = self.spring_to(anchor, SpringState::at(overscroll));
                }
            }
            Motion::Bouncing { spring, anchor } => {
                let target = anchor.clamp(min, max);
                if target != anchor {
                    log::debug!("bounce re-anchored from {:.1} to {:.1}", anchor, target);
                    self.motion = self.spring_to(
                        target,
                        SpringState::new(self.offset - target, spring.velocity()),
                    );
                }
            }
            Motion::Dragging | Motion::Flinging(_) => {}
        }
        Ok(())
    }

    /// Current content offset.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Current phase.
    pub fn phase(&self) -> ScrollPhase {
        match self.motion {
            Motion::Idle => ScrollPhase::Idle,
            Motion::Dragging => ScrollPhase::Dragging,
            Motion::Flinging(_) => ScrollPhase::Flinging,
            Motion::Bouncing { .. } => ScrollPhase::Bouncing,
        }
    }

    /// Whether the host needs to keep stepping frames.
    pub fn is_animating(&self) -> bool {
        matches!(self.motion, Motion::Flinging(_) | Motion::Bouncing { .. })
    }

    /// The scroll axis.
    pub fn orientation(&self) -> Axis {
        self.orientation
    }

    /// The scroll bounds as `(min, max)`.
    pub fn bounds(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    /// The active configuration.
    pub fn config(&self) -> &TouchPhysicsConfig {
        &self.config
    }

    /// Places the content on `spring` around `anchor`, snapping straight to
    /// the anchor when the spring starts at rest.
    fn spring_to(&mut self, anchor: f32, spring: SpringState) -> Motion {
        if spring.is_settled() {
            self.offset = anchor;
            return Motion::Idle;
        }
        self.offset = anchor + spring.position();
        Motion::Bouncing { spring, anchor }
    }

    /// The bound the offset is past and the distance past it.
    fn overscroll(&self) -> Option<(f32, f32)> {
        if self.offset > self.max {
            Some((self.max, self.offset - self.max))
        } else if self.offset < self.min {
            Some((self.min, self.offset - self.min))
        } else {
            None
        }
    }

    /// Applies boundary resistance to an unconstrained drag offset.
    fn band(&self, raw: f32) -> f32 {
        let spring = self.config.spring;
        if raw > self.max {
            self.max + spring.compress(raw - self.max)
        } else if raw < self.min {
            self.min + spring.compress(raw - self.min)
        } else {
            raw
        }
    }

    /// Inverse of [`band`](Self::band).
    fn unband(&self, visible: f32) -> f32 {
        let spring = self.config.spring;
        if visible > self.max {
            self.max + spring.decompress(visible - self.max)
        } else if visible < self.min {
            self.min + spring.decompress(visible - self.min)
        } else {
            visible
        }
    }
}

fn check_bounds(min: f32, max: f32) -> Result<(), ConfigError> {
    if min.is_finite() && max.is_finite() && min <= max {
        Ok(())
    } else {
        Err(ConfigError::Bounds { min, max })
    }
}

#[cfg(test)]
#[path = "tests/scroller_tests.rs"]
mod tests;
