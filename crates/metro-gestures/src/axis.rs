/// A cardinal axis of pointer movement.
///
/// Used as the velocity axis, as the axis an [`AxisRailState`](crate::AxisRailState)
/// locks to, and as the scroll orientation of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis: left to right.
    Horizontal,

    /// The y axis: top to bottom.
    Vertical,
}

impl Axis {
    /// Returns the opposite axis.
    #[inline]
    pub fn cross_axis(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Picks the component of `(x, y)` that lies along this axis.
    #[inline]
    pub fn select(self, x: f32, y: f32) -> f32 {
        match self {
            Axis::Horizontal => x,
            Axis::Vertical => y,
        }
    }
}
