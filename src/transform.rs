//! Coordinate transform from data space into the plot rectangle.

use crate::geom::{Point, ScreenPoint, ScreenRect};
use crate::range::AxisRange;

/// Linear transform from axis ranges into a screen rectangle.
///
/// Axis ranges uphold `min < max` and the plot rectangle has positive area,
/// so the mapping is total. Data y grows upward, screen y grows downward.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Transform {
    x: AxisRange,
    y: AxisRange,
    screen: ScreenRect,
}

impl Transform {
    /// Create a transform for the given ranges and screen rectangle.
    pub(crate) fn new(x: AxisRange, y: AxisRange, screen: ScreenRect) -> Self {
        Self { x, y, screen }
    }

    /// Map a data x coordinate to a screen x coordinate.
    pub(crate) fn x_to_screen(&self, x: f64) -> f32 {
        let norm = (x - self.x.min()) / self.x.span();
        (self.screen.min.x as f64 + norm * self.screen.width() as f64) as f32
    }

    /// Map a data y coordinate to a screen y coordinate.
    pub(crate) fn y_to_screen(&self, y: f64) -> f32 {
        let norm = (y - self.y.min()) / self.y.span();
        (self.screen.max.y as f64 - norm * self.screen.height() as f64) as f32
    }

    /// Map a data point into screen space.
    pub(crate) fn data_to_screen(&self, point: Point) -> ScreenPoint {
        ScreenPoint::new(self.x_to_screen(point.x), self.y_to_screen(point.y))
    }
}
