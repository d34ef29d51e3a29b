//! Command-recording canvas.

use crate::canvas::{
    Canvas, Color, FontKind, FontMetrics, LineStyle, TextAlign, TextMeasurer, TextStyle,
};
use crate::geom::{ScreenPoint, ScreenRect};

/// A recorded draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// A region was cleared to a solid color.
    ClearRect {
        /// Cleared region.
        rect: ScreenRect,
        /// Fill color.
        color: Color,
    },
    /// A line segment was drawn.
    Line {
        /// Segment start.
        start: ScreenPoint,
        /// Segment end.
        end: ScreenPoint,
        /// Stroke styling.
        style: LineStyle,
    },
    /// A rectangle was filled.
    FillRect {
        /// Rectangle bounds.
        rect: ScreenRect,
        /// Fill color.
        color: Color,
    },
    /// A rectangle outline was stroked.
    StrokeRect {
        /// Rectangle bounds.
        rect: ScreenRect,
        /// Stroke styling.
        style: LineStyle,
    },
    /// An ellipse was filled.
    FillEllipse {
        /// Ellipse center.
        center: ScreenPoint,
        /// Horizontal radius.
        radius_x: f32,
        /// Vertical radius.
        radius_y: f32,
        /// Fill color.
        color: Color,
    },
    /// Text was drawn.
    Text {
        /// Anchor position.
        position: ScreenPoint,
        /// Text content.
        text: String,
        /// Text styling.
        style: TextStyle,
        /// Horizontal anchoring.
        align: TextAlign,
    },
}

/// Canvas that records every command with deterministic font metrics.
///
/// Glyphs are `0.6 * size` wide and lines are `1.2 * size` tall for both
/// font kinds, which keeps layout decisions reproducible in tests.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    /// Create an empty recording canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in draw order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Forget all recorded commands.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl TextMeasurer for RecordingCanvas {
    fn measure(&self, text: &str, _font: FontKind, size: f32) -> (f32, f32) {
        if text.is_empty() {
            return (0.0, 0.0);
        }
        (text.chars().count() as f32 * size * 0.6, size * 1.2)
    }

    fn metrics(&self, _font: FontKind, size: f32) -> FontMetrics {
        FontMetrics {
            ascent: size,
            descent: size * 0.2,
        }
    }
}

impl Canvas for RecordingCanvas {
    fn clear_rect(&mut self, rect: ScreenRect, color: Color) {
        self.ops.push(DrawOp::ClearRect { rect, color });
    }

    fn line(&mut self, start: ScreenPoint, end: ScreenPoint, style: LineStyle) {
        self.ops.push(DrawOp::Line { start, end, style });
    }

    fn fill_rect(&mut self, rect: ScreenRect, color: Color) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: ScreenRect, style: LineStyle) {
        self.ops.push(DrawOp::StrokeRect { rect, style });
    }

    fn fill_ellipse(&mut self, center: ScreenPoint, radius_x: f32, radius_y: f32, color: Color) {
        self.ops.push(DrawOp::FillEllipse {
            center,
            radius_x,
            radius_y,
            color,
        });
    }

    fn text(&mut self, position: ScreenPoint, text: &str, style: TextStyle, align: TextAlign) {
        self.ops.push(DrawOp::Text {
            position,
            text: text.to_string(),
            style,
            align,
        });
    }
}
