//! Fixed pixel constants.
//!
//! Everything here is in logical pixels at scale factor 1.0 and is
//! multiplied by the chart's global scale factor before use.

/// Length of a major tick mark.
pub(crate) const TICK_LENGTH_MAJOR: f32 = 6.0;

/// Length of a minor (half-step) tick mark.
pub(crate) const TICK_LENGTH_MINOR: f32 = 3.0;

/// Gap between ticks, labels, and titles.
pub(crate) const AXIS_PADDING: f32 = 4.0;

/// Inset between the content rectangle edge and anything drawn inside it.
pub(crate) const BORDER_PADDING: f32 = 2.0;

/// Stroke width for series line segments.
pub(crate) const LINE_WIDTH: f32 = 1.0;

/// Marker radius for dot-style plotting.
pub(crate) const DOT_RADIUS: f32 = 2.0;

/// Vertical pixel budget per y label, in label heights.
pub(crate) const Y_LABEL_HEIGHT_BUDGET: f32 = 2.0;

/// Initial horizontal pixel budget per x label, in average character widths.
pub(crate) const X_LABEL_CHAR_BUDGET: f32 = 3.0;

/// Upper bound on horizontal layout passes. The width estimate only grows,
/// so the fixed point is normally reached in one to three passes.
pub(crate) const LAYOUT_PASS_LIMIT: usize = 8;
