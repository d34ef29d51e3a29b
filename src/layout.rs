//! Iterative layout of the plot rectangle around its own labels.
//!
//! The inner plot rectangle depends on how wide the tick labels are, but the
//! labels depend on the tick step, which depends on how many pixels the plot
//! rectangle has. The solver runs the vertical axis first (label height is
//! known up front), then iterates the horizontal axis to a fixed point: the
//! width estimate only ever grows, so the loop terminates.

use crate::axis::{TickSet, build_ticks};
use crate::canvas::{FontKind, TextMeasurer};
use crate::constants::{
    AXIS_PADDING, BORDER_PADDING, LAYOUT_PASS_LIMIT, TICK_LENGTH_MAJOR, X_LABEL_CHAR_BUDGET,
    Y_LABEL_HEIGHT_BUDGET,
};
use crate::geom::ScreenRect;
use crate::range::AxisRange;
use crate::scale::{nice_step, required_precision};
use crate::style::Theme;

/// Solved geometry for one grid redraw.
#[derive(Debug, Clone)]
pub(crate) struct Layout {
    /// Inner plot rectangle.
    pub(crate) plot: ScreenRect,
    /// Ticks for the horizontal axis.
    pub(crate) x_ticks: TickSet,
    /// Ticks for the vertical axis.
    pub(crate) y_ticks: TickSet,
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn solve(
    content: ScreenRect,
    x_range: &mut AxisRange,
    y_range: &mut AxisRange,
    theme: &Theme,
    scale: f32,
    has_title: bool,
    has_x_title: bool,
    equal_axes: bool,
    measurer: &dyn TextMeasurer,
) -> Layout {
    let label_size = theme.label_size * scale;
    let title_size = theme.title_size * scale;
    let label_height = measurer.metrics(FontKind::Monospace, label_size).height();
    let title_height = measurer.metrics(FontKind::Proportional, title_size).height();
    let pad = AXIS_PADDING * scale;
    let border = BORDER_PADDING * scale;
    let tick_length = TICK_LENGTH_MAJOR * scale;

    // Vertical extents do not depend on label text.
    let mut top = content.min.y + border;
    if has_title {
        top += title_height + pad;
    }
    let mut bottom_inset = border + tick_length + pad + label_height;
    if has_x_title {
        bottom_inset += title_height + pad;
    }
    let mut bottom = content.max.y - bottom_inset;
    if bottom <= top {
        bottom = top + 1.0;
    }
    let plot_height = bottom - top;

    let mut y_ticks = vertical_ticks(y_range, plot_height, label_height, label_size, measurer);

    let right = content.max.x - border;
    let mut left = left_edge(content, border, pad, tick_length, &y_ticks);
    if left >= right {
        left = right - 1.0;
    }

    let mut x_ticks = horizontal_ticks(x_range, right - left, label_size, measurer);

    if equal_axes {
        let plot_width = right - left;
        let x_units = x_range.span() / plot_width as f64;
        let y_units = y_range.span() / plot_height as f64;
        if x_units < y_units {
            x_range.expand_to_span(y_units * plot_width as f64);
            x_ticks = horizontal_ticks(x_range, plot_width, label_size, measurer);
        } else if y_units < x_units {
            y_range.expand_to_span(x_units * plot_height as f64);
            y_ticks = vertical_ticks(y_range, plot_height, label_height, label_size, measurer);
            // Wider labels on the expanded axis push the plot edge inward.
            left = left_edge(content, border, pad, tick_length, &y_ticks);
            if left >= right {
                left = right - 1.0;
            }
            x_ticks = horizontal_ticks(x_range, right - left, label_size, measurer);
        }
    }

    Layout {
        plot: ScreenRect::from_edges(left, top, right, bottom),
        x_ticks,
        y_ticks,
    }
}

fn left_edge(
    content: ScreenRect,
    border: f32,
    pad: f32,
    tick_length: f32,
    y_ticks: &TickSet,
) -> f32 {
    content.min.x + border + y_ticks.max_label_width + pad + tick_length
}

fn vertical_ticks(
    y_range: &AxisRange,
    plot_height: f32,
    label_height: f32,
    label_size: f32,
    measurer: &dyn TextMeasurer,
) -> TickSet {
    let budget = (Y_LABEL_HEIGHT_BUDGET * label_height) as f64;
    let step = nice_step(y_range.span(), plot_height as f64, budget);
    let precision = required_precision(y_range.min(), y_range.max(), step);
    build_ticks(y_range, step, precision, measurer, label_size)
}

fn horizontal_ticks(
    x_range: &AxisRange,
    available: f32,
    label_size: f32,
    measurer: &dyn TextMeasurer,
) -> TickSet {
    let available = available.max(1.0);
    let char_width = measurer.measure("0", FontKind::Monospace, label_size).0;
    let mut estimate = X_LABEL_CHAR_BUDGET * char_width;

    let mut set = ticks_for_estimate(x_range, available, estimate, label_size, measurer);
    for _ in 0..LAYOUT_PASS_LIMIT {
        if set.max_label_width <= estimate {
            break;
        }
        estimate = set.max_label_width;
        set = ticks_for_estimate(x_range, available, estimate, label_size, measurer);
    }
    set
}

fn ticks_for_estimate(
    x_range: &AxisRange,
    available: f32,
    estimate: f32,
    label_size: f32,
    measurer: &dyn TextMeasurer,
) -> TickSet {
    let step = nice_step(x_range.span(), available as f64, estimate as f64);
    let precision = required_precision(x_range.min(), x_range.max(), step);
    build_ticks(x_range, step, precision, measurer, label_size)
}
