//! Full grid redraw: background, borders, titles, gridlines, ticks, labels.

use log::debug;

use crate::canvas::{Canvas, FontKind, LineStyle, TextAlign, TextStyle};
use crate::chart::Chart;
use crate::constants::{
    AXIS_PADDING, BORDER_PADDING, LINE_WIDTH, TICK_LENGTH_MAJOR, TICK_LENGTH_MINOR,
};
use crate::geom::ScreenPoint;
use crate::layout::Layout;
use crate::transform::Transform;

/// Redraw the static chart chrome.
///
/// The caller has already cleared the dirty flag and solved the layout;
/// this pass only draws.
pub(crate) fn draw<C: Canvas>(chart: &Chart, layout: &Layout, canvas: &mut C) {
    let theme = chart.theme();
    let scale = chart.scale();
    let content = chart.content();
    let plot = layout.plot;
    let pad = AXIS_PADDING * scale;
    let line_width = LINE_WIDTH * scale;

    debug!(
        "grid redraw: x step {}, y step {}, plot {}x{}",
        layout.x_ticks.step,
        layout.y_ticks.step,
        plot.width(),
        plot.height()
    );

    canvas.clear_rect(content, theme.background);

    // Borders. The top and left lines are omitted when the content rectangle
    // is flush with the screen edge on that side.
    let border_style = LineStyle {
        color: theme.border,
        width: line_width,
    };
    canvas.line(
        ScreenPoint::new(content.min.x, content.max.y),
        ScreenPoint::new(content.max.x, content.max.y),
        border_style,
    );
    canvas.line(
        ScreenPoint::new(content.max.x, content.min.y),
        ScreenPoint::new(content.max.x, content.max.y),
        border_style,
    );
    if content.min.y > 0.0 {
        canvas.line(
            ScreenPoint::new(content.min.x, content.min.y),
            ScreenPoint::new(content.max.x, content.min.y),
            border_style,
        );
    }
    if content.min.x > 0.0 {
        canvas.line(
            ScreenPoint::new(content.min.x, content.min.y),
            ScreenPoint::new(content.min.x, content.max.y),
            border_style,
        );
    }

    let title_size = theme.title_size * scale;
    if let Some(title) = chart.title() {
        let color = if chart.is_highlighted() {
            theme.highlight
        } else {
            theme.text
        };
        canvas.text(
            ScreenPoint::new(
                (plot.min.x + plot.max.x) * 0.5,
                content.min.y + BORDER_PADDING * scale,
            ),
            title,
            TextStyle {
                color,
                size: title_size,
                font: FontKind::Proportional,
            },
            TextAlign::Center,
        );
    }

    let transform = Transform::new(chart.x_range(), chart.y_range(), plot);
    let label_size = theme.label_size * scale;
    let label_height = canvas.metrics(FontKind::Monospace, label_size).height();
    let grid_style = LineStyle {
        color: theme.grid,
        width: line_width,
    };
    let tick_style = LineStyle {
        color: theme.axis,
        width: line_width,
    };
    let label_style = TextStyle {
        color: theme.text,
        size: label_size,
        font: FontKind::Monospace,
    };

    for tick in &layout.x_ticks.ticks {
        let x = transform.x_to_screen(tick.value);
        if tick.is_major {
            if chart.grid_lines() {
                canvas.line(
                    ScreenPoint::new(x, plot.min.y),
                    ScreenPoint::new(x, plot.max.y),
                    grid_style,
                );
            }
            canvas.line(
                ScreenPoint::new(x, plot.max.y),
                ScreenPoint::new(x, plot.max.y + TICK_LENGTH_MAJOR * scale),
                tick_style,
            );
            canvas.text(
                ScreenPoint::new(x, plot.max.y + TICK_LENGTH_MAJOR * scale + pad),
                &tick.label,
                label_style,
                TextAlign::Center,
            );
        } else {
            canvas.line(
                ScreenPoint::new(x, plot.max.y),
                ScreenPoint::new(x, plot.max.y + TICK_LENGTH_MINOR * scale),
                tick_style,
            );
        }
    }

    for tick in &layout.y_ticks.ticks {
        let y = transform.y_to_screen(tick.value);
        if tick.is_major {
            if chart.grid_lines() {
                canvas.line(
                    ScreenPoint::new(plot.min.x, y),
                    ScreenPoint::new(plot.max.x, y),
                    grid_style,
                );
            }
            canvas.line(
                ScreenPoint::new(plot.min.x - TICK_LENGTH_MAJOR * scale, y),
                ScreenPoint::new(plot.min.x, y),
                tick_style,
            );
            canvas.text(
                ScreenPoint::new(
                    plot.min.x - TICK_LENGTH_MAJOR * scale - pad,
                    y - label_height * 0.5,
                ),
                &tick.label,
                label_style,
                TextAlign::Right,
            );
        } else {
            canvas.line(
                ScreenPoint::new(plot.min.x - TICK_LENGTH_MINOR * scale, y),
                ScreenPoint::new(plot.min.x, y),
                tick_style,
            );
        }
    }

    // Zero-axis lines, clamped to the nearest in-range position when the
    // true zero lies outside the range.
    let axis_style = LineStyle {
        color: theme.axis,
        width: line_width,
    };
    let zero_y = transform.y_to_screen(chart.y_range().clamp(0.0));
    canvas.line(
        ScreenPoint::new(plot.min.x, zero_y),
        ScreenPoint::new(plot.max.x, zero_y),
        axis_style,
    );
    let zero_x = transform.x_to_screen(chart.x_range().clamp(0.0));
    canvas.line(
        ScreenPoint::new(zero_x, plot.min.y),
        ScreenPoint::new(zero_x, plot.max.y),
        axis_style,
    );

    if let Some(x_title) = chart.x_title() {
        let title_height = canvas.metrics(FontKind::Proportional, title_size).height();
        canvas.text(
            ScreenPoint::new(
                (plot.min.x + plot.max.x) * 0.5,
                content.max.y - BORDER_PADDING * scale - title_height,
            ),
            x_title,
            TextStyle {
                color: theme.text,
                size: title_size,
                font: FontKind::Proportional,
            },
            TextAlign::Center,
        );
    }
}
