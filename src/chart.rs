//! Chart state and the incremental plotting protocol.

use log::trace;

use crate::canvas::{Canvas, Color, LineStyle};
use crate::constants::{BORDER_PADDING, DOT_RADIUS, LINE_WIDTH};
use crate::geom::{Point, ScreenRect};
use crate::grid;
use crate::layout;
use crate::range::{AxisRange, RangeError};
use crate::series::{PlotStyle, SeriesState, ensure_series};
use crate::style::Theme;
use crate::transform::Transform;

/// Chart configuration with documented defaults.
///
/// One value configures everything; every field can still be changed later
/// through the corresponding setter on [`Chart`].
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Outer content rectangle allotted to the chart.
    /// Default: `(0, 0)` to `(320, 240)`.
    pub content: ScreenRect,
    /// Initial x axis range. Default: `0..1`.
    pub x_range: AxisRange,
    /// Initial y axis range. Default: `0..1`.
    pub y_range: AxisRange,
    /// Render style for samples. Default: [`PlotStyle::Line`].
    pub style: PlotStyle,
    /// Global scale factor applied to fonts, ticks, and padding.
    /// Default: `1.0`.
    pub scale: f32,
    /// Sample rate in samples per second for auto-increment x.
    /// Default: `100.0`.
    pub sample_rate: f64,
    /// Draw gridlines across the plot area. Default: `true`.
    pub grid_lines: bool,
    /// Force equal data units per pixel on both axes. Default: `false`.
    pub equal_axes: bool,
    /// Chart title. Default: none.
    pub title: Option<String>,
    /// X axis title. Default: none.
    pub x_title: Option<String>,
    /// Visual theme. Default: [`Theme::dark`].
    pub theme: Theme,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            content: ScreenRect::from_edges(0.0, 0.0, 320.0, 240.0),
            x_range: AxisRange::default(),
            y_range: AxisRange::default(),
            style: PlotStyle::default(),
            scale: 1.0,
            sample_rate: 100.0,
            grid_lines: true,
            equal_axes: false,
            title: None,
            x_title: None,
            theme: Theme::default(),
        }
    }
}

/// A live chart: axis state, series memory, and the draw protocol.
///
/// The grid is redrawn lazily: any mutation to size, range, or style marks
/// the chart dirty, and the next plotted point triggers exactly one full
/// redraw before being drawn incrementally.
#[derive(Debug, Clone)]
pub struct Chart {
    content: ScreenRect,
    plot: ScreenRect,
    x_range: AxisRange,
    y_range: AxisRange,
    style: PlotStyle,
    scale: f32,
    sample_rate: f64,
    grid_lines: bool,
    equal_axes: bool,
    title: Option<String>,
    x_title: Option<String>,
    highlighted: bool,
    dirty: bool,
    theme: Theme,
    series: Vec<SeriesState>,
}

impl Chart {
    /// Create a chart from a configuration.
    pub fn new(config: ChartConfig) -> Self {
        let scale = if config.scale.is_finite() && config.scale > 0.0 {
            config.scale
        } else {
            1.0
        };
        let plot = fallback_plot_rect(config.content, scale);
        Self {
            content: config.content,
            plot,
            x_range: config.x_range,
            y_range: config.y_range,
            style: config.style,
            scale,
            sample_rate: if config.sample_rate.is_finite() && config.sample_rate > 0.0 {
                config.sample_rate
            } else {
                100.0
            },
            grid_lines: config.grid_lines,
            equal_axes: config.equal_axes,
            title: config.title,
            x_title: config.x_title,
            highlighted: false,
            dirty: true,
            theme: config.theme,
            series: Vec::new(),
        }
    }

    /// Outer content rectangle.
    pub fn content(&self) -> ScreenRect {
        self.content
    }

    /// Inner plot rectangle derived by the last layout pass.
    pub fn plot_rect(&self) -> ScreenRect {
        self.plot
    }

    /// X axis range.
    pub fn x_range(&self) -> AxisRange {
        self.x_range
    }

    /// Y axis range.
    pub fn y_range(&self) -> AxisRange {
        self.y_range
    }

    /// Current render style.
    pub fn style(&self) -> PlotStyle {
        self.style
    }

    /// Global scale factor.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Sample rate used by [`Chart::plot_next`].
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Whether gridlines are drawn.
    pub fn grid_lines(&self) -> bool {
        self.grid_lines
    }

    /// Whether equal units per pixel are enforced.
    pub fn equal_axes(&self) -> bool {
        self.equal_axes
    }

    /// Chart title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// X axis title.
    pub fn x_title(&self) -> Option<&str> {
        self.x_title.as_deref()
    }

    /// Whether the title is drawn highlighted.
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Whether the next plotted point will trigger a grid redraw.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Visual theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Number of registered series.
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Last accepted point of a series, if any.
    pub fn last_point(&self, series: usize) -> Option<Point> {
        self.series.get(series).and_then(|state| state.last)
    }

    /// Replace the content rectangle. Rectangles without positive area are
    /// ignored.
    pub fn set_content(&mut self, content: ScreenRect) {
        if !content.is_valid() {
            trace!("ignoring degenerate content rectangle");
            return;
        }
        self.content = content;
        self.dirty = true;
    }

    /// Replace the x axis range. On error the previous range is kept.
    pub fn set_x_range(&mut self, min: f64, max: f64) -> Result<(), RangeError> {
        self.x_range.set(min, max)?;
        self.dirty = true;
        Ok(())
    }

    /// Replace the y axis range. On error the previous range is kept.
    pub fn set_y_range(&mut self, min: f64, max: f64) -> Result<(), RangeError> {
        self.y_range.set(min, max)?;
        self.dirty = true;
        Ok(())
    }

    /// Change the render style.
    pub fn set_style(&mut self, style: PlotStyle) {
        self.style = style;
        self.dirty = true;
    }

    /// Change the global scale factor. Non-positive values are ignored.
    pub fn set_scale(&mut self, scale: f32) {
        if !scale.is_finite() || scale <= 0.0 {
            trace!("ignoring non-positive scale factor {scale}");
            return;
        }
        self.scale = scale;
        self.dirty = true;
    }

    /// Change the sample rate. Non-positive values are ignored.
    pub fn set_sample_rate(&mut self, sample_rate: f64) {
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            trace!("ignoring non-positive sample rate {sample_rate}");
            return;
        }
        self.sample_rate = sample_rate;
    }

    /// Toggle gridlines.
    pub fn set_grid_lines(&mut self, grid_lines: bool) {
        self.grid_lines = grid_lines;
        self.dirty = true;
    }

    /// Toggle equal units per pixel.
    pub fn set_equal_axes(&mut self, equal_axes: bool) {
        self.equal_axes = equal_axes;
        self.dirty = true;
    }

    /// Replace the chart title.
    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
        self.dirty = true;
    }

    /// Replace the x axis title.
    pub fn set_x_title(&mut self, x_title: Option<String>) {
        self.x_title = x_title;
        self.dirty = true;
    }

    /// Toggle title highlighting.
    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
        self.dirty = true;
    }

    /// Discard all series memory, including the series count.
    ///
    /// The next point of every series is treated as fresh: no segment or bar
    /// is drawn from a point accepted before the reset.
    pub fn reset(&mut self) {
        self.series.clear();
    }

    /// Re-arm every series so its next point starts a fresh trace segment.
    ///
    /// Unlike [`Chart::reset`] the series count and auto-increment positions
    /// survive, so bar widths and default colors stay stable.
    pub fn start_sweep(&mut self) {
        for state in &mut self.series {
            state.rearm();
        }
    }

    /// Redraw the grid immediately, clearing the dirty flag.
    pub fn redraw<C: Canvas>(&mut self, canvas: &mut C) {
        self.dirty = false;
        let solved = layout::solve(
            self.content,
            &mut self.x_range,
            &mut self.y_range,
            &self.theme,
            self.scale,
            self.title.is_some(),
            self.x_title.is_some(),
            self.equal_axes,
            &*canvas,
        );
        self.plot = solved.plot;
        grid::draw(self, &solved, canvas);
    }

    /// Plot one sample for a series with an explicit color.
    ///
    /// Non-finite samples are dropped without touching any state. The sample
    /// is clamped into the axis ranges, drawn in the configured style, and
    /// recorded as the series' previous point.
    pub fn plot<C: Canvas>(&mut self, canvas: &mut C, x: f64, y: f64, series: usize, color: Color) {
        if !x.is_finite() || !y.is_finite() {
            trace!("dropping non-finite sample ({x}, {y}) for series {series}");
            return;
        }
        ensure_series(&mut self.series, series);
        if self.dirty {
            self.redraw(canvas);
        }

        let point = Point::new(self.x_range.clamp(x), self.y_range.clamp(y));
        let transform = self.transform();
        let screen = transform.data_to_screen(point);

        match self.style {
            PlotStyle::Line => {
                if let Some(last) = self.series[series].last {
                    canvas.line(
                        transform.data_to_screen(last),
                        screen,
                        LineStyle {
                            color,
                            width: LINE_WIDTH * self.scale,
                        },
                    );
                }
            }
            PlotStyle::Dot => {
                let radius = DOT_RADIUS * self.scale;
                canvas.fill_ellipse(screen, radius, radius, color);
            }
            PlotStyle::Bar => {
                if let Some(last) = self.series[series].last {
                    let slots = self.series.len() as f64;
                    let span = point.x - last.x;
                    let slot_min = last.x + span * series as f64 / slots;
                    let slot_max = last.x + span * (series as f64 + 1.0) / slots;
                    let baseline = if self.y_range.contains(0.0) {
                        0.0
                    } else {
                        self.y_range.min()
                    };
                    let rect = ScreenRect::spanning(
                        transform.data_to_screen(Point::new(slot_min, baseline)),
                        transform.data_to_screen(Point::new(slot_max, point.y)),
                    );
                    canvas.fill_rect(rect, color);
                }
            }
        }

        self.series[series].last = Some(point);
    }

    /// Plot one sample using the theme's default color for the series.
    pub fn plot_default<C: Canvas>(&mut self, canvas: &mut C, x: f64, y: f64, series: usize) {
        let color = self.theme.series_color(series);
        self.plot(canvas, x, y, series, color);
    }

    /// Plot one sample with an auto-incrementing x position.
    ///
    /// The x position advances by `1 / sample_rate` per accepted sample,
    /// independently for each series; a dropped sample does not advance it.
    pub fn plot_next<C: Canvas>(&mut self, canvas: &mut C, y: f64, series: usize) {
        if !y.is_finite() {
            trace!("dropping non-finite sample y {y} for series {series}");
            return;
        }
        ensure_series(&mut self.series, series);
        let x = self.series[series].next_x;
        self.series[series].next_x = x + 1.0 / self.sample_rate;
        self.plot_default(canvas, x, y, series);
    }

    /// Draw a filled rectangle in data coordinates.
    ///
    /// The request is skipped entirely, not clamped, when any corner lies
    /// outside the current axis ranges.
    pub fn plot_rectangle<C: Canvas>(
        &mut self,
        canvas: &mut C,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
    ) {
        if !self.x_range.contains(x1)
            || !self.x_range.contains(x2)
            || !self.y_range.contains(y1)
            || !self.y_range.contains(y2)
        {
            trace!("skipping out-of-range rectangle ({x1}, {y1})..({x2}, {y2})");
            return;
        }
        if self.dirty {
            self.redraw(canvas);
        }
        let transform = self.transform();
        let rect = ScreenRect::spanning(
            transform.data_to_screen(Point::new(x1, y1)),
            transform.data_to_screen(Point::new(x2, y2)),
        );
        canvas.fill_rect(rect, color);
    }

    fn transform(&self) -> Transform {
        Transform::new(self.x_range, self.y_range, self.plot)
    }
}

/// Plot rectangle used before the first layout pass runs.
fn fallback_plot_rect(content: ScreenRect, scale: f32) -> ScreenRect {
    let inset = (BORDER_PADDING * scale).min(content.width() * 0.25);
    let rect = ScreenRect::from_edges(
        content.min.x + inset,
        content.min.y + inset,
        content.max.x - inset,
        content.max.y - inset,
    );
    if rect.is_valid() { rect } else { content }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::recording::{DrawOp, RecordingCanvas};

    fn chart() -> Chart {
        Chart::new(ChartConfig {
            content: ScreenRect::from_edges(0.0, 0.0, 400.0, 300.0),
            x_range: AxisRange::new(0.0, 10.0).unwrap(),
            y_range: AxisRange::new(-5.0, 5.0).unwrap(),
            ..ChartConfig::default()
        })
    }

    fn clear_count(canvas: &RecordingCanvas) -> usize {
        canvas
            .ops()
            .iter()
            .filter(|op| matches!(op, DrawOp::ClearRect { .. }))
            .count()
    }

    fn fill_rects(canvas: &RecordingCanvas) -> Vec<ScreenRect> {
        canvas
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillRect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn first_plot_redraws_grid_exactly_once() {
        let mut chart = chart();
        let mut canvas = RecordingCanvas::new();
        assert!(chart.is_dirty());

        chart.plot(&mut canvas, 1.0, 1.0, 0, Color::WHITE);
        assert!(!chart.is_dirty());
        assert_eq!(clear_count(&canvas), 1);

        chart.plot(&mut canvas, 2.0, 2.0, 0, Color::WHITE);
        assert_eq!(clear_count(&canvas), 1);

        chart.set_title(Some("volts".to_string()));
        assert!(chart.is_dirty());
        chart.plot(&mut canvas, 3.0, 3.0, 0, Color::WHITE);
        assert_eq!(clear_count(&canvas), 2);
    }

    #[test]
    fn line_mode_draws_one_segment_per_pair() {
        let mut chart = chart();
        let mut canvas = RecordingCanvas::new();
        chart.redraw(&mut canvas);
        let grid_ops = canvas.ops().len();

        chart.plot(&mut canvas, 0.0, 0.0, 0, Color::WHITE);
        assert_eq!(canvas.ops().len(), grid_ops);
        assert_eq!(chart.last_point(0), Some(Point::new(0.0, 0.0)));

        chart.plot(&mut canvas, 1.0, 1.0, 0, Color::WHITE);
        assert_eq!(canvas.ops().len(), grid_ops + 1);
        assert!(matches!(canvas.ops().last(), Some(DrawOp::Line { .. })));
        assert_eq!(chart.last_point(0), Some(Point::new(1.0, 1.0)));
    }

    #[test]
    fn reset_forgets_previous_points_and_series() {
        let mut chart = chart();
        let mut canvas = RecordingCanvas::new();
        chart.redraw(&mut canvas);
        chart.plot(&mut canvas, 0.0, 0.0, 0, Color::WHITE);
        chart.plot(&mut canvas, 1.0, 1.0, 0, Color::WHITE);
        assert_eq!(chart.series_count(), 1);

        chart.reset();
        assert_eq!(chart.series_count(), 0);
        let ops = canvas.ops().len();
        chart.plot(&mut canvas, 2.0, 2.0, 0, Color::WHITE);
        assert_eq!(canvas.ops().len(), ops, "no segment after reset");
        assert_eq!(chart.last_point(0), Some(Point::new(2.0, 2.0)));
    }

    #[test]
    fn start_sweep_keeps_series_count() {
        let mut chart = chart();
        let mut canvas = RecordingCanvas::new();
        chart.redraw(&mut canvas);
        chart.plot(&mut canvas, 0.0, 0.0, 2, Color::WHITE);
        assert_eq!(chart.series_count(), 3);

        chart.start_sweep();
        assert_eq!(chart.series_count(), 3);
        assert_eq!(chart.last_point(2), None);

        let ops = canvas.ops().len();
        chart.plot(&mut canvas, 1.0, 1.0, 2, Color::WHITE);
        assert_eq!(canvas.ops().len(), ops, "no segment after sweep restart");
    }

    #[test]
    fn non_finite_samples_change_nothing() {
        let mut chart = chart();
        let mut canvas = RecordingCanvas::new();
        chart.redraw(&mut canvas);
        chart.plot(&mut canvas, 1.0, 1.0, 0, Color::WHITE);
        let ops = canvas.ops().len();

        chart.plot(&mut canvas, f64::NAN, 5.0, 0, Color::WHITE);
        chart.plot(&mut canvas, 5.0, f64::INFINITY, 0, Color::WHITE);
        assert_eq!(canvas.ops().len(), ops);
        assert_eq!(chart.last_point(0), Some(Point::new(1.0, 1.0)));

        // A non-finite sample for an unseen series must not register it.
        chart.plot(&mut canvas, f64::NAN, 0.0, 7, Color::WHITE);
        assert_eq!(chart.series_count(), 1);
    }

    #[test]
    fn samples_are_clamped_into_range() {
        let mut chart = chart();
        let mut canvas = RecordingCanvas::new();
        chart.redraw(&mut canvas);
        chart.plot(&mut canvas, -3.0, 99.0, 0, Color::WHITE);
        assert_eq!(chart.last_point(0), Some(Point::new(0.0, 5.0)));
    }

    #[test]
    fn bar_mode_splits_the_step_between_series() {
        let mut chart = Chart::new(ChartConfig {
            content: ScreenRect::from_edges(0.0, 0.0, 400.0, 300.0),
            x_range: AxisRange::new(0.0, 10.0).unwrap(),
            y_range: AxisRange::new(0.0, 5.0).unwrap(),
            style: PlotStyle::Bar,
            ..ChartConfig::default()
        });
        let mut canvas = RecordingCanvas::new();
        chart.redraw(&mut canvas);

        // Register three series; the first sample per series draws nothing.
        for series in 0..3 {
            chart.plot(&mut canvas, 0.0, 1.0, series, Color::WHITE);
        }
        assert!(fill_rects(&canvas).is_empty());

        for series in 0..3 {
            chart.plot(&mut canvas, 1.0, 2.0 + series as f64, series, Color::WHITE);
        }
        let mut rects = fill_rects(&canvas);
        assert_eq!(rects.len(), 3);
        rects.sort_by(|a, b| a.min.x.partial_cmp(&b.min.x).unwrap());

        // Adjacent, non-overlapping, and spanning exactly one x step.
        assert!((rects[0].max.x - rects[1].min.x).abs() < 0.51);
        assert!((rects[1].max.x - rects[2].min.x).abs() < 0.51);
        let plot = chart.plot_rect();
        let step_px = plot.width() / 10.0;
        let total = rects[2].max.x - rects[0].min.x;
        assert!(
            (total - step_px).abs() < 1.0,
            "bars span {total}, expected {step_px}"
        );
    }

    #[test]
    fn dot_mode_marks_every_sample() {
        let mut chart = chart();
        chart.set_style(PlotStyle::Dot);
        let mut canvas = RecordingCanvas::new();
        chart.redraw(&mut canvas);
        let ops = canvas.ops().len();

        chart.plot(&mut canvas, 1.0, 1.0, 0, Color::WHITE);
        chart.plot(&mut canvas, 2.0, 2.0, 0, Color::WHITE);
        let dots = canvas.ops()[ops..]
            .iter()
            .filter(|op| matches!(op, DrawOp::FillEllipse { .. }))
            .count();
        assert_eq!(dots, 2);
    }

    #[test]
    fn plot_rectangle_skips_out_of_range_requests() {
        let mut chart = chart();
        let mut canvas = RecordingCanvas::new();
        chart.redraw(&mut canvas);

        chart.plot_rectangle(&mut canvas, 1.0, -1.0, 3.0, 1.0, Color::WHITE);
        assert_eq!(fill_rects(&canvas).len(), 1);

        chart.plot_rectangle(&mut canvas, 1.0, -1.0, 30.0, 1.0, Color::WHITE);
        chart.plot_rectangle(&mut canvas, f64::NAN, -1.0, 3.0, 1.0, Color::WHITE);
        assert_eq!(fill_rects(&canvas).len(), 1);
    }

    #[test]
    fn plot_next_advances_per_series_only_on_accepted_samples() {
        let mut chart = chart();
        chart.set_sample_rate(10.0);
        let mut canvas = RecordingCanvas::new();

        chart.plot_next(&mut canvas, f64::NAN, 0);
        chart.plot_next(&mut canvas, 1.0, 0);
        chart.plot_next(&mut canvas, 2.0, 0);
        chart.plot_next(&mut canvas, 9.0, 1);

        assert_eq!(chart.last_point(0), Some(Point::new(0.1, 2.0)));
        assert_eq!(chart.last_point(1), Some(Point::new(0.0, 5.0)));
    }

    #[test]
    fn range_setters_keep_previous_value_on_error() {
        let mut chart = chart();
        let mut canvas = RecordingCanvas::new();
        chart.redraw(&mut canvas);
        assert!(!chart.is_dirty());

        assert_eq!(chart.set_x_range(5.0, 1.0), Err(RangeError::Inverted));
        assert_eq!(
            chart.set_y_range(f64::NAN, 1.0),
            Err(RangeError::NonFinite)
        );
        assert_eq!(chart.x_range(), AxisRange::new(0.0, 10.0).unwrap());
        assert!(!chart.is_dirty(), "failed setters must not mark dirty");

        assert!(chart.set_x_range(0.0, 20.0).is_ok());
        assert!(chart.is_dirty());
    }
}
