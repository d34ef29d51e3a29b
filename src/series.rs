//! Per-series plotting state and render styles.

use crate::geom::Point;

/// Render style for plotted samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotStyle {
    /// Connect consecutive samples with line segments.
    #[default]
    Line,
    /// Draw a fixed-radius marker at every sample.
    Dot,
    /// Draw filled bars from the zero baseline to every sample.
    Bar,
}

/// Incremental state for one series.
///
/// `last` is `None` until the series has accepted a point, so a legitimate
/// data value can never be mistaken for "no previous point".
#[derive(Debug, Clone, Default)]
pub(crate) struct SeriesState {
    /// Last accepted point, in data coordinates after clamping.
    pub(crate) last: Option<Point>,
    /// Next x for sample-rate driven appends.
    pub(crate) next_x: f64,
}

impl SeriesState {
    /// Forget the previous point so the next one starts a fresh segment.
    pub(crate) fn rearm(&mut self) {
        self.last = None;
    }
}

/// Grow `series` so that `id` is a valid index.
///
/// Referencing series id `k` materializes default entries for every id below
/// it; the registered series count is the vector length.
pub(crate) fn ensure_series(series: &mut Vec<SeriesState>, id: usize) {
    if id >= series.len() {
        series.resize_with(id + 1, SeriesState::default);
    }
}
