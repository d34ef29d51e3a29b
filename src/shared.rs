//! Thread-safe chart handle.
//!
//! Samples often arrive on a producer thread separate from the one driving
//! redraws. [`SharedChart`] serializes every access to the series state and
//! the dirty flag behind one mutex, so a redraw pass can never observe a
//! half-applied append.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::canvas::{Canvas, Color};
use crate::chart::Chart;

/// Cloneable handle to a mutex-guarded [`Chart`].
#[derive(Debug, Clone)]
pub struct SharedChart {
    inner: Arc<Mutex<Chart>>,
}

impl SharedChart {
    /// Wrap a chart for shared use.
    pub fn new(chart: Chart) -> Self {
        Self {
            inner: Arc::new(Mutex::new(chart)),
        }
    }

    /// Run a closure with exclusive access to the chart.
    pub fn with<R>(&self, f: impl FnOnce(&mut Chart) -> R) -> R {
        f(&mut self.lock())
    }

    /// Plot one sample with an explicit color. See [`Chart::plot`].
    pub fn plot<C: Canvas>(&self, canvas: &mut C, x: f64, y: f64, series: usize, color: Color) {
        self.lock().plot(canvas, x, y, series, color);
    }

    /// Plot one sample with the default series color. See
    /// [`Chart::plot_default`].
    pub fn plot_default<C: Canvas>(&self, canvas: &mut C, x: f64, y: f64, series: usize) {
        self.lock().plot_default(canvas, x, y, series);
    }

    /// Plot one sample with an auto-incrementing x position. See
    /// [`Chart::plot_next`].
    pub fn plot_next<C: Canvas>(&self, canvas: &mut C, y: f64, series: usize) {
        self.lock().plot_next(canvas, y, series);
    }

    /// Redraw the grid immediately. See [`Chart::redraw`].
    pub fn redraw<C: Canvas>(&self, canvas: &mut C) {
        self.lock().redraw(canvas);
    }

    fn lock(&self) -> MutexGuard<'_, Chart> {
        // A panic while holding the lock leaves the chart in a consistent
        // state (no draw call is split across two locks), so poisoning is
        // recovered rather than propagated.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
