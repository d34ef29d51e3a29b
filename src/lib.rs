//! scopechart is an incremental charting engine for serial-monitor and
//! oscilloscope style applications. It auto-scales axes onto human-readable
//! tick steps, sizes the plot area around its own labels, and appends
//! streamed samples without redrawing the whole chart.
//!
//! The host supplies a drawing surface by implementing [`Canvas`] and feeds
//! `(x, y, series)` samples through [`Chart::plot`] and friends; tick steps,
//! label precision, layout, and the draw protocol are decided here.

#![forbid(unsafe_code)]

mod axis;
pub mod backend;
pub mod canvas;
pub mod chart;
mod constants;
pub mod geom;
mod grid;
pub mod label;
mod layout;
pub mod range;
pub mod scale;
pub mod series;
pub mod shared;
pub mod style;
mod transform;

pub use backend::recording::{DrawOp, RecordingCanvas};
pub use canvas::{
    Canvas, Color, FontKind, FontMetrics, LineStyle, TextAlign, TextMeasurer, TextStyle,
};
pub use chart::{Chart, ChartConfig};
pub use geom::{Point, ScreenPoint, ScreenRect};
pub use label::format_label;
pub use range::{AxisRange, RangeError};
pub use scale::{nice_step, required_precision};
pub use series::PlotStyle;
pub use shared::SharedChart;
pub use style::{PALETTE_SIZE, Theme};
