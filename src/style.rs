//! Visual themes.
//!
//! A [`Theme`] is injected through the chart configuration; the engine keeps
//! no process-wide style state.

use crate::canvas::Color;

/// Number of entries in the default series palette.
pub const PALETTE_SIZE: usize = 6;

/// Visual theme for charts.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Content background fill.
    pub background: Color,
    /// Border lines around the content rectangle.
    pub border: Color,
    /// Zero-axis lines and tick marks.
    pub axis: Color,
    /// Gridlines across the plot area.
    pub grid: Color,
    /// Titles and tick labels.
    pub text: Color,
    /// Title color while the chart is highlighted.
    pub highlight: Color,
    /// Default series colors, assigned by series id modulo the palette size.
    pub palette: [Color; PALETTE_SIZE],
    /// Proportional font size for titles, before the global scale factor.
    pub title_size: f32,
    /// Monospace font size for tick labels, before the global scale factor.
    pub label_size: f32,
}

impl Theme {
    /// Dark oscilloscope theme, the default.
    pub fn dark() -> Self {
        Self {
            background: Color::new(0.08, 0.09, 0.10, 1.0),
            border: Color::new(0.35, 0.37, 0.40, 1.0),
            axis: Color::new(0.55, 0.57, 0.60, 1.0),
            grid: Color::new(0.18, 0.20, 0.22, 1.0),
            text: Color::new(0.85, 0.86, 0.88, 1.0),
            highlight: Color::new(1.0, 0.80, 0.25, 1.0),
            palette: [
                Color::new(0.98, 0.85, 0.25, 1.0), // yellow
                Color::new(0.25, 0.85, 0.90, 1.0), // cyan
                Color::new(0.95, 0.35, 0.75, 1.0), // magenta
                Color::new(0.35, 0.85, 0.40, 1.0), // green
                Color::new(0.95, 0.55, 0.20, 1.0), // orange
                Color::new(0.40, 0.55, 0.95, 1.0), // blue
            ],
            title_size: 14.0,
            label_size: 11.0,
        }
    }

    /// Light theme.
    pub fn light() -> Self {
        Self {
            background: Color::new(0.98, 0.98, 0.98, 1.0),
            border: Color::new(0.55, 0.55, 0.55, 1.0),
            axis: Color::new(0.35, 0.35, 0.35, 1.0),
            grid: Color::new(0.85, 0.85, 0.85, 1.0),
            text: Color::new(0.12, 0.12, 0.12, 1.0),
            highlight: Color::new(0.80, 0.45, 0.0, 1.0),
            palette: [
                Color::new(0.75, 0.60, 0.0, 1.0),
                Color::new(0.0, 0.55, 0.65, 1.0),
                Color::new(0.75, 0.15, 0.55, 1.0),
                Color::new(0.10, 0.55, 0.15, 1.0),
                Color::new(0.80, 0.35, 0.0, 1.0),
                Color::new(0.20, 0.35, 0.80, 1.0),
            ],
            title_size: 14.0,
            label_size: 11.0,
        }
    }

    /// Default color for a series id.
    pub fn series_color(&self, series: usize) -> Color {
        self.palette[series % PALETTE_SIZE]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
