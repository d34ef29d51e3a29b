//! Renders three channels as adjacent bars and prints the drawn rectangles.
//!
//! ```sh
//! cargo run --example bar_channels
//! ```

use scopechart::{AxisRange, Chart, ChartConfig, DrawOp, PlotStyle, RecordingCanvas, ScreenRect};

fn main() {
    env_logger::init();

    let mut chart = Chart::new(ChartConfig {
        content: ScreenRect::from_edges(0.0, 0.0, 640.0, 360.0),
        x_range: AxisRange::new(0.0, 8.0).expect("valid range"),
        y_range: AxisRange::new(0.0, 10.0).expect("valid range"),
        style: PlotStyle::Bar,
        title: Some("channel throughput".to_string()),
        ..ChartConfig::default()
    });

    let readings = [
        [3.0, 5.5, 2.0],
        [4.5, 4.0, 2.5],
        [5.0, 3.5, 4.0],
        [4.0, 6.0, 3.0],
        [6.5, 5.0, 2.0],
        [5.5, 4.5, 3.5],
        [4.0, 5.0, 5.0],
        [3.5, 6.5, 4.5],
        [5.0, 4.0, 3.0],
    ];

    let mut canvas = RecordingCanvas::new();
    for (step, levels) in readings.iter().enumerate() {
        for (channel, level) in levels.iter().enumerate() {
            chart.plot_default(&mut canvas, step as f64, *level, channel);
        }
    }

    for op in canvas.ops() {
        if let DrawOp::FillRect { rect, .. } = op {
            println!(
                "bar x {:.1}..{:.1}, height {:.1}px",
                rect.min.x,
                rect.max.x,
                rect.height()
            );
        }
    }
    let bars = canvas
        .ops()
        .iter()
        .filter(|op| matches!(op, DrawOp::FillRect { .. }))
        .count();
    println!(
        "{bars} bars across {} steps of {} channels",
        readings.len() - 1,
        readings[0].len()
    );
}
