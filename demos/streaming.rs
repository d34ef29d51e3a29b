//! Streams synthetic sensor channels from a producer thread and prints what
//! the engine drew.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example streaming
//! ```

use std::f64::consts::TAU;

use scopechart::{
    AxisRange, Chart, ChartConfig, DrawOp, PlotStyle, RecordingCanvas, ScreenRect, SharedChart,
};

fn main() {
    env_logger::init();

    let chart = SharedChart::new(Chart::new(ChartConfig {
        content: ScreenRect::from_edges(0.0, 0.0, 800.0, 480.0),
        x_range: AxisRange::new(0.0, 2.0).expect("valid range"),
        y_range: AxisRange::new(-1.5, 1.5).expect("valid range"),
        style: PlotStyle::Line,
        sample_rate: 500.0,
        title: Some("scope".to_string()),
        x_title: Some("time [s]".to_string()),
        ..ChartConfig::default()
    }));

    let producer = chart.clone();
    let worker = std::thread::spawn(move || {
        let mut canvas = RecordingCanvas::new();
        for index in 0..1000 {
            let t = index as f64 / 500.0;
            producer.plot_next(&mut canvas, (TAU * 5.0 * t).sin(), 0);
            producer.plot_next(&mut canvas, (TAU * 3.0 * t).cos() * 0.8, 1);
            producer.plot_next(&mut canvas, (t * 40.0).sin() * (t * 7.0).cos() * 0.5, 2);
        }
        canvas
    });
    let canvas = worker.join().expect("producer thread");

    let mut lines = 0usize;
    let mut texts = 0usize;
    for op in canvas.ops() {
        match op {
            DrawOp::Line { .. } => lines += 1,
            DrawOp::Text { .. } => texts += 1,
            _ => {}
        }
    }

    let plot = chart.with(|chart| chart.plot_rect());
    println!(
        "plot rect ({}, {}) .. ({}, {})",
        plot.min.x, plot.min.y, plot.max.x, plot.max.y
    );
    println!(
        "{} ops recorded: {lines} line segments, {texts} labels and titles",
        canvas.ops().len()
    );
}
