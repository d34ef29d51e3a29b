//! Tick generation for one axis.
//!
//! Ticks live on the lattice of whole multiples of the segment, anchored so
//! that the axis zero, whenever it is inside the range, lands exactly on a
//! labeled tick. Minor ticks sit at the half-step midpoints.

use crate::canvas::{FontKind, TextMeasurer};
use crate::label::format_label;
use crate::range::AxisRange;

/// Hard ceiling on label precision growth; f64 carries no more than 17
/// significant digits.
const MAX_PRECISION: usize = 17;

/// A single tick on an axis.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Tick {
    /// Position in data coordinates.
    pub(crate) value: f64,
    /// Rendered label, empty for minor ticks.
    pub(crate) label: String,
    /// Major ticks carry labels and gridlines; minor ticks only a short mark.
    pub(crate) is_major: bool,
}

/// Ordered ticks plus measured label extents for one axis pass.
///
/// Recomputed on every grid redraw, never persisted.
#[derive(Debug, Clone)]
pub(crate) struct TickSet {
    /// Ticks in ascending value order.
    pub(crate) ticks: Vec<Tick>,
    /// Segment between adjacent major ticks.
    pub(crate) step: f64,
    /// Label precision in significant digits after collision bumps.
    pub(crate) precision: usize,
    /// Widest rendered label in pixels.
    pub(crate) max_label_width: f32,
    /// Tallest rendered label in pixels.
    pub(crate) max_label_height: f32,
}

/// Tick-aligned anchor at which the axis zero would fall if in range.
///
/// When zero is inside the range the anchor is zero itself; otherwise it is
/// the lattice point nearest the range on the zero side.
pub(crate) fn base_position(range: &AxisRange, step: f64) -> f64 {
    if range.contains(0.0) {
        0.0
    } else if range.min() > 0.0 {
        (range.min() / step).ceil() * step
    } else {
        (range.max() / step).floor() * step
    }
}

/// Walk the segment lattice across `range` and produce labeled ticks.
///
/// The walk starts at the first lattice point at or below the range minimum
/// and steps upward past the maximum; only ticks inside the range survive.
/// Whenever two consecutive labels collide textually the precision is bumped
/// by one and the walk restarts.
pub(crate) fn build_ticks(
    range: &AxisRange,
    step: f64,
    initial_precision: usize,
    measurer: &dyn TextMeasurer,
    label_size: f32,
) -> TickSet {
    let step = step.abs();
    if step == 0.0 || !step.is_finite() {
        return TickSet {
            ticks: Vec::new(),
            step,
            precision: initial_precision,
            max_label_width: 0.0,
            max_label_height: 0.0,
        };
    }

    // Wide enough to absorb accumulated float error even when the tick
    // values are many orders of magnitude larger than the step.
    let base = base_position(range, step);
    let epsilon = step * 1e-6;
    let start = base + ((range.min() - base) / step).floor() * step;
    let span_steps = (range.span() / step).ceil() as usize + 2;

    let mut precision = initial_precision.max(1);
    loop {
        let mut ticks: Vec<Tick> = Vec::new();
        let mut previous_label: Option<String> = None;
        let mut collided = false;

        for index in 0..=span_steps {
            let value = start + step * index as f64;
            if value >= range.min() - epsilon && value <= range.max() + epsilon {
                let label = format_label(value, precision);
                if previous_label.as_deref() == Some(label.as_str()) && precision < MAX_PRECISION {
                    collided = true;
                    break;
                }
                previous_label = Some(label.clone());
                ticks.push(Tick {
                    value,
                    label,
                    is_major: true,
                });
            }
            let midpoint = value + step * 0.5;
            if midpoint >= range.min() - epsilon && midpoint <= range.max() + epsilon {
                ticks.push(Tick {
                    value: midpoint,
                    label: String::new(),
                    is_major: false,
                });
            }
        }

        if collided {
            precision += 1;
            continue;
        }

        let mut max_width: f32 = 0.0;
        let mut max_height: f32 = 0.0;
        for tick in &ticks {
            if tick.is_major {
                let (width, height) = measurer.measure(&tick.label, FontKind::Monospace, label_size);
                max_width = max_width.max(width);
                max_height = max_height.max(height);
            }
        }

        return TickSet {
            ticks,
            step,
            precision,
            max_label_width: max_width,
            max_label_height: max_height,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::FontMetrics;

    struct FixedMeasurer;

    impl TextMeasurer for FixedMeasurer {
        fn measure(&self, text: &str, _font: FontKind, size: f32) -> (f32, f32) {
            (text.chars().count() as f32 * size * 0.6, size * 1.2)
        }

        fn metrics(&self, _font: FontKind, size: f32) -> FontMetrics {
            FontMetrics {
                ascent: size,
                descent: size * 0.2,
            }
        }
    }

    fn majors(set: &TickSet) -> Vec<f64> {
        set.ticks
            .iter()
            .filter(|tick| tick.is_major)
            .map(|tick| tick.value)
            .collect()
    }

    #[test]
    fn zero_lands_on_a_tick_when_in_range() {
        let range = AxisRange::new(-37.0, 63.0).unwrap();
        let set = build_ticks(&range, 20.0, 2, &FixedMeasurer, 11.0);
        assert!(
            majors(&set).iter().any(|value| value.abs() < 1e-9),
            "ticks {:?} miss zero",
            majors(&set)
        );
    }

    #[test]
    fn ticks_are_sorted_and_in_range() {
        let range = AxisRange::new(13.2, 47.8).unwrap();
        let set = build_ticks(&range, 10.0, 2, &FixedMeasurer, 11.0);
        let values: Vec<f64> = set.ticks.iter().map(|tick| tick.value).collect();
        assert!(!values.is_empty());
        for window in values.windows(2) {
            assert!(window[0] < window[1]);
        }
        for value in values {
            assert!(value >= 13.2 - 1e-6 && value <= 47.8 + 1e-6);
        }
    }

    #[test]
    fn minor_ticks_sit_at_half_steps() {
        let range = AxisRange::new(0.0, 100.0).unwrap();
        let set = build_ticks(&range, 25.0, 3, &FixedMeasurer, 11.0);
        let minors: Vec<f64> = set
            .ticks
            .iter()
            .filter(|tick| !tick.is_major)
            .map(|tick| tick.value)
            .collect();
        assert!(minors.iter().any(|value| (value - 12.5).abs() < 1e-9));
        assert!(minors.iter().any(|value| (value - 87.5).abs() < 1e-9));
        for minor in &minors {
            assert!(*minor >= 0.0 && *minor <= 100.0);
        }
    }

    #[test]
    fn colliding_labels_bump_precision() {
        // At 1 significant digit both 10000 and 12000 format as "1e4"; the
        // walk must refuse to emit two identical neighbors.
        let range = AxisRange::new(10000.0, 20000.0).unwrap();
        let set = build_ticks(&range, 2000.0, 1, &FixedMeasurer, 11.0);
        let labels: Vec<&str> = set
            .ticks
            .iter()
            .filter(|tick| tick.is_major)
            .map(|tick| tick.label.as_str())
            .collect();
        assert!(set.precision > 1);
        for window in labels.windows(2) {
            assert_ne!(window[0], window[1]);
        }
    }

    #[test]
    fn anchor_stays_on_lattice_outside_zero() {
        let range = AxisRange::new(103.0, 178.0).unwrap();
        assert_eq!(base_position(&range, 25.0), 125.0);
        let negative = AxisRange::new(-178.0, -103.0).unwrap();
        assert_eq!(base_position(&negative, 25.0), -125.0);
        let spanning = AxisRange::new(-10.0, 10.0).unwrap();
        assert_eq!(base_position(&spanning, 2.5), 0.0);
    }
}
