//! Nice-number tick steps and label precision.
//!
//! Tick spacing is snapped onto the ladder `{10, 20, 25, 50, 100} * 10^k`,
//! so an axis always reads as 1, 2, 2.5, or 5 times a power of ten and never
//! as an arbitrary fraction of the data range.

/// Ladder of acceptable two-digit step magnitudes.
const STEP_LADDER: [f64; 5] = [10.0, 20.0, 25.0, 50.0, 100.0];

/// Compute a nice tick step for `range` data units spread over
/// `available_px`, aiming at one label per `budget_px` pixels.
///
/// The raw step `range * budget_px / available_px` is snapped to two
/// significant digits and then rounded down to the nearest ladder member,
/// falling back to the smallest member when nothing smaller fits. The sign
/// of the raw step is preserved.
pub fn nice_step(range: f64, available_px: f64, budget_px: f64) -> f64 {
    let raw = if available_px > 0.0 && budget_px > 0.0 {
        range * budget_px / available_px
    } else {
        range
    };
    let magnitude = raw.abs();
    if magnitude == 0.0 || !magnitude.is_finite() {
        return raw;
    }
    let sign = if raw < 0.0 { -1.0 } else { 1.0 };

    // Two leading digits: snapped lands in [10, 100].
    let exponent = magnitude.log10().floor();
    let scale = 10f64.powf(exponent - 1.0);
    let snapped = (magnitude / scale).round();

    let ladder = STEP_LADDER
        .iter()
        .rev()
        .copied()
        .find(|value| *value <= snapped)
        .unwrap_or(STEP_LADDER[0]);
    sign * ladder * scale
}

/// Number of significant digits needed to tell adjacent tick labels apart.
///
/// Derived from the order-of-magnitude gap between the tick `segment` and
/// the larger-magnitude endpoint of `[min, max]`, plus one. The result is
/// bumped by one when the second significant digit of the segment is
/// non-zero (a 25-style step needs the extra digit or "25" and "50" would
/// round to the same text as their neighbors at coarse precision).
pub fn required_precision(min: f64, max: f64, segment: f64) -> usize {
    if segment == 0.0 || min == max {
        return 1;
    }
    let largest = min.abs().max(max.abs());
    if largest == 0.0 {
        return 1;
    }
    let gap = largest.log10().floor() - segment.abs().log10().floor();
    let mut precision = gap.max(0.0) as usize + 1;
    if second_significant_digit(segment.abs()) != 0 {
        precision += 1;
    }
    precision
}

/// Second significant digit of a positive value, 0..=9.
fn second_significant_digit(value: f64) -> u32 {
    if value == 0.0 || !value.is_finite() {
        return 0;
    }
    let exponent = value.log10().floor();
    let leading = value / 10f64.powf(exponent);
    (((leading * 10.0).round() as u64) % 10) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mantissa(value: f64) -> f64 {
        let magnitude = value.abs();
        magnitude / 10f64.powf(magnitude.log10().floor())
    }

    #[test]
    fn step_mantissa_is_always_nice() {
        let ranges = [0.003, 0.7, 1.0, 17.3, 99.0, 512.0, 12345.6, 9.9e7];
        let budgets = [(100.0, 12.0), (240.0, 30.0), (640.0, 22.0), (80.0, 40.0)];
        for range in ranges {
            for (available, budget) in budgets {
                let step = nice_step(range, available, budget);
                let m = mantissa(step);
                let nice = [1.0, 2.0, 2.5, 5.0]
                    .iter()
                    .any(|candidate| (m - candidate).abs() < 1e-9);
                assert!(nice, "step {step} for range {range} has mantissa {m}");
            }
        }
    }

    #[test]
    fn hundred_over_five_labels_picks_twenty() {
        // Range [0, 100] with room for ~5 labels.
        let step = nice_step(100.0, 250.0, 50.0);
        assert!((step - 20.0).abs() < 1e-9);
    }

    #[test]
    fn hundred_over_four_labels_picks_twenty_five() {
        let step = nice_step(100.0, 200.0, 50.0);
        assert!((step - 25.0).abs() < 1e-9);
    }

    #[test]
    fn raw_step_rounds_down_to_ladder() {
        // raw = 17 -> snapped 17 -> ladder member 10.
        let step = nice_step(17.0, 100.0, 100.0);
        assert!((step - 10.0).abs() < 1e-9);
        // raw = 99 -> ladder member 50.
        let step = nice_step(99.0, 100.0, 100.0);
        assert!((step - 50.0).abs() < 1e-9);
    }

    #[test]
    fn sign_is_preserved() {
        let step = nice_step(-100.0, 250.0, 50.0);
        assert!((step + 20.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_pixel_budgets_fall_back_to_range() {
        assert_eq!(nice_step(0.0, 100.0, 10.0), 0.0);
        let step = nice_step(50.0, 0.0, 10.0);
        assert!((step - 50.0).abs() < 1e-9);
    }

    #[test]
    fn precision_counts_magnitude_gap() {
        assert_eq!(required_precision(0.0, 100.0, 20.0), 2);
        assert_eq!(required_precision(0.0, 1000.0, 10.0), 3);
    }

    #[test]
    fn precision_bumps_for_second_digit() {
        // 25-style segments need one digit more than 20-style ones.
        assert_eq!(required_precision(0.0, 100.0, 25.0), 3);
        assert_eq!(required_precision(0.0, 1.0, 0.25), 3);
    }

    #[test]
    fn precision_degenerate_inputs_return_one() {
        assert_eq!(required_precision(0.0, 100.0, 0.0), 1);
        assert_eq!(required_precision(5.0, 5.0, 1.0), 1);
        assert_eq!(required_precision(0.0, 0.0, 1.0), 1);
    }
}
