//! Compact numeric label formatting.

/// Format a tick value at the given number of significant digits.
///
/// Both a fixed-decimal and a scientific rendering are produced, trailing
/// zeros and a trailing decimal point stripped from each. The decimal form
/// wins unless it is 5 or more characters long (6 or more when it starts
/// with a minus sign), keeping axis labels compact and consistent in width.
pub fn format_label(value: f64, precision: usize) -> String {
    let precision = precision.max(1);
    if !value.is_finite() {
        return value.to_string();
    }
    let decimal = decimal_form(value, precision);
    let limit = if decimal.starts_with('-') { 6 } else { 5 };
    if decimal.len() >= limit {
        scientific_form(value, precision)
    } else {
        decimal
    }
}

/// Fixed-decimal rendering at `precision` significant digits.
fn decimal_form(value: f64, precision: usize) -> String {
    let decimals = if value == 0.0 {
        0
    } else {
        let magnitude = value.abs().log10().floor() as i64;
        (precision as i64 - 1 - magnitude).clamp(0, 17) as usize
    };
    strip_trailing(format!("{value:.decimals$}"))
}

/// Scientific rendering at `precision` significant digits.
fn scientific_form(value: f64, precision: usize) -> String {
    let mantissa_digits = precision.saturating_sub(1);
    let formatted = format!("{value:.mantissa_digits$e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            format!("{}e{exponent}", strip_trailing(mantissa.to_string()))
        }
        None => formatted,
    }
}

/// Strip trailing zeros and a trailing decimal point.
fn strip_trailing(text: String) -> String {
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
