use crate::error::{PlotError, PlotResult};

/// Significant digits a label may request; more than 17 adds only noise to an `f64`.
pub const MAX_SIGNIFICANT_DIGITS: u8 = 17;
pub const DEFAULT_SIGNIFICANT_DIGITS: u8 = 3;

/// Fixed notation is used for decimal exponents in `MIN_FIXED_EXPONENT..precision`.
const MIN_FIXED_EXPONENT: i32 = -6;

pub fn validate_precision(precision: u8) -> PlotResult<u8> {
    if !(1..=MAX_SIGNIFICANT_DIGITS).contains(&precision) {
        return Err(PlotError::InvalidData(format!(
            "label precision must be in 1..={MAX_SIGNIFICANT_DIGITS}, got {precision}"
        )));
    }
    Ok(precision)
}

/// Renders `value` rounded to `precision` significant digits.
///
/// Fixed notation is used while the rounded decimal exponent stays within
/// `-6..precision`, exponential (`1.5e+21`) otherwise. Trailing fractional
/// zeros and a bare trailing point are dropped, so `20.0` prints as `20` and
/// `0.500` as `0.5`. A `precision` of zero is treated as one.
#[must_use]
pub fn format_significant(value: f64, precision: u8) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let digits = usize::from(precision.max(1));
    // Rust's exponential form already rounds to the requested digits, which
    // gives the exponent after rounding (9.995 -> 1.00e1 at three digits).
    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < MIN_FIXED_EXPONENT || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}e{sign}{}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        );
    }

    let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
    trim_fraction(&format!("{value:.decimals$}")).to_owned()
}

fn trim_fraction(text: &str) -> &str {
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.')
}
