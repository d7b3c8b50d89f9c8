//! Currency rounding that survives binary floating point.
//!
//! `1.005` is stored as `1.00499999...`, so `(1.005 * 100.0).round()` gives
//! `100.0` and the cent is lost. Rounding here shifts the decimal point on
//! the value's decimal string instead: `"1.005e2"` parses to exactly `100.5`,
//! which rounds to `101`, and `"101e-2"` parses back to `1.01`. Parsing the
//! shifted string as a float also absorbs the last-digit noise of earlier
//! arithmetic, so `30.564999999999998` (a price times hours) rounds to
//! `30.57`.

/// Number of decimals used when the caller does not specify one.
pub const DEFAULT_PRECISION: u32 = 2;

// Below this magnitude the plain form of a float would be rounded away by
// `Display`, so the digits are written out with a fixed fraction instead.
const SMALL_VALUE_THRESHOLD: f64 = 1e-6;
const SMALL_VALUE_FRACTION_DIGITS: usize = 15;

/// Rounds `value` to `decimals` decimal places, halves away from zero.
///
/// Returns `None` for NaN and infinities, and when the shifted value
/// overflows (a `decimals` in the hundreds).
///
/// # Example
///
/// ```
/// use payroll_expressions::expressions::round;
///
/// assert_eq!(round(1.005, 2), Some(1.01));
/// assert_eq!(round(-0.125, 2), Some(-0.13));
/// assert_eq!(round(30.564999999999998, 2), Some(30.57));
/// assert_eq!(round(f64::NAN, 2), None);
/// ```
pub fn round(value: f64, decimals: u32) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    if value < 0.0 {
        return round(-value, decimals).map(|rounded| -rounded);
    }

    let shifted: f64 = format!("{}e{}", decimal_digits(value), decimals)
        .parse()
        .ok()?;
    if !shifted.is_finite() {
        return None;
    }
    format!("{}e-{}", shifted.round(), decimals).parse().ok()
}

/// [`round`] for optional inputs: a missing value or precision yields `None`.
pub fn round_opt(value: Option<f64>, decimals: Option<u32>) -> Option<f64> {
    round(value?, decimals?)
}

fn decimal_digits(value: f64) -> String {
    if value != 0.0 && value < SMALL_VALUE_THRESHOLD {
        format!("{:.*}", SMALL_VALUE_FRACTION_DIGITS, value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_half_rounds_up() {
        assert_eq!(round(0.125, 2), Some(0.13));
        assert_eq!(round(2.5, 0), Some(3.0));
    }

    #[test]
    fn test_half_rounds_away_from_zero_when_negative() {
        assert_eq!(round(-0.125, 2), Some(-0.13));
        assert_eq!(round(-2.5, 0), Some(-3.0));
    }

    /// 1.005 is stored as 1.00499999999999989...; the decimal digits still say 1.005.
    #[test]
    fn test_binary_representation_does_not_leak() {
        assert_eq!(round(1.005, 2), Some(1.01));
        assert_eq!(round(1.255, 2), Some(1.26));
        assert_eq!(round(0.1 + 0.2, 2), Some(0.3));
    }

    /// Products of cent prices and hours land one ulp below the half cent.
    #[test]
    fn test_arithmetic_noise_is_absorbed() {
        assert_eq!(round(30.564999999999998, 2), Some(30.57));
        assert_eq!(round(1513.0049999999999, 2), Some(1513.01));
        assert_eq!(round(51331.604999999996, 2), Some(51331.61));
        assert_eq!(round(-30.564999999999998, 2), Some(-30.57));
    }

    #[test]
    fn test_overflowing_shift_has_no_result() {
        assert_eq!(round(1.5, 400), None);
    }

    #[test]
    fn test_average_price_example() {
        assert_eq!(round(3800.0 / 120.0, 2), Some(31.67));
    }

    #[test]
    fn test_zero_decimals() {
        assert_eq!(round(31.4, 0), Some(31.0));
        assert_eq!(round(0.0, 2), Some(0.0));
    }

    #[test]
    fn test_small_values() {
        assert_eq!(round(0.0000004, 6), Some(0.0));
        assert_eq!(round(0.0000005, 6), Some(0.000001));
    }

    #[test]
    fn test_large_values_pass_through() {
        assert_eq!(round(1e30, 2), Some(1e30));
        assert_eq!(round(123_456_789.125, 2), Some(123_456_789.13));
    }

    #[test]
    fn test_non_finite_values_have_no_result() {
        assert_eq!(round(f64::NAN, 2), None);
        assert_eq!(round(f64::INFINITY, 2), None);
        assert_eq!(round(f64::NEG_INFINITY, 0), None);
    }

    #[test]
    fn test_round_opt_requires_both_inputs() {
        assert_eq!(round_opt(Some(0.125), Some(2)), Some(0.13));
        assert_eq!(round_opt(None, Some(2)), None);
        assert_eq!(round_opt(Some(0.125), None), None);
    }

    proptest! {
        #[test]
        fn prop_rounding_is_idempotent(value in -1e9f64..1e9f64, decimals in 0u32..6) {
            let once = round(value, decimals).unwrap();
            prop_assert_eq!(round(once, decimals), Some(once));
        }

        #[test]
        fn prop_rounding_is_symmetric(value in -1e9f64..1e9f64, decimals in 0u32..6) {
            let positive = round(value.abs(), decimals).unwrap();
            let negative = round(-value.abs(), decimals).unwrap();
            prop_assert_eq!(negative, -positive);
        }

        #[test]
        fn prop_rounding_stays_within_half_a_step(value in 0f64..1e6f64, decimals in 0u32..4) {
            let rounded = round(value, decimals).unwrap();
            let step = 10f64.powi(decimals as i32);
            prop_assert!((rounded - value).abs() <= 0.5 / step + 1e-9);
        }
    }
}
