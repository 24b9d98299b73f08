//! Fixed significant-digit rendering for chances and expectations

/// Number of significant digits every reported figure carries
pub const SIGNIFICANT_DIGITS: usize = 4;

/// Render a value with exactly four significant digits.
///
/// Trailing zeros are kept (`100.0`, `60.50`). Values whose decimal exponent
/// after rounding falls outside `-4..4` switch to scientific notation with a
/// signed two-digit exponent (`1.000e+04`, `6.050e-05`).
///
/// Non-finite input is rendered as-is (`NaN`, `inf`); callers are expected to
/// reject it before formatting.
pub fn sig4(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return format!("{:.*}", SIGNIFICANT_DIGITS - 1, 0.0);
    }

    // Scientific form does the rounding; its exponent picks the layout so a
    // value like 9999.7 lands on 1.000e+04 rather than "10000".
    let sci = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return sci;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let digits = SIGNIFICANT_DIGITS as i32;
    if (-4..digits).contains(&exponent) {
        let decimals = (digits - 1 - exponent) as usize;
        format!("{:.*}", decimals, value)
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_trailing_zeros() {
        assert_eq!(sig4(100.0), "100.0");
        assert_eq!(sig4(12.3), "12.30");
        assert_eq!(sig4(60.5), "60.50");
        assert_eq!(sig4(1.0), "1.000");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(sig4(0.1234), "0.1234");
        assert_eq!(sig4(0.12345678), "0.1235");
        assert_eq!(sig4(0.001), "0.001000");
        assert_eq!(sig4(0.0001), "0.0001000");
    }

    #[test]
    fn test_scientific_bounds() {
        assert_eq!(sig4(1000.0), "1000");
        assert_eq!(sig4(10000.0), "1.000e+04");
        assert_eq!(sig4(0.00001), "1.000e-05");
        assert_eq!(sig4(0.0000605), "6.050e-05");
    }

    #[test]
    fn test_rounding_carries_into_next_decade() {
        assert_eq!(sig4(99.996), "100.0");
        assert_eq!(sig4(9999.7), "1.000e+04");
    }

    #[test]
    fn test_zero_and_negative() {
        assert_eq!(sig4(0.0), "0.000");
        assert_eq!(sig4(-0.0), "0.000");
        assert_eq!(sig4(-12.3), "-12.30");
    }

    #[test]
    fn test_non_finite_does_not_panic() {
        assert_eq!(sig4(f64::NAN), "NaN");
        assert_eq!(sig4(f64::INFINITY), "inf");
    }
}
