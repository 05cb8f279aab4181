const WHOLE_EPSILON: f64 = 1e-9;

/// Whether a float is a whole number within rounding noise.
pub fn is_whole(value: f64) -> bool {
    (value - value.round()).abs() < WHOLE_EPSILON
}

/// Render a quantity the way pantry rows do: whole numbers without a
/// decimal point, anything else with exactly one decimal place.
pub fn format_amount(value: f64) -> String {
    if is_whole(value) {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.1}")
    }
}

/// Round to one decimal place, the precision used for fractional
/// remainders in unit decomposition.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_whole() {
        assert_eq!(format_amount(3.0), "3");
        assert_eq!(format_amount(10.0), "10");
    }

    #[test]
    fn test_format_amount_fractional_one_decimal() {
        assert_eq!(format_amount(2.5), "2.5");
        assert_eq!(format_amount(0.1), "0.1");
    }

    #[test]
    fn test_format_amount_float_noise_reads_as_whole() {
        // 0.1 + 0.2 style residue must not leak into display
        assert_eq!(format_amount(2.9999999999), "3");
    }

    #[test]
    fn test_round_tenth() {
        assert_eq!(round_tenth(0.04), 0.0);
        assert_eq!(round_tenth(0.05), 0.1);
        assert_eq!(round_tenth(3.44), 3.4);
    }

    #[test]
    fn test_is_whole() {
        assert!(is_whole(5.0));
        assert!(!is_whole(5.4));
    }
}
