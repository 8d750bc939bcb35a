use crate::types::scoring::MAX_SCORE;

/// Log-scaled volume capped at 100: `min(100, multiplier * log10(value + 1))`.
///
/// The `+ 1` offset maps a zero count to a zero score instead of `-inf`.
pub fn cap_log(value: f64, multiplier: f64) -> f64 {
    (multiplier * (value + 1.0).log10()).min(MAX_SCORE)
}

/// Percentage ratio `numerator / denominator * 100 * boost`.
///
/// A zero denominator yields 0 so that empty records never produce NaN.
pub fn ratio_score(numerator: f64, denominator: f64, boost: f64, capped: bool) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let score = numerator / denominator * MAX_SCORE * boost;
    if capped {
        score.min(MAX_SCORE)
    } else {
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cap_log_is_zero_for_zero_input() {
        assert_eq!(cap_log(0.0, 20.0), 0.0);
        assert_eq!(cap_log(0.0, 15.0), 0.0);
    }

    #[test]
    fn cap_log_matches_formula_below_cap() {
        assert!((cap_log(99.0, 20.0) - 40.0).abs() < 1e-9);
        assert!((cap_log(999.0, 15.0) - 45.0).abs() < 1e-9);
    }

    #[test]
    fn cap_log_saturates_at_one_hundred() {
        assert_eq!(cap_log(1e12, 20.0), 100.0);
        assert_eq!(cap_log(f64::MAX, 15.0), 100.0);
    }

    #[test]
    fn ratio_score_zero_denominator_is_zero() {
        assert_eq!(ratio_score(0.0, 0.0, 1.0, false), 0.0);
        assert_eq!(ratio_score(25.0, 0.0, 1.2, true), 0.0);
    }

    #[test]
    fn ratio_score_caps_only_when_asked() {
        assert_eq!(ratio_score(9.0, 10.0, 1.2, true), 100.0);
        assert!((ratio_score(9.0, 10.0, 1.2, false) - 108.0).abs() < 1e-9);
        assert!((ratio_score(1.0, 4.0, 1.0, false) - 25.0).abs() < 1e-9);
    }
}
