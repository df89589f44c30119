//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Convert a tally to f64, returning 0.0 if it somehow cannot be represented.
#[must_use]
pub fn count_to_f64(value: usize) -> f64 {
    cast::<usize, f64>(value).unwrap_or(0.0)
}

/// Share of `part` in `whole`, or 0.0 for an empty whole.
#[must_use]
pub fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    count_to_f64(part) / count_to_f64(whole)
}

/// Round to two decimal places for reporting, mapping non-finite values to 0.0.
#[must_use]
pub fn round_hundredths(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_handles_empty_whole() {
        assert!(ratio(3, 0).abs() < f64::EPSILON);
        assert!((ratio(1, 4) - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn rounds_to_hundredths() {
        assert!((round_hundredths(0.33333) - 0.33).abs() < f64::EPSILON);
        assert!((round_hundredths(0.666_67) - 0.67).abs() < f64::EPSILON);
        assert!(round_hundredths(f64::NAN).abs() < f64::EPSILON);
    }
}
