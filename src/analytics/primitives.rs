//! Shared scoring primitives used by every view that color-codes a bias
//! value or aggregates per-source scores.

use super::{BIAS_HIGH_THRESHOLD, BIAS_MEDIUM_THRESHOLD};

/// Color band for a bias index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiasCategory {
    High,
    Medium,
    Low,
}

/// Maps a bias index to its color band.
///
/// The thresholds are strict: exactly 70 is `Medium` and exactly 40 is
/// `Low`. Every place that colors a bias value goes through this one
/// function so the bands stay consistent across views. A missing score
/// counts as 0 and lands in `Low`.
pub fn categorize(bias_index: Option<f64>) -> BiasCategory {
    let value = bias_index.unwrap_or(0.0);
    if value > BIAS_HIGH_THRESHOLD {
        BiasCategory::High
    } else if value > BIAS_MEDIUM_THRESHOLD {
        BiasCategory::Medium
    } else {
        BiasCategory::Low
    }
}

/// Averages a sequence of optional scores.
///
/// Missing values coerce to 0 before averaging, and an empty sequence
/// averages to 0 rather than NaN.
pub fn average(values: &[Option<f64>]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: f64 = values.iter().map(|v| v.unwrap_or(0.0)).sum();
    sum / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_bands() {
        assert_eq!(categorize(Some(80.0)), BiasCategory::High);
        assert_eq!(categorize(Some(70.1)), BiasCategory::High);
        assert_eq!(categorize(Some(55.0)), BiasCategory::Medium);
        assert_eq!(categorize(Some(40.1)), BiasCategory::Medium);
        assert_eq!(categorize(Some(30.0)), BiasCategory::Low);
        assert_eq!(categorize(Some(0.0)), BiasCategory::Low);
    }

    #[test]
    fn test_categorize_exact_boundaries_fall_to_lower_band() {
        assert_eq!(categorize(Some(70.0)), BiasCategory::Medium);
        assert_eq!(categorize(Some(40.0)), BiasCategory::Low);
    }

    #[test]
    fn test_categorize_missing_is_low() {
        assert_eq!(categorize(None), BiasCategory::Low);
    }

    #[test]
    fn test_average_empty_is_zero() {
        assert_eq!(average(&[]), 0.0);
    }

    #[test]
    fn test_average_coerces_missing_to_zero() {
        assert_eq!(average(&[None, Some(80.0)]), 40.0);
    }

    #[test]
    fn test_average_plain() {
        assert_eq!(average(&[Some(80.0), Some(30.0)]), 55.0);
    }
}
