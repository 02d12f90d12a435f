// ABOUTME: Safe ratio helpers with an explicit zero-denominator policy
// ABOUTME: Percentages round half away from zero; a zero denominator yields zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

/// `round(100 * numerator / denominator)`, or 0 when the denominator is 0
#[must_use]
pub fn percentage(numerator: usize, denominator: usize) -> u32 {
    if denominator == 0 {
        return 0;
    }
    (100.0 * numerator as f64 / denominator as f64).round() as u32
}

/// Arithmetic mean, or `None` for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Round to one decimal place
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places
#[must_use]
pub fn round_to_hundredth(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_zero_denominator() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(5, 0), 0);
    }

    #[test]
    fn test_percentage_rounds() {
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(4, 4), 100);
    }

    #[test]
    fn test_mean_and_rounding() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[2.0, 3.0]), Some(2.5));
        assert!((round_to_tenth(3.333_333) - 3.3).abs() < f64::EPSILON);
        assert!((round_to_hundredth(1.236) - 1.24).abs() < f64::EPSILON);
    }
}
