// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Arithmetic mean of `numbers`, or `0.0` when there are none.
///
/// Values are summed in sequence order with ordinary `f64` arithmetic, so NaN
/// and infinities propagate into the result.
///
/// # Example
/// ```
/// use keyed_transformer::transform::average;
///
/// assert_eq!(average(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
/// assert_eq!(average(&[]), 0.0);
/// ```
pub fn average(numbers: &[f64]) -> f64 {
    if numbers.is_empty() {
        return 0.0;
    }
    let sum: f64 = numbers.iter().sum();
    sum / numbers.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_table_driven() {
        let test_cases: Vec<(&str, Vec<f64>, f64)> = vec![
            ("empty", vec![], 0.0),
            ("single", vec![42.5], 42.5),
            ("one to five", vec![1.0, 2.0, 3.0, 4.0, 5.0], 3.0),
            ("negatives", vec![-1.0, -3.0], -2.0),
            ("mixed signs", vec![-10.0, 10.0], 0.0),
        ];

        for (name, numbers, expected) in test_cases {
            assert_eq!(average(&numbers), expected, "case: {}", name);
        }
    }

    #[test]
    fn test_average_propagates_nan() {
        assert!(average(&[1.0, f64::NAN, 3.0]).is_nan());
    }

    #[test]
    fn test_average_propagates_infinity() {
        assert_eq!(average(&[1.0, f64::INFINITY]), f64::INFINITY);
        assert!(average(&[f64::INFINITY, f64::NEG_INFINITY]).is_nan());
    }

    #[test]
    fn test_average_is_reproducible() {
        let numbers = [0.1, 0.2, 0.3, 1e-17, 7.0];
        assert_eq!(average(&numbers).to_bits(), average(&numbers).to_bits());
    }
}
