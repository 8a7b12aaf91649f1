extern crate alloc;
use alloc::vec::Vec;

/// Central tendency of a numeric sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// The arithmetic mean of the sample.
    pub mean: f64,
    /// The middle value, or the average of the two middle values for even-length samples.
    pub median: f64,
    pub count: usize,
}

/// Arithmetic mean of a slice. Returns `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median of a slice. Returns `None` for an empty slice and NaN when any
/// value is NaN, so it agrees with [`mean`].
///
/// The input is copied before sorting, so callers keep their original order
/// (the bar chart of raw values depends on it).
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    if values.iter().any(|v| v.is_nan()) {
        return Some(f64::NAN);
    }

    let mut sorted: Vec<f64> = values.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Computes mean and median in one pass over the caller's data.
pub fn summarize(values: &[f64]) -> Option<Summary> {
    Some(Summary {
        mean: mean(values)?,
        median: median(values)?,
        count: values.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate alloc;
    use alloc::vec;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_empty_sample_has_no_summary() {
        assert_eq!(mean(&[]), None);
        assert_eq!(median(&[]), None);
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn test_even_length_median_averages_middle_pair() {
        let values = vec![2.0, 4.0, 6.0, 8.0];
        let summary = summarize(&values).unwrap();
        assert!((summary.mean - 5.0).abs() < EPSILON);
        assert!((summary.median - 5.0).abs() < EPSILON);
        assert_eq!(summary.count, 4);
    }

    #[test]
    fn test_nan_anywhere_makes_median_nan() {
        assert!(median(&[f64::NAN, 1.0, 2.0]).unwrap().is_nan());
        assert!(median(&[1.0, 2.0, f64::NAN]).unwrap().is_nan());
        let summary = summarize(&[1.0, f64::NAN, 2.0]).unwrap();
        assert!(summary.mean.is_nan() && summary.median.is_nan());
    }

    #[test]
    fn test_odd_length_median_is_middle_element() {
        assert_eq!(median(&[9.0, 1.0, 5.0]), Some(5.0));
    }

    #[test]
    fn test_median_ignores_input_order() {
        let values = vec![8.0, 2.0, 6.0, 4.0];
        assert_eq!(median(&values), Some(5.0));
        // Caller's slice is untouched.
        assert_eq!(values, vec![8.0, 2.0, 6.0, 4.0]);
    }

    #[test]
    fn test_outlier_moves_mean_more_than_median() {
        let scores = [45.0, 50.0, 55.0, 60.0, 65.0, 70.0, 75.0, 80.0, 85.0, 90.0];
        let with_outlier = [45.0, 50.0, 55.0, 60.0, 65.0, 70.0, 75.0, 80.0, 85.0, 90.0, 100.0];

        let before = summarize(&scores).unwrap();
        let after = summarize(&with_outlier).unwrap();

        let mean_shift = (after.mean - before.mean).abs();
        let median_shift = (after.median - before.median).abs();
        assert!(mean_shift > median_shift);
    }
}
