extern crate alloc;
use alloc::vec::Vec;

/// Returns `count` evenly spaced values over the closed interval `[start, end]`.
///
/// Both endpoints are included. A count of one yields `[start]`, zero yields an
/// empty vector.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => alloc::vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            // Pin the last point so accumulated rounding never overshoots the domain.
            values[count - 1] = end;
            values
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_includes_both_endpoints() {
        let xs = linspace(-10.0, 10.0, 400);
        assert_eq!(xs.len(), 400);
        assert_eq!(xs[0], -10.0);
        assert_eq!(xs[399], 10.0);
    }

    #[test]
    fn test_linspace_is_evenly_spaced() {
        let xs = linspace(0.0, 10.0, 11);
        for (i, x) in xs.iter().enumerate() {
            assert!((x - i as f64).abs() < 1e-12);
        }
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 7.0, 1), alloc::vec![3.0]);
    }
}
