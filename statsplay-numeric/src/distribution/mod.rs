use libm::{exp, sqrt};

/// Evaluates the Gaussian probability density `f(x) = 1/(σ√(2π)) · exp(-½((x-μ)/σ)²)`.
///
/// `sigma` must be strictly positive; callers enforce this through their
/// parameter types, so a non-positive value yields `NaN` rather than a panic.
pub fn normal_pdf(x: f64, mu: f64, sigma: f64) -> f64 {
    if sigma <= 0.0 {
        return f64::NAN;
    }
    let z = (x - mu) / sigma;
    exp(-0.5 * z * z) / (sigma * sqrt(2.0 * core::f64::consts::PI))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_standard_normal_peak() {
        let peak = normal_pdf(0.0, 0.0, 1.0);
        assert!((peak - 0.398_942_280_401_432_7).abs() < EPSILON);
    }

    #[test]
    fn test_density_is_symmetric_around_mean() {
        let left = normal_pdf(1.5 - 0.7, 1.5, 2.0);
        let right = normal_pdf(1.5 + 0.7, 1.5, 2.0);
        assert!((left - right).abs() < EPSILON);
    }

    #[test]
    fn test_non_positive_sigma_is_nan() {
        assert!(normal_pdf(0.0, 0.0, 0.0).is_nan());
        assert!(normal_pdf(0.0, 0.0, -1.0).is_nan());
    }
}
