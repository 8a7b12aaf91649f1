//! Gaussian density over a fixed domain.
//!
//! The curve is always evaluated over `DOMAIN`, whatever μ and σ are. With
//! extreme parameters the curve can look flat or sit off to one side; that is
//! a known display limitation.

use serde::{Deserialize, Serialize};
use statsplay_numeric::{linspace, normal_pdf};

use crate::chart::{ChartColor, ChartRequest, ReferenceLine, Series};
use crate::errors::{ensure_range, PlaygroundError};
use crate::output::DemoOutput;
use crate::router::Concept;

use super::two_decimals;

pub const CURVE_POINTS: usize = 400;
pub const DOMAIN: (f64, f64) = (-10.0, 10.0);

pub const MU_RANGE: (f64, f64) = (-5.0, 5.0);
/// σ is bounded away from zero.
pub const SIGMA_RANGE: (f64, f64) = (0.1, 5.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalParams {
    mu: f64,
    sigma: f64,
}

impl NormalParams {
    pub fn new(mu: f64, sigma: f64) -> Result<Self, PlaygroundError> {
        ensure_range("mean", mu, MU_RANGE.0, MU_RANGE.1)?;
        ensure_range("standard deviation", sigma, SIGMA_RANGE.0, SIGMA_RANGE.1)?;
        Ok(Self { mu, sigma })
    }

    pub fn clamped(mu: f64, sigma: f64) -> Self {
        Self {
            mu: mu.clamp(MU_RANGE.0, MU_RANGE.1),
            sigma: sigma.clamp(SIGMA_RANGE.0, SIGMA_RANGE.1),
        }
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl Default for NormalParams {
    fn default() -> Self {
        Self { mu: 0.0, sigma: 1.0 }
    }
}

/// `CURVE_POINTS` samples of the density over `DOMAIN`.
pub fn normal_curve(params: NormalParams) -> Vec<(f64, f64)> {
    linspace(DOMAIN.0, DOMAIN.1, CURVE_POINTS)
        .into_iter()
        .map(|x| (x, normal_pdf(x, params.mu, params.sigma)))
        .collect()
}

pub fn normal_demo(params: NormalParams) -> DemoOutput {
    let peak = normal_pdf(params.mu, params.mu, params.sigma);
    let chart = ChartRequest::new(format!("N(μ={:.1}, σ={:.1})", params.mu, params.sigma))
        .axes("x", "Density")
        .x_range(DOMAIN.0, DOMAIN.1)
        .series(Series::line("PDF", normal_curve(params), ChartColor::Purple))
        .reference_line(ReferenceLine::vertical(params.mu, format!("μ = {:.1}", params.mu), ChartColor::Red).dashed());

    DemoOutput::new(Concept::NormalDistribution.title())
        .stat("Mean (μ)", two_decimals(params.mu))
        .stat("Std dev (σ)", two_decimals(params.sigma))
        .stat("Peak density", format!("{:.4}", peak))
        .chart(chart)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_spans_fixed_domain() {
        let curve = normal_curve(NormalParams::new(4.5, 0.3).unwrap());
        assert_eq!(curve.len(), CURVE_POINTS);
        assert_eq!(curve.first().unwrap().0, -10.0);
        assert_eq!(curve.last().unwrap().0, 10.0);
    }

    #[test]
    fn test_standard_normal_peak_at_zero() {
        let curve = normal_curve(NormalParams::default());
        let (x_peak, y_peak) = curve
            .iter()
            .copied()
            .fold((f64::NAN, f64::NEG_INFINITY), |best, p| if p.1 > best.1 { p } else { best });

        // 400 points on [-10, 10] do not include 0 exactly; the nearest grid
        // points are ±0.025.
        assert!(x_peak.abs() < 0.03);
        let expected = 1.0 / (2.0 * std::f64::consts::PI).sqrt();
        assert!((y_peak - expected).abs() < 1e-3);

        let output = normal_demo(NormalParams::default());
        assert_eq!(output.stat_value("Peak density"), Some("0.3989"));
    }

    #[test]
    fn test_sigma_bounded_above_zero() {
        assert!(NormalParams::new(0.0, 0.0).is_err());
        assert!(NormalParams::new(0.0, 0.1).is_ok());
        assert!(NormalParams::new(-5.5, 1.0).is_err());
        assert_eq!(NormalParams::clamped(9.0, 0.0), NormalParams::new(5.0, 0.1).unwrap());
    }

    #[test]
    fn test_vertical_reference_at_mu() {
        let output = normal_demo(NormalParams::new(-2.0, 1.5).unwrap());
        let chart = output.chart.unwrap();
        assert_eq!(chart.reference_lines[0].value, -2.0);
        assert_eq!(chart.x_bounds(), [-10.0, 10.0]);
    }
}
