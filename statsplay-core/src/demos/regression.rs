//! Least-squares line through noisy points on `y = 2x + 3`.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use statsplay_numeric::{evaluate_line, linspace, polyfit_linear, LinearFit};

use crate::chart::{ChartColor, ChartRequest, Series};
use crate::errors::{ensure_range, PlaygroundError};
use crate::output::{DemoOutput, Notice};
use crate::router::Concept;
use crate::session::{streams, Session};

use super::two_decimals;

pub const TRUE_SLOPE: f64 = 2.0;
pub const TRUE_INTERCEPT: f64 = 3.0;
pub const X_DOMAIN: (f64, f64) = (0.0, 10.0);

pub const POINTS_RANGE: (usize, usize) = (10, 200);
pub const NOISE_RANGE: (f64, f64) = (0.0, 2.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionParams {
    points: usize,
    noise: f64,
}

impl RegressionParams {
    pub fn new(points: usize, noise: f64) -> Result<Self, PlaygroundError> {
        ensure_range("number of points", points as f64, POINTS_RANGE.0 as f64, POINTS_RANGE.1 as f64)?;
        ensure_range("noise", noise, NOISE_RANGE.0, NOISE_RANGE.1)?;
        Ok(Self { points, noise })
    }

    pub fn clamped(points: usize, noise: f64) -> Self {
        Self {
            points: points.clamp(POINTS_RANGE.0, POINTS_RANGE.1),
            noise: noise.clamp(NOISE_RANGE.0, NOISE_RANGE.1),
        }
    }

    pub fn points(&self) -> usize {
        self.points
    }

    pub fn noise(&self) -> f64 {
        self.noise
    }
}

impl Default for RegressionParams {
    fn default() -> Self {
        Self { points: 50, noise: 0.5 }
    }
}

/// Evenly spaced x over `X_DOMAIN` and `y = 2x + 3 + N(0, noise)`.
pub fn generate<R: Rng + ?Sized>(params: RegressionParams, rng: &mut R) -> (Vec<f64>, Vec<f64>) {
    let xs = linspace(X_DOMAIN.0, X_DOMAIN.1, params.points);
    // A zero noise scale draws nothing and yields the exact line.
    let noise = Normal::new(0.0, params.noise).ok().filter(|_| params.noise > 0.0);
    let ys = xs
        .iter()
        .map(|&x| {
            let jitter = noise.as_ref().map_or(0.0, |n| n.sample(rng));
            TRUE_SLOPE * x + TRUE_INTERCEPT + jitter
        })
        .collect();
    (xs, ys)
}

pub fn regression_demo(params: RegressionParams, session: &Session) -> DemoOutput {
    let mut rng = session.sample_rng(streams::REGRESSION_NOISE);
    let (xs, ys) = generate(params, &mut rng);
    let heading = Concept::Regression.title();

    let Some(fit) = polyfit_linear(&xs, &ys) else {
        // Unreachable with slider-constrained parameters (n >= 10 distinct x).
        return DemoOutput::new(heading).notice(Notice::error("Could not fit a line to the generated points."));
    };

    DemoOutput::new(heading)
        .stat("Points", params.points.to_string())
        .stat("Noise", two_decimals(params.noise))
        .stat("Slope", two_decimals(fit.slope))
        .stat("Intercept", two_decimals(fit.intercept))
        .chart(regression_chart(&xs, &ys, &fit))
}

fn regression_chart(xs: &[f64], ys: &[f64], fit: &LinearFit) -> ChartRequest {
    let observed = xs.iter().copied().zip(ys.iter().copied()).collect();
    let fitted = xs.iter().map(|&x| (x, evaluate_line(fit, x))).collect();

    ChartRequest::new(format!("y = {:.2}x + {:.2}", fit.slope, fit.intercept))
        .axes("x", "y")
        .series(Series::scatter("Data", observed, ChartColor::SkyBlue))
        .series(Series::line("Fitted line", fitted, ChartColor::Red))
}
