//! The four concept demos.
//!
//! Each handler takes its widget parameters (and the session where needed)
//! and returns a [`DemoOutput`]. Handlers never touch the terminal.

pub mod mean_median;
pub mod normal;
pub mod probability;
pub mod regression;

use crate::output::{DemoOutput, Notice};
use crate::router::{Concept, HELP_MESSAGE};
use crate::session::Session;

use mean_median::mean_median_demo;
use normal::{normal_demo, NormalParams};
use probability::{probability_demo, BallCounts};
use regression::{regression_demo, RegressionParams};

/// Current value of every concept widget.
#[derive(Debug, Clone, PartialEq)]
pub struct ConceptParams {
    pub numbers: String,
    pub balls: BallCounts,
    pub normal: NormalParams,
    pub regression: RegressionParams,
}

impl Default for ConceptParams {
    fn default() -> Self {
        Self {
            numbers: mean_median::DEFAULT_NUMBERS.to_string(),
            balls: BallCounts::default(),
            normal: NormalParams::default(),
            regression: RegressionParams::default(),
        }
    }
}

/// Runs the handler `concept` selects. Recomputes display values only; the
/// session is never mutated here.
pub fn dispatch(concept: Concept, params: &ConceptParams, session: &Session) -> DemoOutput {
    match concept {
        Concept::Probability => probability_demo(params.balls, session.counters()),
        Concept::MeanMedian => mean_median_demo(&params.numbers),
        Concept::NormalDistribution => normal_demo(params.normal),
        Concept::Regression => regression_demo(params.regression, session),
        Concept::Unrecognized => unrecognized(),
    }
}

fn unrecognized() -> DemoOutput {
    DemoOutput::new(Concept::Unrecognized.title()).notice(Notice::info(HELP_MESSAGE))
}

/// Formats a statistic the way every handler displays it.
pub(crate) fn two_decimals(value: f64) -> String {
    format!("{:.2}", value)
}
