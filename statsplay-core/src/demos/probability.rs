//! Picking coloured balls from a bag.

use serde::{Deserialize, Serialize};

use crate::chart::{ChartColor, ChartRequest, Series};
use crate::errors::{ensure_range, PlaygroundError};
use crate::output::{DemoOutput, Notice};
use crate::router::Concept;
use crate::session::SessionCounters;

use super::two_decimals;

pub const MIN_BALLS: u32 = 1;
pub const MAX_BALLS: u32 = 10;

/// Bag contents. Both counts lie in `[MIN_BALLS, MAX_BALLS]`, so the bag is
/// never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallCounts {
    red: u32,
    blue: u32,
}

impl BallCounts {
    pub fn new(red: u32, blue: u32) -> Result<Self, PlaygroundError> {
        ensure_range("red balls", red as f64, MIN_BALLS as f64, MAX_BALLS as f64)?;
        ensure_range("blue balls", blue as f64, MIN_BALLS as f64, MAX_BALLS as f64)?;
        Ok(Self { red, blue })
    }

    /// Builds counts from slider positions, clamping into range.
    pub fn clamped(red: u32, blue: u32) -> Self {
        Self {
            red: red.clamp(MIN_BALLS, MAX_BALLS),
            blue: blue.clamp(MIN_BALLS, MAX_BALLS),
        }
    }

    pub fn red(&self) -> u32 {
        self.red
    }

    pub fn blue(&self) -> u32 {
        self.blue
    }

    pub fn total(&self) -> u32 {
        self.red + self.blue
    }
}

impl Default for BallCounts {
    fn default() -> Self {
        Self { red: 3, blue: 2 }
    }
}

/// `(P(red), P(blue))` from the bag contents.
pub fn theoretical(counts: BallCounts) -> (f64, f64) {
    let total = counts.total() as f64;
    (counts.red as f64 / total, counts.blue as f64 / total)
}

/// Observed pick frequencies, or `None` before the first pick.
pub fn empirical(counters: &SessionCounters) -> Option<(f64, f64)> {
    if counters.total() == 0 {
        return None;
    }
    let total = counters.total() as f64;
    Some((counters.red_picked() as f64 / total, counters.blue_picked() as f64 / total))
}

pub fn probability_demo(counts: BallCounts, counters: &SessionCounters) -> DemoOutput {
    let (p_red, p_blue) = theoretical(counts);
    let mut output = DemoOutput::new(Concept::Probability.title())
        .stat("Red balls", counts.red.to_string())
        .stat("Blue balls", counts.blue.to_string())
        .stat("Theoretical P(Red)", two_decimals(p_red))
        .stat("Theoretical P(Blue)", two_decimals(p_blue));

    match empirical(counters) {
        Some((e_red, e_blue)) => {
            output = output
                .stat("Total picks", counters.total().to_string())
                .stat("Empirical P(Red)", two_decimals(e_red))
                .stat("Empirical P(Blue)", two_decimals(e_blue))
                .chart(pick_chart(counters));
        }
        None => {
            output = output.notice(Notice::info("Press 'Pick a ball' to start drawing."));
        }
    }
    output
}

fn pick_chart(counters: &SessionCounters) -> ChartRequest {
    let bars = Series::bars(
        "Picks",
        vec!["Red".to_string(), "Blue".to_string()],
        &[counters.red_picked() as f64, counters.blue_picked() as f64],
        ChartColor::Red,
    )
    .with_bar_colors(vec![ChartColor::Red, ChartColor::Blue]);

    ChartRequest::new("Pick counts").axes("Ball", "Count").series(bars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::NoticeLevel;
    use crate::session::{Ball, Session};

    #[test]
    fn test_counts_outside_slider_range_are_rejected() {
        assert!(BallCounts::new(0, 5).is_err());
        assert!(BallCounts::new(5, 11).is_err());
        assert!(BallCounts::new(1, 10).is_ok());
        assert_eq!(BallCounts::clamped(0, 99), BallCounts::new(1, 10).unwrap());
    }

    #[test]
    fn test_theoretical_three_red_two_blue() {
        let counts = BallCounts::new(3, 2).unwrap();
        assert_eq!(theoretical(counts), (0.6, 0.4));

        let mut session = Session::new(Some(5));
        for _ in 0..25 {
            session.pick_ball(counts);
            let output = probability_demo(counts, session.counters());
            assert_eq!(output.stat_value("Theoretical P(Red)"), Some("0.60"));
            assert_eq!(output.stat_value("Theoretical P(Blue)"), Some("0.40"));
        }
    }

    #[test]
    fn test_no_empirical_rates_or_chart_before_first_pick() {
        let output = probability_demo(BallCounts::default(), &SessionCounters::default());
        assert!(output.stat_value("Empirical P(Red)").is_none());
        assert!(output.chart.is_none());
        assert!(output.has_level(NoticeLevel::Info));
    }

    #[test]
    fn test_empirical_rates_follow_counters() {
        let mut counters = SessionCounters::default();
        counters.record(Ball::Red);
        counters.record(Ball::Red);
        counters.record(Ball::Red);
        counters.record(Ball::Blue);

        assert_eq!(empirical(&counters), Some((0.75, 0.25)));

        let output = probability_demo(BallCounts::default(), &counters);
        assert_eq!(output.stat_value("Empirical P(Red)"), Some("0.75"));
        let chart = output.chart.expect("chart after picks");
        assert_eq!(chart.series[0].points, vec![(1.0, 3.0), (2.0, 1.0)]);
        assert_eq!(chart.categories().unwrap(), ["Red", "Blue"]);
    }
}
