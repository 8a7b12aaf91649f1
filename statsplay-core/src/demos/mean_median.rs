//! Mean and median of a user-supplied number list.

use statsplay_numeric::summarize;

use crate::chart::{ChartColor, ChartRequest, ReferenceLine, Series};
use crate::errors::PlaygroundError;
use crate::output::{DemoOutput, Notice};
use crate::router::Concept;

use super::two_decimals;

pub const DEFAULT_NUMBERS: &str = "2, 4, 6, 8";

/// Parses a comma-separated list of numbers.
///
/// Any token that fails to parse rejects the whole input; there are no
/// partial results.
pub fn parse_numbers(text: &str) -> Result<Vec<f64>, PlaygroundError> {
    if text.trim().is_empty() {
        return Err(PlaygroundError::EmptySample);
    }

    text.split(',')
        .map(str::trim)
        .map(|token| {
            token.parse::<f64>().map_err(|_| PlaygroundError::InvalidNumber {
                token: token.to_string(),
            })
        })
        .collect()
}

pub fn mean_median_demo(text: &str) -> DemoOutput {
    let heading = Concept::MeanMedian.title();

    let values = match parse_numbers(text) {
        Ok(values) => values,
        Err(e) => {
            log::debug!("Rejected number list {:?}: {}", text, e);
            return DemoOutput::new(heading)
                .notice(Notice::warning(format!("Please enter numbers separated by commas ({}).", e)));
        }
    };

    // parse_numbers never returns an empty vector.
    let Some(summary) = summarize(&values) else {
        return DemoOutput::new(heading).notice(Notice::warning(PlaygroundError::EmptySample.to_string()));
    };

    let categories = (1..=values.len()).map(|i| i.to_string()).collect();
    let chart = ChartRequest::new("Your numbers")
        .axes("Position", "Value")
        .series(Series::bars("Values", categories, &values, ChartColor::SkyBlue))
        .reference_line(
            ReferenceLine::horizontal(summary.mean, format!("Mean = {}", two_decimals(summary.mean)), ChartColor::Red)
                .dashed(),
        )
        .reference_line(ReferenceLine::horizontal(
            summary.median,
            format!("Median = {}", two_decimals(summary.median)),
            ChartColor::Green,
        ));

    DemoOutput::new(heading)
        .stat("Count", summary.count.to_string())
        .stat("Mean", two_decimals(summary.mean))
        .stat("Median", two_decimals(summary.median))
        .chart(chart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Orientation;
    use crate::output::NoticeLevel;

    #[test]
    fn test_default_input() {
        let output = mean_median_demo(DEFAULT_NUMBERS);
        assert_eq!(output.stat_value("Mean"), Some("5.00"));
        assert_eq!(output.stat_value("Median"), Some("5.00"));

        let chart = output.chart.expect("chart for valid input");
        assert_eq!(chart.series[0].points.len(), 4);
        assert!(chart.reference_lines.iter().all(|l| l.orientation == Orientation::Horizontal));
        assert_eq!(chart.reference_lines.len(), 2);
    }

    #[test]
    fn test_nan_token_gives_nan_for_both_statistics() {
        for text in ["nan, 1, 2", "1, 2, nan"] {
            let output = mean_median_demo(text);
            assert_eq!(output.stat_value("Mean"), Some("NaN"), "input {text:?}");
            assert_eq!(output.stat_value("Median"), Some("NaN"), "input {text:?}");
        }
    }

    #[test]
    fn test_whitespace_and_decimals_are_accepted() {
        assert_eq!(parse_numbers(" 1.5,2 ,  -3e1 ").unwrap(), vec![1.5, 2.0, -30.0]);
    }

    #[test]
    fn test_mean_and_median_definitions() {
        let output = mean_median_demo("1, 2, 3, 10");
        assert_eq!(output.stat_value("Mean"), Some("4.00"));
        assert_eq!(output.stat_value("Median"), Some("2.50"));

        let output = mean_median_demo("7, 1, 3");
        assert_eq!(output.stat_value("Median"), Some("3.00"));
    }

    #[test]
    fn test_one_bad_token_rejects_everything() {
        let err = parse_numbers("2, four, 6").unwrap_err();
        assert!(matches!(err, PlaygroundError::InvalidNumber { ref token } if token == "four"));

        let output = mean_median_demo("2, four, 6");
        assert!(output.chart.is_none());
        assert!(output.stats.is_empty());
        assert!(output.has_level(NoticeLevel::Warning));
    }

    #[test]
    fn test_empty_tokens_are_parse_failures() {
        assert!(parse_numbers("1,,2").is_err());
        assert!(parse_numbers("1, 2,").is_err());
        assert!(matches!(parse_numbers("   "), Err(PlaygroundError::EmptySample)));
    }
}
