//! Plain-terminal output for the headless commands.
//!
//! Colors come from the theme and are only emitted when the writer is a
//! terminal.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use statsplay_core::{ChartRequest, DemoOutput, Notice, NoticeLevel, SeriesKind};

use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Widest bar drawn by the text chart.
const TEXT_BAR_WIDTH: f64 = 40.0;

fn paint(text: &str, entry: ThemeEntry, theme: &ThemeMap, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match theme.get(&entry).and_then(|s| s.fg.as_ref()) {
        Some(fg) => text.color(fg.to_ansi_color()).to_string(),
        None => text.to_string(),
    }
}

fn notice_prefix(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Text => "",
        NoticeLevel::Info => "[info] ",
        NoticeLevel::Success => "[ok] ",
        NoticeLevel::Warning => "[warn] ",
        NoticeLevel::Error => "[error] ",
    }
}

pub fn print_notice<W: Write>(writer: &mut W, notice: &Notice, theme: &ThemeMap, color: bool) -> io::Result<()> {
    let line = format!("{}{}", notice_prefix(notice.level), notice.message);
    writeln!(writer, "{}", paint(&line, ThemeEntry::for_notice(notice.level), theme, color))
}

/// Prints heading, statistics, notices and a text sketch of the chart.
pub fn print_demo_output<W: Write>(writer: &mut W, output: &DemoOutput, theme: &ThemeMap, color: bool) -> io::Result<()> {
    writeln!(writer, "{}", paint(&output.heading, ThemeEntry::Heading, theme, color))?;

    let label_width = output.stats.iter().map(|s| s.label.chars().count()).max().unwrap_or(0);
    for stat in &output.stats {
        writeln!(
            writer,
            "  {:<width$}  {}",
            stat.label,
            paint(&stat.value, ThemeEntry::Stat, theme, color),
            width = label_width
        )?;
    }

    for notice in &output.notices {
        print_notice(writer, notice, theme, color)?;
    }

    if let Some(chart) = &output.chart {
        print_chart_sketch(writer, chart)?;
    }
    Ok(())
}

/// Bar series become rows of block characters; other series are summarised.
pub fn print_chart_sketch<W: Write>(writer: &mut W, chart: &ChartRequest) -> io::Result<()> {
    writeln!(writer, "Chart: {}", chart.title)?;

    for series in &chart.series {
        match series.kind {
            SeriesKind::Bars | SeriesKind::Histogram => {
                let max = series.points.iter().map(|p| p.1).fold(0.0_f64, f64::max);
                for (i, &(x, y)) in series.points.iter().enumerate() {
                    let label = series
                        .categories
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| format!("{:.1}", x));
                    let len = if max > 0.0 { (y / max * TEXT_BAR_WIDTH).round() as usize } else { 0 };
                    writeln!(writer, "  {:>8} | {} {}", label, "█".repeat(len), trim_number(y))?;
                }
            }
            SeriesKind::Line | SeriesKind::Scatter => {
                let kind = if series.kind == SeriesKind::Line { "line" } else { "scatter" };
                writeln!(writer, "  {} ({}, {} points)", series.name, kind, series.points.len())?;
            }
        }
    }

    for line in &chart.reference_lines {
        writeln!(writer, "  -- {}", line.label)?;
    }
    Ok(())
}

/// Integers print without a fractional part, everything else with up to 3 decimals.
fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.3}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;
    use statsplay_core::{ChartColor, Series};

    fn render(output: &DemoOutput) -> String {
        let mut buf = Vec::new();
        print_demo_output(&mut buf, output, &ThemeStyle::default_theme_map(), false).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn prints_stats_and_notices_without_color() {
        let output = DemoOutput::new("Mean & Median")
            .stat("Mean", "5.00")
            .notice(Notice::warning("careful"));
        let text = render(&output);
        assert!(text.contains("Mean & Median"));
        assert!(text.contains("Mean  5.00"));
        assert!(text.contains("[warn] careful"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn bar_rows_are_scaled_to_the_largest_value() {
        let chart = ChartRequest::new("Picks").series(Series::bars(
            "Picks",
            vec!["Red".into(), "Blue".into()],
            &[4.0, 2.0],
            ChartColor::Red,
        ));
        let mut buf = Vec::new();
        print_chart_sketch(&mut buf, &chart).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let red = text.lines().find(|l| l.contains("Red")).unwrap();
        let blue = text.lines().find(|l| l.contains("Blue")).unwrap();
        assert_eq!(red.matches('█').count(), 40);
        assert_eq!(blue.matches('█').count(), 20);
    }
}
