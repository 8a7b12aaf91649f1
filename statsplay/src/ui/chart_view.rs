//! Ratatui rendering of chart requests.
//!
//! Categorical bar charts without reference lines become a `BarChart`;
//! everything else is drawn on a `Chart` canvas, with reference lines turned
//! into extra datasets.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph},
};

use statsplay_core::{ChartColor, ChartRequest, Orientation, SeriesKind};

use crate::ui::theme::{ThemeEntry, ThemeMap, chart_color, style_for};

/// Dots used to draw a dashed reference line.
const DASH_POINTS: usize = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Bar,
    Line,
    Scatter,
}

/// One dataset ready for the `Chart` widget.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotLayer {
    pub name: String,
    pub kind: LayerKind,
    pub color: ChartColor,
    pub points: Vec<(f64, f64)>,
}

/// True when the request is best shown as a plain bar chart.
pub fn is_plain_bar_chart(chart: &ChartRequest) -> bool {
    chart.reference_lines.is_empty()
        && !chart.series.is_empty()
        && chart.series.iter().all(|s| s.kind == SeriesKind::Bars && !s.categories.is_empty())
}

/// Flattens series and reference lines into chart layers within the given bounds.
pub fn prepare_layers(chart: &ChartRequest, x_bounds: [f64; 2], y_bounds: [f64; 2]) -> Vec<PlotLayer> {
    let mut layers: Vec<PlotLayer> = chart
        .series
        .iter()
        .map(|s| PlotLayer {
            name: s.name.clone(),
            kind: match s.kind {
                SeriesKind::Bars | SeriesKind::Histogram => LayerKind::Bar,
                SeriesKind::Line => LayerKind::Line,
                SeriesKind::Scatter => LayerKind::Scatter,
            },
            color: s.color,
            points: s.points.clone(),
        })
        .collect();

    for line in &chart.reference_lines {
        let (start, end) = match line.orientation {
            Orientation::Horizontal => ((x_bounds[0], line.value), (x_bounds[1], line.value)),
            Orientation::Vertical => ((line.value, y_bounds[0]), (line.value, y_bounds[1])),
        };
        let (kind, points) = if line.dashed {
            (LayerKind::Scatter, dashes(start, end))
        } else {
            (LayerKind::Line, vec![start, end])
        };
        layers.push(PlotLayer { name: line.label.clone(), kind, color: line.color, points });
    }
    layers
}

fn dashes(start: (f64, f64), end: (f64, f64)) -> Vec<(f64, f64)> {
    (0..DASH_POINTS)
        .map(|i| {
            let t = i as f64 / (DASH_POINTS - 1) as f64;
            (start.0 + (end.0 - start.0) * t, start.1 + (end.1 - start.1) * t)
        })
        .collect()
}

fn axis_labels(bounds: [f64; 2]) -> Vec<Span<'static>> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    [bounds[0], mid, bounds[1]]
        .iter()
        .map(|v| Span::raw(format!("{:.1}", v)))
        .collect()
}

fn chart_block<'a>(title: &'a str, theme_map: &ThemeMap) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(style_for(ThemeEntry::Border, theme_map))
        .title(Span::styled(format!(" {} ", title), style_for(ThemeEntry::Heading, theme_map).add_modifier(Modifier::BOLD)))
}

/// Draws `chart` into `area`.
pub fn render_chart(f: &mut Frame, area: Rect, chart: &ChartRequest, theme_map: &ThemeMap) {
    if is_plain_bar_chart(chart) {
        render_bar_chart(f, area, chart, theme_map);
        return;
    }

    let x_bounds = chart.x_bounds();
    let y_bounds = chart.y_bounds();
    let layers = prepare_layers(chart, x_bounds, y_bounds);

    let datasets: Vec<Dataset> = layers
        .iter()
        .map(|layer| {
            let (graph_type, marker) = match layer.kind {
                LayerKind::Bar => (GraphType::Bar, Marker::HalfBlock),
                LayerKind::Line => (GraphType::Line, Marker::Braille),
                LayerKind::Scatter => (GraphType::Scatter, Marker::Dot),
            };
            Dataset::default()
                .name(layer.name.clone())
                .marker(marker)
                .graph_type(graph_type)
                .style(Style::default().fg(chart_color(layer.color)))
                .data(&layer.points)
        })
        .collect();

    let axis_style = style_for(ThemeEntry::Text, theme_map);
    let widget = Chart::new(datasets)
        .block(chart_block(&chart.title, theme_map))
        .x_axis(
            Axis::default()
                .title(chart.x_label.clone())
                .style(axis_style)
                .bounds(x_bounds)
                .labels(axis_labels(x_bounds)),
        )
        .y_axis(
            Axis::default()
                .title(chart.y_label.clone())
                .style(axis_style)
                .bounds(y_bounds)
                .labels(axis_labels(y_bounds)),
        );
    f.render_widget(widget, area);
}

fn render_bar_chart(f: &mut Frame, area: Rect, chart: &ChartRequest, theme_map: &ThemeMap) {
    let mut bars = Vec::new();
    for series in &chart.series {
        for (i, (&(_, y), category)) in series.points.iter().zip(&series.categories).enumerate() {
            let value = y.max(0.0).round() as u64;
            bars.push(
                Bar::default()
                    .value(value)
                    .label(Line::from(category.clone()))
                    .style(Style::default().fg(chart_color(series.bar_color(i))))
                    .value_style(Style::default().add_modifier(Modifier::BOLD)),
            );
        }
    }

    if bars.is_empty() {
        f.render_widget(Paragraph::new("No data yet.").block(chart_block(&chart.title, theme_map)), area);
        return;
    }

    let widget = BarChart::default()
        .block(chart_block(&chart.title, theme_map))
        .bar_width(9)
        .bar_gap(3)
        .data(BarGroup::default().bars(&bars));
    f.render_widget(widget, area);
}
