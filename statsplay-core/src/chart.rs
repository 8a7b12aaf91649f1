//! Chart requests.
//!
//! A `ChartRequest` is a backend-neutral description of one chart: data
//! series, reference lines, axis labels and colors. Handlers build one per
//! invocation and the rendering backend consumes it immediately.

use serde::{Deserialize, Serialize};
use statsplay_numeric::Histogram;

/// Named colors understood by every rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartColor {
    Red,
    Blue,
    Green,
    Orange,
    Purple,
    SkyBlue,
    Gray,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    /// One bar per point, typically over categories.
    Bars,
    /// Adjacent bars over bin centers.
    Histogram,
    Line,
    Scatter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub kind: SeriesKind,
    pub color: ChartColor,
    pub points: Vec<(f64, f64)>,
    /// Category names for bar series, one per point. Empty for numeric x axes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    /// Per-point colors for bar series; falls back to `color` when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bar_colors: Vec<ChartColor>,
}

impl Series {
    /// Bars at x = 1, 2, 3, ... labelled by `categories`.
    pub fn bars(name: impl Into<String>, categories: Vec<String>, values: &[f64], color: ChartColor) -> Self {
        let points = values
            .iter()
            .enumerate()
            .map(|(i, &v)| ((i + 1) as f64, v))
            .collect();
        Self {
            name: name.into(),
            kind: SeriesKind::Bars,
            color,
            points,
            categories,
            bar_colors: Vec::new(),
        }
    }

    /// Histogram bars at the bin centers, as raw counts or as densities.
    pub fn histogram(name: impl Into<String>, hist: &Histogram, density: bool, color: ChartColor) -> Self {
        let heights: Vec<f64> = if density {
            hist.densities()
        } else {
            hist.counts.iter().map(|&c| c as f64).collect()
        };
        Self {
            name: name.into(),
            kind: SeriesKind::Histogram,
            color,
            points: hist.centers().into_iter().zip(heights).collect(),
            categories: Vec::new(),
            bar_colors: Vec::new(),
        }
    }

    pub fn line(name: impl Into<String>, points: Vec<(f64, f64)>, color: ChartColor) -> Self {
        Self {
            name: name.into(),
            kind: SeriesKind::Line,
            color,
            points,
            categories: Vec::new(),
            bar_colors: Vec::new(),
        }
    }

    pub fn scatter(name: impl Into<String>, points: Vec<(f64, f64)>, color: ChartColor) -> Self {
        Self {
            name: name.into(),
            kind: SeriesKind::Scatter,
            color,
            points,
            categories: Vec::new(),
            bar_colors: Vec::new(),
        }
    }

    pub fn with_bar_colors(mut self, colors: Vec<ChartColor>) -> Self {
        self.bar_colors = colors;
        self
    }

    /// Color of the bar at `index`.
    pub fn bar_color(&self, index: usize) -> ChartColor {
        self.bar_colors.get(index).copied().unwrap_or(self.color)
    }

    fn is_bar_like(&self) -> bool {
        matches!(self.kind, SeriesKind::Bars | SeriesKind::Histogram)
    }

    /// Half the smallest gap between consecutive x values, used to pad bars.
    fn half_bar_width(&self) -> f64 {
        let gap = self
            .points
            .windows(2)
            .map(|w| (w[1].0 - w[0].0).abs())
            .filter(|g| *g > 0.0)
            .fold(f64::INFINITY, f64::min);
        if gap.is_finite() { gap / 2.0 } else { 0.5 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A horizontal line at `y = value` or a vertical line at `x = value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLine {
    pub orientation: Orientation,
    pub value: f64,
    pub label: String,
    pub color: ChartColor,
    pub dashed: bool,
}

impl ReferenceLine {
    pub fn horizontal(value: f64, label: impl Into<String>, color: ChartColor) -> Self {
        Self { orientation: Orientation::Horizontal, value, label: label.into(), color, dashed: false }
    }

    pub fn vertical(value: f64, label: impl Into<String>, color: ChartColor) -> Self {
        Self { orientation: Orientation::Vertical, value, label: label.into(), color, dashed: false }
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    pub reference_lines: Vec<ReferenceLine>,
    /// Fixed x domain. When absent the domain is derived from the data.
    pub x_range: Option<(f64, f64)>,
}

impl ChartRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            series: Vec::new(),
            reference_lines: Vec::new(),
            x_range: None,
        }
    }

    pub fn axes(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    pub fn series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn reference_line(mut self, line: ReferenceLine) -> Self {
        self.reference_lines.push(line);
        self
    }

    pub fn x_range(mut self, lo: f64, hi: f64) -> Self {
        self.x_range = Some((lo, hi));
        self
    }

    /// Category labels of the first bar series, if any.
    pub fn categories(&self) -> Option<&[String]> {
        self.series
            .iter()
            .find(|s| s.kind == SeriesKind::Bars && !s.categories.is_empty())
            .map(|s| s.categories.as_slice())
    }

    /// Horizontal extent covering every series point and vertical reference line.
    pub fn x_bounds(&self) -> [f64; 2] {
        if let Some((lo, hi)) = self.x_range {
            return [lo, hi];
        }

        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for s in &self.series {
            let pad = if s.is_bar_like() { s.half_bar_width() } else { 0.0 };
            for &(x, _) in &s.points {
                lo = lo.min(x - pad);
                hi = hi.max(x + pad);
            }
        }
        for line in self.reference_lines.iter().filter(|l| l.orientation == Orientation::Vertical) {
            lo = lo.min(line.value);
            hi = hi.max(line.value);
        }
        widen(lo, hi)
    }

    /// Vertical extent. Bar charts always include zero.
    pub fn y_bounds(&self) -> [f64; 2] {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for s in &self.series {
            if s.is_bar_like() {
                lo = lo.min(0.0);
                hi = hi.max(0.0);
            }
            for &(_, y) in &s.points {
                lo = lo.min(y);
                hi = hi.max(y);
            }
        }
        for line in self.reference_lines.iter().filter(|l| l.orientation == Orientation::Horizontal) {
            lo = lo.min(line.value);
            hi = hi.max(line.value);
        }
        let [lo, hi] = widen(lo, hi);
        // Headroom so the tallest point is not drawn on the border.
        [lo, hi + (hi - lo) * 0.05]
    }
}

fn widen(lo: f64, hi: f64) -> [f64; 2] {
    if !lo.is_finite() || !hi.is_finite() {
        return [0.0, 1.0];
    }
    if lo == hi {
        return [lo - 0.5, hi + 0.5];
    }
    [lo, hi]
}
