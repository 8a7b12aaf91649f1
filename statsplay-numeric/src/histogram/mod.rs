extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

/// Equal-width binning of a sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `bins + 1` ascending bin edges.
    pub edges: Vec<f64>,
    /// Number of samples per bin. Every bin is half-open except the last, which
    /// also includes the right edge.
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn bin_width(&self) -> f64 {
        if self.edges.len() < 2 {
            return 0.0;
        }
        self.edges[1] - self.edges[0]
    }

    /// Midpoint of every bin, for plotting bars.
    pub fn centers(&self) -> Vec<f64> {
        self.edges.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect()
    }

    /// Counts normalised so the histogram integrates to one.
    pub fn densities(&self) -> Vec<f64> {
        let total: usize = self.counts.iter().sum();
        let width = self.bin_width();
        if total == 0 || width == 0.0 {
            return vec![0.0; self.counts.len()];
        }
        self.counts
            .iter()
            .map(|&c| c as f64 / (total as f64 * width))
            .collect()
    }
}

/// Bins `values` into `bins` equal-width bins spanning the sample's range.
///
/// A sample whose values all coincide is given the range `[v - 0.5, v + 0.5]`
/// so the bins keep a positive width. Returns `None` for an empty sample or
/// zero bins.
pub fn histogram(values: &[f64], bins: usize) -> Option<Histogram> {
    if values.is_empty() || bins == 0 {
        return None;
    }

    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let edges: Vec<f64> = (0..=bins)
        .map(|i| if i == bins { hi } else { lo + width * i as f64 })
        .collect();

    let mut counts = vec![0usize; bins];
    for &v in values {
        let mut idx = ((v - lo) / width) as usize;
        if idx >= bins {
            idx = bins - 1;
        }
        counts[idx] += 1;
    }

    Some(Histogram { edges, counts })
}
