//! Concept router.
//!
//! Maps free text typed by the user to one of the four demo handlers. The
//! classification is a pure function; invoking the handler is the caller's job.

use serde::{Deserialize, Serialize};

/// Help text shown when no keyword matches.
pub const HELP_MESSAGE: &str =
    "Try one of: 'probability', 'mean', 'median', 'normal', 'distribution', 'regression'.";

/// The demo a piece of free text selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Concept {
    Probability,
    MeanMedian,
    NormalDistribution,
    Regression,
    Unrecognized,
}

impl Concept {
    /// Heading used by the handler output.
    pub fn title(&self) -> &'static str {
        match self {
            Concept::Probability => "Probability: Picking Balls",
            Concept::MeanMedian => "Mean & Median",
            Concept::NormalDistribution => "Normal Distribution",
            Concept::Regression => "Linear Regression",
            Concept::Unrecognized => "Unknown Concept",
        }
    }

    /// Keywords that select this concept, in the order they are tested.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Concept::Probability => &["prob"],
            Concept::MeanMedian => &["mean", "median"],
            Concept::NormalDistribution => &["normal", "distribution"],
            Concept::Regression => &["regression"],
            Concept::Unrecognized => &[],
        }
    }
}

/// Priority order of the substring tests. First match wins.
const PRIORITY: [Concept; 4] = [
    Concept::Probability,
    Concept::MeanMedian,
    Concept::NormalDistribution,
    Concept::Regression,
];

/// Classifies `text` by case-insensitive substring match.
pub fn classify(text: &str) -> Concept {
    let lowered = text.to_lowercase();
    PRIORITY
        .iter()
        .copied()
        .find(|concept| concept.keywords().iter().any(|kw| lowered.contains(kw)))
        .unwrap_or(Concept::Unrecognized)
}

/// Like [`classify`], but returns `None` for blank input so dispatch is skipped.
pub fn route(text: &str) -> Option<Concept> {
    if text.trim().is_empty() {
        return None;
    }
    let concept = classify(text);
    log::debug!("Routed concept text {:?} to {:?}", text, concept);
    Some(concept)
}
