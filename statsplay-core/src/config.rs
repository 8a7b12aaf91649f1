//! Configuration management for `statsplay-core`.
//!
//! Every field is optional so a user file only needs to mention what it
//! changes. The built-in values live in `config/defaults.yaml` and are
//! overlaid by [`merge_config`].
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::demos::normal::NormalParams;
use crate::demos::probability::BallCounts;
use crate::demos::regression::RegressionParams;
use crate::demos::{mean_median, ConceptParams};
use crate::errors::PlaygroundError;

/// Which top level the shell starts in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Free-text concept box routed to the four demos.
    #[default]
    Concepts,
    /// Fixed topic list with quizzes.
    Topics,
}

/// Initial widget values.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DemoDefaults {
    /// Text pre-filled in the concept box.
    pub concept: Option<String>,
    /// Number list for the mean/median demo.
    pub numbers: Option<String>,
    pub red: Option<u32>,
    pub blue: Option<u32>,
    pub mu: Option<f64>,
    pub sigma: Option<f64>,
    pub points: Option<usize>,
    pub noise: Option<f64>,
}

/// Top-level configuration.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// Fixed RNG seed; random per run when absent.
    pub seed: Option<u64>,
    pub variant: Option<Variant>,
    pub dark_mode: Option<bool>,
    pub defaults: DemoDefaults,
}

impl PlaygroundConfig {
    /// Loads a configuration from a YAML file and validates it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .map_err(PlaygroundError::from)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: PlaygroundConfig = serde_yml::from_str(&text)
            .map_err(|e| PlaygroundError::Config(e.to_string()))
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid values in config file {}", path.display()))?;
        Ok(config)
    }

    /// Loads the embedded defaults.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default configuration from embedded string...");
        let default_yaml = include_str!("../config/defaults.yaml");
        let config: PlaygroundConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default configuration")?;
        Ok(config)
    }

    /// Checks every present value against its widget range.
    pub fn validate(&self) -> Result<(), PlaygroundError> {
        self.concept_params().map(|_| ())
    }

    pub fn variant(&self) -> Variant {
        self.variant.unwrap_or_default()
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode.unwrap_or(false)
    }

    pub fn initial_concept(&self) -> String {
        self.defaults.concept.clone().unwrap_or_default()
    }

    /// Widget values, falling back to the built-in defaults for absent fields.
    pub fn concept_params(&self) -> Result<ConceptParams, PlaygroundError> {
        let d = &self.defaults;
        let balls_default = BallCounts::default();
        let normal_default = NormalParams::default();
        let regression_default = RegressionParams::default();

        Ok(ConceptParams {
            numbers: d
                .numbers
                .clone()
                .unwrap_or_else(|| mean_median::DEFAULT_NUMBERS.to_string()),
            balls: BallCounts::new(
                d.red.unwrap_or(balls_default.red()),
                d.blue.unwrap_or(balls_default.blue()),
            )?,
            normal: NormalParams::new(
                d.mu.unwrap_or(normal_default.mu()),
                d.sigma.unwrap_or(normal_default.sigma()),
            )?,
            regression: RegressionParams::new(
                d.points.unwrap_or(regression_default.points()),
                d.noise.unwrap_or(regression_default.noise()),
            )?,
        })
    }
}

/// Overlays every value present in `user_config` on `default_config`.
pub fn merge_config(default_config: PlaygroundConfig, user_config: Option<PlaygroundConfig>) -> PlaygroundConfig {
    let Some(user) = user_config else {
        return default_config;
    };
    debug!("Merging user configuration over defaults.");

    let base = default_config.defaults;
    let over = user.defaults;
    PlaygroundConfig {
        seed: user.seed.or(default_config.seed),
        variant: user.variant.or(default_config.variant),
        dark_mode: user.dark_mode.or(default_config.dark_mode),
        defaults: DemoDefaults {
            concept: over.concept.or(base.concept),
            numbers: over.numbers.or(base.numbers),
            red: over.red.or(base.red),
            blue: over.blue.or(base.blue),
            mu: over.mu.or(base.mu),
            sigma: over.sigma.or(base.sigma),
            points: over.points.or(base.points),
            noise: over.noise.or(base.noise),
        },
    }
}
