//! `statsplay explain`: route free text and print the demo.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{self, Write};

use statsplay_core::{
    explain, BallCounts, ConceptParams, NormalParams, PlaygroundConfig, RegressionParams, Session,
};

use crate::cli::ExplainCommand;
use crate::commands::print_to_stdout;
use crate::ui::theme::ThemeMap;

/// Widget values from the configuration with command-line overrides applied.
///
/// Overrides go through the range-checked constructors, so an out-of-range
/// value is an error rather than silently clamped.
pub fn resolve_params(cmd: &ExplainCommand, config: &PlaygroundConfig) -> Result<ConceptParams> {
    let base = config.concept_params().context("Invalid configured defaults")?;

    let numbers = cmd.numbers.clone().unwrap_or(base.numbers);
    let balls = BallCounts::new(
        cmd.red.unwrap_or(base.balls.red()),
        cmd.blue.unwrap_or(base.balls.blue()),
    )?;
    let normal = NormalParams::new(
        cmd.mu.unwrap_or(base.normal.mu()),
        cmd.sigma.unwrap_or(base.normal.sigma()),
    )?;
    let regression = RegressionParams::new(
        cmd.points.map_or(base.regression.points(), |p| p as usize),
        cmd.noise.unwrap_or(base.regression.noise()),
    )?;

    Ok(ConceptParams { numbers, balls, normal, regression })
}

pub fn run_explain(cmd: &ExplainCommand, config: &PlaygroundConfig, theme_map: &ThemeMap) -> Result<()> {
    info!("Explaining concept text {:?}", cmd.concept);
    let params = resolve_params(cmd, config)?;
    debug!("Resolved parameters: {:?}", params);

    let mut session = Session::new(config.seed);
    match explain(&cmd.concept, &params, cmd.picks, &mut session) {
        Some(output) => print_to_stdout(&output, cmd.json, theme_map),
        None if cmd.json => {
            writeln!(io::stdout(), "null")?;
            Ok(())
        }
        None => {
            writeln!(io::stdout(), "Nothing to explain: the concept text is blank.")?;
            Ok(())
        }
    }
}
