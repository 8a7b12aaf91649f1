use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use statsplay_core::config::{merge_config, PlaygroundConfig, Variant};
use statsplay_core::{BallCounts, ConceptParams, NormalParams, PlaygroundError, RegressionParams};

fn write_config(yaml: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml.as_bytes())?;
    Ok(file)
}

#[test]
fn test_load_partial_file() -> Result<()> {
    let file = write_config(
        r#"
variant: topics
defaults:
  numbers: "1, 2, 3"
  red: 9
"#,
    )?;
    let config = PlaygroundConfig::load_from_file(file.path())?;
    assert_eq!(config.variant(), Variant::Topics);
    assert_eq!(config.defaults.numbers.as_deref(), Some("1, 2, 3"));
    assert_eq!(config.defaults.red, Some(9));
    assert_eq!(config.defaults.blue, None);
    assert_eq!(config.seed, None);
    Ok(())
}

#[test]
fn test_merge_overlays_only_present_values() -> Result<()> {
    let file = write_config(
        r#"
seed: 1234
dark_mode: true
defaults:
  sigma: 2.5
  points: 120
"#,
    )?;
    let user = PlaygroundConfig::load_from_file(file.path())?;
    let merged = merge_config(PlaygroundConfig::load_default()?, Some(user));

    assert_eq!(merged.seed, Some(1234));
    assert!(merged.dark_mode());
    assert_eq!(merged.variant(), Variant::Concepts);

    let params = merged.concept_params()?;
    assert_eq!(params.normal, NormalParams::new(0.0, 2.5)?);
    assert_eq!(params.regression, RegressionParams::new(120, 0.5)?);
    assert_eq!(params.balls, BallCounts::new(3, 2)?);
    assert_eq!(params.numbers, "2, 4, 6, 8");
    Ok(())
}

#[test]
fn test_merge_without_user_config_keeps_defaults() -> Result<()> {
    let defaults = PlaygroundConfig::load_default()?;
    let merged = merge_config(defaults.clone(), None);
    assert_eq!(merged, defaults);
    assert_eq!(merged.concept_params()?, ConceptParams::default());
    Ok(())
}

#[test]
fn test_out_of_range_file_is_rejected() -> Result<()> {
    let file = write_config(
        r#"
defaults:
  blue: 11
"#,
    )?;
    let err = PlaygroundConfig::load_from_file(file.path()).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("blue balls"), "unexpected error: {message}");
    Ok(())
}

#[test]
fn test_malformed_yaml_is_rejected() -> Result<()> {
    let file = write_config("defaults: [not, a, map")?;
    let err = PlaygroundConfig::load_from_file(file.path()).unwrap_err();
    assert!(
        matches!(err.downcast_ref::<PlaygroundError>(), Some(PlaygroundError::Config(_))),
        "unexpected error: {err:#}"
    );
    Ok(())
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = PlaygroundConfig::load_from_file("/definitely/not/here.yaml").unwrap_err();
    assert!(
        matches!(err.downcast_ref::<PlaygroundError>(), Some(PlaygroundError::Io(_))),
        "unexpected error: {err:#}"
    );
}
