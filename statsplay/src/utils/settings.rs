//! Locating and loading the user's configuration file.

use anyhow::Result;
use log::debug;
use std::path::{Path, PathBuf};

use statsplay_core::config::{merge_config, PlaygroundConfig};

const CONFIG_FILE_NAME: &str = "config.yaml";

/// Places a configuration file is looked for when none is given explicitly.
pub fn config_candidate_paths() -> Vec<PathBuf> {
    let base_dirs = vec![
        dirs::config_dir().map(|p| p.join("statsplay")),
        dirs::home_dir().map(|p| p.join(".statsplay")),
    ];

    base_dirs
        .into_iter()
        .flatten()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .collect()
}

/// Loads the embedded defaults and overlays the user's file.
///
/// An explicit path must exist; otherwise the first existing candidate path
/// is used, and having none is fine.
pub fn load_config(explicit: Option<&Path>) -> Result<PlaygroundConfig> {
    let defaults = PlaygroundConfig::load_default()?;

    let user_path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => config_candidate_paths().into_iter().find(|p| p.is_file()),
    };

    let user = match user_path {
        Some(path) => Some(PlaygroundConfig::load_from_file(&path)?),
        None => {
            debug!("No user configuration found; using defaults.");
            None
        }
    };

    Ok(merge_config(defaults, user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn candidates_end_in_config_yaml() {
        for path in config_candidate_paths() {
            assert_eq!(path.file_name().unwrap(), CONFIG_FILE_NAME);
        }
    }

    #[test_log::test]
    fn explicit_file_overrides_defaults() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "seed: 99\ndefaults:\n  red: 7")?;
        let config = load_config(Some(file.path()))?;
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.concept_params()?.balls.red(), 7);
        assert_eq!(config.concept_params()?.balls.blue(), 2);
        Ok(())
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        assert!(load_config(Some(Path::new("/no/such/statsplay.yaml"))).is_err());
    }
}
