//! Logging setup for the `statsplay` binary.
//!
//! The TUI owns the terminal, so log lines written to stderr would corrupt
//! the screen. Logging is therefore off unless asked for, and can be
//! redirected to a file.

use anyhow::{Context, Result};
use log::LevelFilter;
use std::fs::OpenOptions;
use std::path::Path;

/// Initialises `env_logger` on stderr.
///
/// With `None` the level comes from `RUST_LOG`. Calling this more than once is
/// harmless; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = builder_for(level);
    let _ = builder.try_init();
}

/// Initialises `env_logger` appending to `path`.
pub fn init_file_logger(level: Option<LevelFilter>, path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let mut builder = builder_for(level);
    builder.target(env_logger::Target::Pipe(Box::new(file)));
    builder.write_style(env_logger::WriteStyle::Never);
    let _ = builder.try_init();
    Ok(())
}

fn builder_for(level: Option<LevelFilter>) -> env_logger::Builder {
    match level {
        Some(level) => {
            let mut builder = env_logger::Builder::new();
            builder.filter_level(level);
            builder
        }
        None => env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")),
    }
}
