// statsplay/src/main.rs
//! Stats Playground entry point.
//!
//! With no subcommand the interactive shell starts; `explain` and `topic`
//! render a single demo to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use statsplay::cli::{Cli, Commands};
use statsplay::commands::{explain::run_explain, topic::run_topic};
use statsplay::logger;
use statsplay::tui::{app::App, run_tui};
use statsplay::ui::theme::build_themes;
use statsplay::utils::settings::load_config;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // Stderr logging would corrupt the alternate screen, so the shell stays
    // quiet unless asked; headless commands honour RUST_LOG.
    let interactive = args.command.is_none();
    let level = match (args.debug, interactive) {
        (true, _) => Some(LevelFilter::Debug),
        (false, true) if args.log_file.is_none() => Some(LevelFilter::Off),
        _ => None,
    };
    match &args.log_file {
        Some(path) => logger::init_file_logger(level, path)?,
        None => logger::init_logger(level),
    }

    let mut config = load_config(args.config.as_deref()).context("Failed to load configuration")?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(variant) = args.variant {
        config.variant = Some(variant.into());
    }
    if args.dark {
        config.dark_mode = Some(true);
    }

    let themes = build_themes(args.theme.as_ref()).context("Theme error")?;

    match &args.command {
        Some(Commands::Explain(cmd)) => run_explain(cmd, &config, themes.select(config.dark_mode())),
        Some(Commands::Topic(cmd)) => run_topic(cmd, &config, themes.select(config.dark_mode())),
        None => {
            let app = App::new(&config).context("Invalid configured defaults")?;
            run_tui(app, themes).await.context("TUI failure")
        }
    }
}
