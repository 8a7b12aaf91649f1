//! This file defines the command-line interface (CLI) for the statsplay
//! application. With no subcommand the interactive shell starts.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use statsplay_core::{Topic, Variant};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "statsplay",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Stats Playground: interactive statistics demos in your terminal",
    long_about = "Stats Playground explains mean and median, probability, the normal distribution and linear regression with live charts, adjustable parameters and short quizzes. Run without a subcommand for the interactive terminal UI."
)]
pub struct Cli {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Write log output to this file instead of stderr.
    #[arg(long = "log-file", value_name = "FILE", global = true, help = "Write log output to a file.")]
    pub log_file: Option<PathBuf>,

    /// Path to a YAML configuration file with initial widget values.
    #[arg(long = "config", value_name = "FILE", env = "STATSPLAY_CONFIG", global = true, help = "Path to a YAML configuration file.")]
    pub config: Option<PathBuf>,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// Which top level to start in.
    #[arg(long = "variant", value_enum, help = "Start in the free-text concept view or the fixed topic view.")]
    pub variant: Option<VariantChoice>,

    /// Start with the dark theme.
    #[arg(long = "dark", help = "Start in dark mode.")]
    pub dark: bool,

    /// Fix the random seed so picks and samples are reproducible.
    #[arg(long = "seed", value_name = "N", global = true, help = "Fix the random seed.")]
    pub seed: Option<u64>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// All available commands for the `statsplay` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Routes a concept and prints the demo output without the interactive UI.
    #[command(about = "Explain a concept (probability, mean, median, normal, regression) without the UI.")]
    Explain(ExplainCommand),

    /// Prints one of the fixed topic lessons, optionally checking a quiz answer.
    #[command(about = "Show a fixed topic lesson and optionally check a quiz answer.")]
    Topic(TopicCommand),
}

/// Arguments for the `explain` command.
#[derive(Args, Debug)]
pub struct ExplainCommand {
    /// Free text naming the concept, e.g. "what is a median?".
    #[arg(value_name = "TEXT", help = "Free text naming the concept.")]
    pub concept: String,

    /// Comma-separated numbers for the mean/median demo.
    #[arg(long = "numbers", value_name = "LIST", allow_hyphen_values = true, help = "Comma-separated numbers for the mean/median demo.")]
    pub numbers: Option<String>,

    /// Red balls in the bag (1-10).
    #[arg(long = "red", value_name = "N", value_parser = clap::value_parser!(u32).range(1..=10))]
    pub red: Option<u32>,

    /// Blue balls in the bag (1-10).
    #[arg(long = "blue", value_name = "N", value_parser = clap::value_parser!(u32).range(1..=10))]
    pub blue: Option<u32>,

    /// Number of balls to pick before reporting.
    #[arg(long = "picks", value_name = "N", default_value_t = 0)]
    pub picks: u32,

    /// Mean of the normal distribution (-5 to 5).
    #[arg(long = "mu", value_name = "X", allow_hyphen_values = true)]
    pub mu: Option<f64>,

    /// Standard deviation of the normal distribution (0.1 to 5).
    #[arg(long = "sigma", value_name = "X")]
    pub sigma: Option<f64>,

    /// Number of regression points (10-200).
    #[arg(long = "points", value_name = "N", value_parser = clap::value_parser!(u64).range(10..=200))]
    pub points: Option<u64>,

    /// Noise scale for the regression demo (0 to 2).
    #[arg(long = "noise", value_name = "X")]
    pub noise: Option<f64>,

    /// Print the full output, chart data included, as JSON.
    #[arg(long = "json", help = "Print the output as JSON.")]
    pub json: bool,
}

/// Arguments for the `topic` command.
#[derive(Args, Debug)]
pub struct TopicCommand {
    #[arg(value_enum, value_name = "TOPIC")]
    pub topic: TopicChoice,

    /// Quiz answer to check, e.g. "Mean" or "0.5".
    #[arg(long = "answer", value_name = "OPTION")]
    pub answer: Option<String>,

    /// Lesson text for the custom-lesson topic.
    #[arg(long = "lesson", value_name = "TEXT")]
    pub lesson: Option<String>,

    /// Print the output as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum VariantChoice {
    /// Free-text concept box.
    Concepts,
    /// Fixed topics with quizzes.
    Topics,
}

impl From<VariantChoice> for Variant {
    fn from(choice: VariantChoice) -> Self {
        match choice {
            VariantChoice::Concepts => Variant::Concepts,
            VariantChoice::Topics => Variant::Topics,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum TopicChoice {
    MeanMedian,
    Probability,
    Distributions,
    Lesson,
}

impl From<TopicChoice> for Topic {
    fn from(choice: TopicChoice) -> Self {
        match choice {
            TopicChoice::MeanMedian => Topic::MeanMedian,
            TopicChoice::Probability => Topic::ProbabilityBasics,
            TopicChoice::Distributions => Topic::Distributions,
            TopicChoice::Lesson => Topic::CustomLesson,
        }
    }
}
