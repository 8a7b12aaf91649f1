//! # Stats Playground CLI/TUI Application
//!
//! This crate provides the terminal front end for `statsplay-core`: the
//! interactive shell (widgets, event loop, chart rendering) and the headless
//! `explain` and `topic` commands.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod tui;
pub mod ui;
pub mod utils;

// Re-export core TUI runner
pub use tui::run_tui;
