//! # Stats Playground Core Library
//!
//! `statsplay-core` holds everything the playground computes, independent of
//! how it is displayed: the concept router, the four demo handlers, the
//! fixed-topic lessons and their quizzes, per-session state, and the
//! backend-neutral chart requests handlers produce.
//!
//! ## Modules
//!
//! * `router`: Classifies free text into a [`Concept`].
//! * `demos`: Probability, mean/median, normal distribution and regression handlers.
//! * `topics`: The fixed-topic variant (exam scores, coin toss, heights, custom lesson).
//! * `quiz`: Immediate-feedback multiple-choice questions.
//! * `session`: The [`Session`] object threaded through handlers, with its pick counters.
//! * `chart`: [`ChartRequest`] and its series and reference lines.
//! * `output`: [`DemoOutput`], the notices and statistics a handler returns.
//! * `config`: YAML configuration for initial widget values.
//! * `headless`: One-shot helpers for non-interactive use.
//!
//! ## Usage Example
//!
//! ```rust
//! use statsplay_core::{explain, ConceptParams, Session};
//!
//! let mut session = Session::new(Some(7));
//! let output = explain("mean and median", &ConceptParams::default(), 0, &mut session)
//!     .expect("non-blank text is always dispatched");
//! assert_eq!(output.stat_value("Mean"), Some("5.00"));
//! assert_eq!(output.stat_value("Median"), Some("5.00"));
//! ```
//!
//! ## Error Handling
//!
//! Parameter and parse failures are [`PlaygroundError`] values. Handlers turn
//! them into warning notices, so no input leaves the shell in a broken state.
//! Configuration loading uses `anyhow::Error` with context.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod chart;
pub mod config;
pub mod demos;
pub mod errors;
pub mod headless;
pub mod output;
pub mod quiz;
pub mod router;
pub mod session;
pub mod topics;

pub use chart::{ChartColor, ChartRequest, Orientation, ReferenceLine, Series, SeriesKind};
pub use config::{merge_config, DemoDefaults, PlaygroundConfig, Variant};
pub use demos::normal::NormalParams;
pub use demos::probability::BallCounts;
pub use demos::regression::RegressionParams;
pub use demos::{dispatch, ConceptParams};
pub use errors::PlaygroundError;
pub use headless::{explain, lesson};
pub use output::{DemoOutput, Notice, NoticeLevel, Stat};
pub use quiz::{QuizQuestion, COIN_QUIZ, OUTLIER_QUIZ};
pub use router::{classify, route, Concept, HELP_MESSAGE};
pub use session::{Ball, Session, SessionCounters};
pub use topics::{topic_demo, Topic};
