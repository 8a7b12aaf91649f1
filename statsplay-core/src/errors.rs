//! errors.rs - Custom error types for the statsplay-core library.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types surfaced by `statsplay-core`.
///
/// None of these are fatal to an interactive session: the shell turns them
/// into notices and waits for the next widget change.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PlaygroundError {
    #[error("'{token}' is not a number")]
    InvalidNumber { token: String },

    #[error("Enter at least one number")]
    EmptySample,

    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("An unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),
}

/// Checks that `value` lies in `[min, max]`.
pub(crate) fn ensure_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<(), PlaygroundError> {
    if value.is_nan() || value < min || value > max {
        return Err(PlaygroundError::OutOfRange { name, value, min, max });
    }
    Ok(())
}
