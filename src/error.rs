use std::io;

use thiserror::Error;

/// Everything the experiment harness can fail on. Sorting itself is infallible.
#[derive(Debug, Error)]
pub enum Error {
    #[error("at least one input size is required")]
    NoSizes,

    #[error("repetitions must be at least 1")]
    ZeroRepetitions,

    #[error("max value must not be negative, got {0}")]
    NegativeMaxValue(i32),

    #[error("unknown input pattern '{name}', expected one of: {expected}")]
    UnknownPattern { name: String, expected: String },

    #[error("results version mismatch, file: {found} expected: {expected}")]
    VersionMismatch { found: usize, expected: usize },

    #[error("no results to plot")]
    NothingToPlot,

    #[error("failed to draw plot: {0}")]
    Plot(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
