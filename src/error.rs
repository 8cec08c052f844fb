//! Error types for reading, scoring and reporting a Direct Assessment export.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("The file {} does not exist.", .path.display())]
    NotFound { path: PathBuf },

    #[error("The file {} has no \"q1 score\" column in its header.", .path.display())]
    MissingScoreColumn { path: PathBuf },

    #[error("Column passed {input} is not an integer.")]
    ColumnNotInteger { input: String },

    #[error(
        "Score {score} given by {item} in sentence {sentence} is not an integer between 0 and 100 (data line {line})."
    )]
    InvalidScore {
        score: String,
        item: String,
        sentence: String,
        line: usize,
    },

    #[error("The passed column does not exist: column {column} on data line {line}.")]
    ColumnOutOfRange { column: usize, line: usize },

    #[error("Averages must be calculated before highest/lowest.")]
    NoAverages,

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScoreError>;
