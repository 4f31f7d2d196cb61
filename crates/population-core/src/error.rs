// crates/population-core/src/error.rs

//! Error types for dataset loading.
//!
//! Every variant describes a dataset that could not be made available.
//! Lookups themselves never fail: a missing code is reported as `None`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PopulationError {
    /// The dataset could not be located.
    #[error("population dataset unavailable: {0}")]
    DataUnavailable(String),

    #[error("I/O error while reading population dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("population dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The dataset parsed but its contents are unusable.
    #[error("invalid population data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, PopulationError>;
