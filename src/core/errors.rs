//! Shared error types for the application

use crate::core::types::{AnswerRecord, MAX_MATURITY_LEVEL};
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for govgap operations
#[derive(Debug, Error)]
pub enum Error {
    /// An answer carries a maturity level outside the six-level scale.
    /// Never clamped: a clamped level would corrupt the maturity signal.
    #[error(
        "invalid answer for {domain_id}/{subdomain_id} (\"{question}\"): \
         maturity level {level} is outside the 0-{max} scale"
    )]
    InvalidAnswer {
        domain_id: String,
        subdomain_id: String,
        question: String,
        level: u8,
        max: u8,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Answer-file reading errors
    #[error("Input error reading {path}: {message}")]
    Input { path: PathBuf, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Build an [`Error::InvalidAnswer`] identifying the offending record
    pub fn invalid_answer(record: &AnswerRecord) -> Self {
        Self::InvalidAnswer {
            domain_id: record.domain_id.clone(),
            subdomain_id: record.subdomain_id.clone(),
            question: record.question_text.clone(),
            level: record.maturity_level,
            max: MAX_MATURITY_LEVEL,
        }
    }

    /// Create an input error with path context
    pub fn input(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Input {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
