//! Error types for the codec module.

use thiserror::Error;

/// Errors raised while serializing or parsing stored values.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid regexp literal: {0}")]
    InvalidRegexp(String),

    #[error("Serializer for type '{tag}' failed: {message}")]
    Serialize { tag: String, message: String },

    #[error("Parser for type '{tag}' failed: {message}")]
    Parse { tag: String, message: String },
}
