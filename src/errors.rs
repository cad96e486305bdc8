/*!
 * Error types for the legiscribe application.
 *
 * This module contains custom error types for the caption pipeline and the
 * file-level conversion around it, using the thiserror crate for ergonomic
 * error definitions.
 */

use thiserror::Error;

/// Errors raised while turning a raw caption payload into a `CaptionSet`
#[derive(Error, Debug)]
pub enum CaptionError {
    /// Payload text is not JSON at all
    #[error("Invalid caption JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Payload shape or a field type does not match the caption schema
    #[error("Schema error at {path}: {message}")]
    Schema {
        /// JSON path of the offending value, e.g. `$[0][3].time`
        path: String,
        /// What was expected there
        message: String,
    },

    /// Event is well-typed but semantically invalid
    #[error("Malformed event #{index}: {message}")]
    MalformedEvent {
        /// Position of the event in the inner array
        index: usize,
        /// What is wrong with it
        message: String,
    },
}

impl CaptionError {
    // @creates: Schema error for a JSON path
    pub fn schema(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Schema {
            path: path.into(),
            message: message.into(),
        }
    }

    // @creates: Malformed event error for an event index
    pub fn malformed(index: usize, message: impl Into<String>) -> Self {
        Self::MalformedEvent {
            index,
            message: message.into(),
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from caption validation
    #[error("Caption error: {0}")]
    Caption(#[from] CaptionError),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
