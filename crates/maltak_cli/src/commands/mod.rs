//! CLI command implementations.

pub mod batch;
pub mod calc;
pub mod inspect;
pub mod request;

use thiserror::Error;

/// Errors reported by CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// The API answered with a non-success status.
    #[error("request failed with status {status}: {message}")]
    Request {
        /// Response status.
        status: u16,
        /// Error message from the response body.
        message: String,
    },

    /// Output could not be written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Output could not be encoded.
    #[error("encoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// An argument could not be parsed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
