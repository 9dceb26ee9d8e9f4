//! Error types for the content client.

use thiserror::Error;

/// Errors that can occur when querying the content source.
#[derive(Error, Debug)]
pub enum ContentError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Source returned an error response
    #[error("Source error ({status}): {message}")]
    ServerError {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Invalid source URL
    #[error("Invalid source URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse the source response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// Result type for content source operations.
pub type Result<T> = std::result::Result<T, ContentError>;
