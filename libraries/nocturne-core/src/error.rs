/// Core error types for Nocturne
use thiserror::Error;

/// Result type alias using `NocturneError`
pub type Result<T> = std::result::Result<T, NocturneError>;

/// Core error type for Nocturne
#[derive(Error, Debug)]
pub enum NocturneError {
    /// Content source errors (fetch failed, malformed response)
    #[error("Content error: {0}")]
    Content(String),

    /// Media playback errors
    #[error("Media error: {0}")]
    Media(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl NocturneError {
    /// Create a content error
    pub fn content(msg: impl Into<String>) -> Self {
        Self::Content(msg.into())
    }

    /// Create a media error
    pub fn media(msg: impl Into<String>) -> Self {
        Self::Media(msg.into())
    }

    /// Create an invalid-input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_helpers_format() {
        let err = NocturneError::content("source unreachable");
        assert_eq!(err.to_string(), "Content error: source unreachable");

        let err = NocturneError::media("element detached");
        assert_eq!(err.to_string(), "Media error: element detached");
    }
}
