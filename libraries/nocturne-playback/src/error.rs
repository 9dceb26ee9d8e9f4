//! Error types for playback session management

use nocturne_core::MediaKind;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Ear mode requested for a media kind that renders video
    #[error("Ear mode is unavailable for {0:?} items")]
    EarModeUnavailable(MediaKind),

    /// Media element error
    #[error("Media element error: {0}")]
    Media(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlayerError>;
