//! Error types for the application controller

use thiserror::Error;

/// Controller errors
#[derive(Debug, Error)]
pub enum AppError {
    /// An operation that needs an open session was called without one
    #[error("No active playback session")]
    NoActiveSession,

    /// An operation that needs a selected profile was called on the landing screen
    #[error("No profile selected")]
    NoProfileSelected,

    /// Playback session error
    #[error(transparent)]
    Player(#[from] nocturne_playback::PlayerError),
}

/// Result type for controller operations
pub type Result<T> = std::result::Result<T, AppError>;
