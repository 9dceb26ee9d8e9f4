//! Core types for playback session management

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Transport state of the active session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportState {
    /// Session created, nothing started yet
    Idle,

    /// Media is transporting
    Playing,

    /// Paused mid-item
    Paused,

    /// The media signaled completion; terminal for this item
    Ended,
}

/// How a session is opened from the content list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Normal overlay, ear mode off
    Normal,

    /// Open directly into ear mode (non-video items only)
    Ear,
}

/// Outcome of a tap on the ear-mode overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Ear mode was not active; the tap means nothing
    Ignored,

    /// First tap of a potential double tap; a fresh window is armed
    Armed,

    /// Second tap within the window; ear mode exited, transport paused
    Unlocked,
}

/// Configuration for a playback session
///
/// Defaults are the production delays; hosts and tests may shrink
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Delay between session creation and the one-shot autoplay (default: 500 ms)
    pub autoplay_delay: Duration,

    /// Maximum gap between two taps that exits ear mode (default: 300 ms)
    pub double_tap_window: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            autoplay_delay: Duration::from_millis(500),
            double_tap_window: Duration::from_millis(300),
        }
    }
}
