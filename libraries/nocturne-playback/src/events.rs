//! Playback events
//!
//! Event-based communication for host/UI synchronization. The session
//! accumulates events in a pending queue; the host drains them with
//! [`PlaybackSession::take_events`](crate::PlaybackSession::take_events)
//! after each call into the session.

use crate::types::TransportState;
use serde::{Deserialize, Serialize};

/// Events emitted by a playback session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Transport state changed (play/pause/ended)
    TransportChanged {
        /// The new transport state
        state: TransportState,
    },

    /// Progress fraction was recomputed from a media time-update
    ProgressChanged {
        /// Progress in `[0, 1]`
        progress: f32,
    },

    /// Ear mode was entered or exited
    EarModeChanged {
        /// Whether ear mode is now active
        enabled: bool,
    },

    /// The media signaled completion
    Finished {
        /// ID of the finished item
        item_id: i64,
    },
}
