//! Events emitted to the host shell
//!
//! The controller's side of the host-callback surface: the shell
//! receives these over an unbounded channel and reacts by navigating or
//! re-rendering. Events are emitted in transition order; no two
//! transitions of the same machine race each other.

use nocturne_content::ContentListState;
use nocturne_core::Profile;
use nocturne_playback::PlayerEvent;

/// Events the host shell subscribes to
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// A profile selection committed; navigate off the landing screen
    ProfileSelected(Profile),

    /// The content list moved to a new observable state
    ContentChanged(ContentListState),

    /// The active playback session emitted an event
    Player(PlayerEvent),

    /// The playback session was destroyed by explicit close
    SessionClosed,

    /// Navigation back to the landing screen; profile cleared
    ReturnedToLanding,
}
