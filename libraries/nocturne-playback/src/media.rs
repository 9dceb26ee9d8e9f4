//! Platform-agnostic media element trait
//!
//! Abstracts the platform media primitive (an HTML audio/video element,
//! a native player, a test double). The session only manages high-level
//! transport state; decoding and buffering live behind this trait.

use crate::error::Result;
use std::time::Duration;

/// Platform media primitive.
///
/// The element's time-update and ended events are not part of this
/// trait; the host forwards them into the session via
/// [`PlaybackSession::on_time_update`](crate::PlaybackSession::on_time_update)
/// and [`PlaybackSession::on_ended`](crate::PlaybackSession::on_ended).
pub trait MediaElement: Send {
    /// Start or resume transporting
    fn play(&mut self) -> Result<()>;

    /// Pause transporting
    fn pause(&mut self) -> Result<()>;

    /// Current playback position from the start of the media
    fn position(&self) -> Duration;

    /// Seek to a position
    fn set_position(&mut self, position: Duration) -> Result<()>;

    /// Total media duration.
    ///
    /// `None` until the element has loaded enough metadata to know it;
    /// progress is not recomputed while unknown.
    fn duration(&self) -> Option<Duration>;
}

/// Dummy media element for testing
///
/// Tracks play/pause calls and advances position manually.
#[cfg(test)]
pub struct DummyMediaElement {
    duration: Option<Duration>,
    position: Duration,
    playing: bool,
}

#[cfg(test)]
impl DummyMediaElement {
    /// Create a dummy element with a known duration
    pub fn new(duration: Duration) -> Self {
        Self {
            duration: Some(duration),
            position: Duration::ZERO,
            playing: false,
        }
    }

    /// Create a dummy element whose metadata has not loaded yet
    pub fn without_metadata() -> Self {
        Self {
            duration: None,
            position: Duration::ZERO,
            playing: false,
        }
    }

    /// Advance the position as if media time passed
    pub fn advance(&mut self, by: Duration) {
        self.position += by;
    }

    /// Whether the element believes it is transporting
    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

#[cfg(test)]
impl MediaElement for DummyMediaElement {
    fn play(&mut self) -> Result<()> {
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.playing = false;
        Ok(())
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn set_position(&mut self, position: Duration) -> Result<()> {
        self.position = position;
        Ok(())
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }
}
