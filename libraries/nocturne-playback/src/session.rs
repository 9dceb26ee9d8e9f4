//! Playback session - core orchestration
//!
//! One session owns one content item from open to close. It manages the
//! transport state machine, progress tracking, and the orthogonal ear
//! mode flag. The session holds no timer and knows nothing about UI
//! event binding: the host schedules the autoplay delay, forwards media
//! events, and supplies tap timestamps.

use crate::{
    error::{PlayerError, Result},
    events::PlayerEvent,
    media::MediaElement,
    types::{OpenMode, SessionConfig, TapOutcome, TransportState},
};
use nocturne_core::ContentItem;
use std::time::Instant;

/// The single active media session of the overlay player.
///
/// Created when a user selects a content item from the list; destroyed
/// by explicit close (never automatically on `Ended`). Exactly one
/// session exists at a time; the controller enforces that.
pub struct PlaybackSession {
    item: ContentItem,
    media: Box<dyn MediaElement>,

    transport: TransportState,
    progress: f32,

    // Ear mode is orthogonal to the transport machine
    ear_mode: bool,
    last_ear_tap: Option<Instant>,

    autoplay_fired: bool,
    config: SessionConfig,

    // Event queue for host synchronization
    pending_events: Vec<PlayerEvent>,
}

impl PlaybackSession {
    /// Create a new session for `item`.
    ///
    /// `OpenMode::Ear` starts with ear mode already on and is rejected
    /// for video items. Either way the transport starts `Idle`; the
    /// host schedules [`autoplay`](Self::autoplay) after
    /// `config.autoplay_delay`.
    pub fn new(
        item: ContentItem,
        media: Box<dyn MediaElement>,
        mode: OpenMode,
        config: SessionConfig,
    ) -> Result<Self> {
        if mode == OpenMode::Ear && item.kind.is_video() {
            return Err(PlayerError::EarModeUnavailable(item.kind));
        }

        Ok(Self {
            item,
            media,
            transport: TransportState::Idle,
            progress: 0.0,
            ear_mode: mode == OpenMode::Ear,
            last_ear_tap: None,
            autoplay_fired: false,
            config,
            pending_events: Vec::new(),
        })
    }

    // ===== Transport =====

    /// One-shot auto-play-on-open transition.
    ///
    /// Fired by the host `autoplay_delay` after the session is created.
    /// Only transitions `Idle -> Playing`; if the user already touched
    /// the transport in the meantime, this is a no-op. Never fires
    /// twice.
    pub fn autoplay(&mut self) -> Result<()> {
        if self.autoplay_fired {
            return Ok(());
        }
        self.autoplay_fired = true;

        if self.transport == TransportState::Idle {
            self.media.play()?;
            self.set_transport(TransportState::Playing);
        }
        Ok(())
    }

    /// User transport toggle.
    ///
    /// Calls the platform primitive matching the opposite of the
    /// current state, then flips. No debounce; rapid toggling always
    /// reflects the last requested state. `Ended` is terminal for the
    /// item, so toggling there is a no-op.
    pub fn toggle_transport(&mut self) -> Result<()> {
        match self.transport {
            TransportState::Playing => {
                self.media.pause()?;
                self.set_transport(TransportState::Paused);
            }
            TransportState::Idle | TransportState::Paused => {
                self.media.play()?;
                self.set_transport(TransportState::Playing);
            }
            TransportState::Ended => {}
        }
        Ok(())
    }

    /// Handle a media time-update tick.
    ///
    /// Recomputes the progress fraction only while `Playing` and only
    /// when the media duration is known and non-zero; otherwise the
    /// prior value is kept (guards NaN and divide-by-zero before
    /// metadata loads).
    pub fn on_time_update(&mut self) {
        if self.transport != TransportState::Playing {
            return;
        }

        let Some(duration) = self.media.duration() else {
            return;
        };
        if duration.is_zero() {
            return;
        }

        let fraction = self.media.position().as_secs_f32() / duration.as_secs_f32();
        self.progress = fraction.clamp(0.0, 1.0);
        self.emit(PlayerEvent::ProgressChanged {
            progress: self.progress,
        });
    }

    /// Handle the media completion signal.
    ///
    /// Progress is deliberately not reset on end.
    pub fn on_ended(&mut self) {
        if self.transport == TransportState::Ended {
            return;
        }
        self.set_transport(TransportState::Ended);
        self.emit(PlayerEvent::Finished {
            item_id: self.item.id,
        });
    }

    // ===== Ear mode =====

    /// Enter ear mode (explicit button).
    ///
    /// Only reachable for non-video items. The transport is unaffected:
    /// the media keeps transporting with the screen dark.
    pub fn enter_ear_mode(&mut self) -> Result<()> {
        if self.item.kind.is_video() {
            return Err(PlayerError::EarModeUnavailable(self.item.kind));
        }
        if !self.ear_mode {
            self.ear_mode = true;
            self.last_ear_tap = None;
            self.emit(PlayerEvent::EarModeChanged { enabled: true });
        }
        Ok(())
    }

    /// Handle a tap on the ear-mode overlay.
    ///
    /// A single tap only records its timestamp; a second tap within
    /// `double_tap_window` exits ear mode and forces the transport to
    /// `Paused` regardless of its state (intentional safety pause on
    /// unlock). A tap arriving after the window starts a fresh window.
    pub fn tap(&mut self, now: Instant) -> Result<TapOutcome> {
        if !self.ear_mode {
            return Ok(TapOutcome::Ignored);
        }

        let within_window = self
            .last_ear_tap
            .is_some_and(|prev| now.duration_since(prev) <= self.config.double_tap_window);

        if !within_window {
            self.last_ear_tap = Some(now);
            return Ok(TapOutcome::Armed);
        }

        self.ear_mode = false;
        self.last_ear_tap = None;
        self.emit(PlayerEvent::EarModeChanged { enabled: false });

        // Unlocking always pauses, whatever the transport was doing.
        self.media.pause()?;
        self.set_transport(TransportState::Paused);

        Ok(TapOutcome::Unlocked)
    }

    // ===== State queries =====

    /// The item this session owns
    pub fn item(&self) -> &ContentItem {
        &self.item
    }

    /// Current transport state
    pub fn transport(&self) -> TransportState {
        self.transport
    }

    /// Whether the transport is currently playing
    pub fn is_playing(&self) -> bool {
        self.transport == TransportState::Playing
    }

    /// Last computed progress fraction in `[0, 1]`
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether ear mode is active
    pub fn ear_mode(&self) -> bool {
        self.ear_mode
    }

    /// Session configuration
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    // ===== Events =====

    /// Drain pending events for the host
    pub fn take_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    fn set_transport(&mut self, state: TransportState) {
        if self.transport != state {
            self.transport = state;
            self.emit(PlayerEvent::TransportChanged { state });
        }
    }

    fn emit(&mut self, event: PlayerEvent) {
        self.pending_events.push(event);
    }
}
