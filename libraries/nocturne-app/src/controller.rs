//! Application controller - top-level state ownership
//!
//! Owns the selection machine, the active profile, the content list
//! state, and the single playback session, behind one lock. Timer
//! callbacks (selection commit, autoplay) run as tokio tasks whose
//! handles live next to the state they mutate; any transition that
//! invalidates that state aborts the handle first.

use crate::error::{AppError, Result};
use crate::events::AppEvent;
use nocturne_content::ContentListState;
use nocturne_core::{ContentItem, ContentSource, Profile};
use nocturne_playback::{
    MediaElement, OpenMode, PlaybackSession, SessionConfig, TapOutcome, TransportState,
};
use nocturne_selection::{GestureTracker, SelectionMachine, Zone, COMMIT_DELAY};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Controller configuration
///
/// Defaults are the production delays; tests shrink them or run under
/// paused tokio time.
#[derive(Debug, Clone, Copy)]
pub struct AppConfig {
    /// Settle delay between drag release and selection commit
    pub commit_delay: Duration,

    /// Session delays (autoplay, double-tap window)
    pub session: SessionConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            commit_delay: COMMIT_DELAY,
            session: SessionConfig::default(),
        }
    }
}

struct AppState {
    tracker: GestureTracker,
    selection: SelectionMachine,
    profile: Option<Profile>,
    content: ContentListState,
    session: Option<PlaybackSession>,

    // Bumped whenever `session` is installed, replaced, or cleared.
    // The autoplay task carries the epoch it was scheduled under and
    // no-ops on a mismatch; abort alone cannot stop a task already
    // past its sleep and waiting on the lock.
    session_epoch: u64,

    // Cancellable handles, stored alongside the state their callbacks mutate
    commit_timer: Option<JoinHandle<()>>,
    autoplay_timer: Option<JoinHandle<()>>,
}

impl AppState {
    fn new() -> Self {
        Self {
            tracker: GestureTracker::new(),
            selection: SelectionMachine::new(),
            profile: None,
            content: ContentListState::Empty,
            session: None,
            session_epoch: 0,
            commit_timer: None,
            autoplay_timer: None,
        }
    }

    fn abort_commit_timer(&mut self) {
        if let Some(handle) = self.commit_timer.take() {
            handle.abort();
        }
    }

    fn abort_autoplay_timer(&mut self) {
        if let Some(handle) = self.autoplay_timer.take() {
            handle.abort();
        }
    }

    fn abort_timers(&mut self) {
        self.abort_commit_timer();
        self.abort_autoplay_timer();
    }
}

/// The top-level application controller.
///
/// Timer tasks hold the shared state through the inner `Arc`; all host
/// entry points take `&self`, so hosts that need to share the
/// controller can wrap it in an `Arc` of their own. Must be used from
/// within a tokio runtime (the timers are tokio tasks).
pub struct App {
    config: AppConfig,
    state: Arc<Mutex<AppState>>,
    events: mpsc::UnboundedSender<AppEvent>,
}

impl App {
    /// Create the controller and the event stream the host subscribes to.
    pub fn new(config: AppConfig) -> (Self, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let app = Self {
            config,
            state: Arc::new(Mutex::new(AppState::new())),
            events: tx,
        };
        (app, rx)
    }

    // ===== Landing screen =====

    /// Install or update the landing container measurement (pixels).
    pub fn set_container_bounds(&self, width: f32, height: f32) {
        self.state.lock().unwrap().tracker.set_bounds(width, height);
    }

    /// Forward a drag move event (absolute container-relative pixels).
    ///
    /// Samples are dropped while the container is unmeasured.
    pub fn pointer_moved(&self, x_px: f32, y_px: f32) {
        let mut st = self.state.lock().unwrap();
        if let Some(sample) = st.tracker.sample(x_px, y_px) {
            st.selection.pointer_moved(sample);
        }
    }

    /// Forward the end-of-drag signal.
    ///
    /// If the release lands in a decision zone this schedules the
    /// commit timer, aborting any previously scheduled one (at most one
    /// live timer; the machine's token check is the second guard).
    pub fn drag_ended(&self) {
        let mut st = self.state.lock().unwrap();
        let Some(request) = st.selection.drag_ended() else {
            return;
        };

        st.abort_commit_timer();
        debug!(profile = %request.profile, "Selection pending; scheduling commit");

        let state = Arc::clone(&self.state);
        let events = self.events.clone();
        let delay = self.config.commit_delay;
        let token = request.token;

        st.commit_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut st = state.lock().unwrap();
            if let Some(profile) = st.selection.commit(token) {
                st.profile = Some(profile);
                info!(%profile, "Profile selection committed");
                let _ = events.send(AppEvent::ProfileSelected(profile));
            }
        }));
    }

    /// Visual focus zone for the landing highlight (45/55 band)
    pub fn landing_focus(&self) -> Option<Zone> {
        self.state.lock().unwrap().selection.focus()
    }

    /// Whether a selection is pending commit
    pub fn selection_pending(&self) -> bool {
        self.state.lock().unwrap().selection.is_pending()
    }

    /// The active profile, once off the landing screen
    pub fn profile(&self) -> Option<Profile> {
        self.state.lock().unwrap().profile
    }

    // ===== Content list =====

    /// Fetch the content list for the active profile.
    ///
    /// Emits `ContentChanged(Loading)` up front, then the resolved
    /// state. Fetch failures are logged and collapse into the empty
    /// state, identical to a profile with no content.
    pub async fn load_content<S>(&self, source: &S) -> Result<()>
    where
        S: ContentSource + ?Sized,
    {
        let profile = {
            let mut st = self.state.lock().unwrap();
            let profile = st.profile.ok_or(AppError::NoProfileSelected)?;
            st.content = ContentListState::Loading;
            let _ = self.events.send(AppEvent::ContentChanged(ContentListState::Loading));
            profile
        };

        let resolved = match source.list_for_profile(profile).await {
            Ok(items) => ContentListState::from_items(items),
            Err(e) => {
                warn!(profile = %profile, error = %e, "Content fetch failed; showing empty list");
                ContentListState::Empty
            }
        };

        let mut st = self.state.lock().unwrap();
        // A back-navigation (or a new selection) during the fetch means
        // the result belongs to a discarded screen.
        if st.profile != Some(profile) {
            debug!(profile = %profile, "Discarding content fetch; profile no longer active");
            return Ok(());
        }
        st.content = resolved.clone();
        let _ = self.events.send(AppEvent::ContentChanged(resolved));
        Ok(())
    }

    /// Current content list state
    pub fn content(&self) -> ContentListState {
        self.state.lock().unwrap().content.clone()
    }

    // ===== Playback session =====

    /// Open a session for a selected content item.
    ///
    /// The two list entry points map to the two open modes: the row
    /// itself opens `Normal`, the ear button opens `Ear`. Distinct
    /// calls, so one interaction can never trigger both. Any existing
    /// session is closed first (single-session invariant), and the
    /// one-shot autoplay timer is scheduled.
    pub fn open_item(
        &self,
        item: ContentItem,
        media: Box<dyn MediaElement>,
        mode: OpenMode,
    ) -> Result<()> {
        let mut st = self.state.lock().unwrap();

        // Build the new session before touching the old one: a rejected
        // open must leave the active session playing. Sessions are only
        // destroyed by explicit close or a successful replacement.
        let session = PlaybackSession::new(item, media, mode, self.config.session)?;

        if st.session.take().is_some() {
            st.abort_autoplay_timer();
            let _ = self.events.send(AppEvent::SessionClosed);
        }

        debug!(item_id = session.item().id, ear = session.ear_mode(), "Opening playback session");
        st.session = Some(session);
        st.session_epoch += 1;

        let state = Arc::clone(&self.state);
        let events = self.events.clone();
        let delay = self.config.session.autoplay_delay;
        let epoch = st.session_epoch;

        st.autoplay_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut st = state.lock().unwrap();
            // The session this timer was scheduled for may be gone.
            if st.session_epoch != epoch {
                return;
            }
            let Some(session) = st.session.as_mut() else {
                return;
            };
            match session.autoplay() {
                Ok(()) => {
                    for event in session.take_events() {
                        let _ = events.send(AppEvent::Player(event));
                    }
                }
                Err(e) => error!(error = %e, "Autoplay failed"),
            }
        }));

        Ok(())
    }

    /// User transport toggle (play/pause button)
    pub fn toggle_transport(&self) -> Result<()> {
        self.with_session(|session| session.toggle_transport())
    }

    /// Forward a media time-update tick
    pub fn media_tick(&self) -> Result<()> {
        self.with_session(|session| {
            session.on_time_update();
            Ok(())
        })
    }

    /// Forward the media completion signal
    pub fn media_ended(&self) -> Result<()> {
        self.with_session(|session| {
            session.on_ended();
            Ok(())
        })
    }

    /// Enter ear mode (non-video items only)
    pub fn enter_ear_mode(&self) -> Result<()> {
        self.with_session(PlaybackSession::enter_ear_mode)
    }

    /// Handle a tap on the ear-mode overlay at the current instant
    pub fn ear_tap(&self) -> Result<TapOutcome> {
        self.ear_tap_at(Instant::now())
    }

    /// Handle a tap on the ear-mode overlay with an explicit timestamp
    pub fn ear_tap_at(&self, now: Instant) -> Result<TapOutcome> {
        self.with_session(|session| session.tap(now))
    }

    /// Transport state of the active session, if any
    pub fn transport(&self) -> Option<TransportState> {
        self.state
            .lock()
            .unwrap()
            .session
            .as_ref()
            .map(PlaybackSession::transport)
    }

    /// Progress fraction of the active session, if any
    pub fn progress(&self) -> Option<f32> {
        self.state
            .lock()
            .unwrap()
            .session
            .as_ref()
            .map(PlaybackSession::progress)
    }

    /// Whether the active session is in ear mode, if any
    pub fn ear_mode(&self) -> Option<bool> {
        self.state
            .lock()
            .unwrap()
            .session
            .as_ref()
            .map(PlaybackSession::ear_mode)
    }

    /// Destroy the active session (explicit close).
    ///
    /// The session is never auto-closed on `Ended`; this is the only
    /// way out.
    pub fn close_session(&self) -> Result<()> {
        let mut st = self.state.lock().unwrap();
        if st.session.take().is_none() {
            return Err(AppError::NoActiveSession);
        }
        st.session_epoch += 1;
        st.abort_autoplay_timer();
        debug!("Playback session closed");
        let _ = self.events.send(AppEvent::SessionClosed);
        Ok(())
    }

    // ===== Navigation =====

    /// Return to the landing screen, clearing the profile.
    ///
    /// Tears down the session (if any), resets the selection machine,
    /// and aborts every pending timer so no stale callback can touch
    /// the discarded state.
    pub fn back_to_landing(&self) {
        let mut st = self.state.lock().unwrap();
        st.abort_timers();
        if st.session.take().is_some() {
            st.session_epoch += 1;
            let _ = self.events.send(AppEvent::SessionClosed);
        }
        st.selection.reset();
        st.profile = None;
        st.content = ContentListState::Empty;
        info!("Returned to landing");
        let _ = self.events.send(AppEvent::ReturnedToLanding);
    }

    fn with_session<T>(
        &self,
        f: impl FnOnce(&mut PlaybackSession) -> nocturne_playback::Result<T>,
    ) -> Result<T> {
        let mut st = self.state.lock().unwrap();
        let Some(session) = st.session.as_mut() else {
            return Err(AppError::NoActiveSession);
        };
        let out = f(session)?;

        let pending = session.take_events();
        drop(st);
        for event in pending {
            let _ = self.events.send(AppEvent::Player(event));
        }
        Ok(out)
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Teardown must cancel pending timers; their callbacks would
        // otherwise fire against state nobody owns anymore.
        if let Ok(mut st) = self.state.lock() {
            st.abort_timers();
        }
    }
}
