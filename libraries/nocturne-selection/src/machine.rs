//! Selection state machine
//!
//! Interprets pointer samples as decision zones, holds the pending
//! selection created on drag end, and commits it after the settle
//! delay. States: `Undecided -> Pending(profile) -> Committed`
//! (terminal; the host navigates away and discards the machine).
//!
//! The machine owns no timer. On drag end it hands out a
//! [`CommitRequest`] carrying a [`CommitToken`]; the host schedules
//! [`COMMIT_DELAY`] and calls [`SelectionMachine::commit`] with that
//! token. A later drag end supersedes the pending selection and bumps
//! the generation, so a stale token from a cancelled timer can never
//! commit a discarded selection.

use crate::gesture::PointerSample;
use nocturne_core::Profile;
use std::time::Duration;

/// Fixed settle delay between drag release and the selection firing.
///
/// Matches the landing animation; changing it changes observable
/// behavior.
pub const COMMIT_DELAY: Duration = Duration::from_millis(2100);

/// Decision zone on the landing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Left third of the screen (`x < 40`)
    Left,

    /// Right third of the screen (`x > 60`)
    Right,
}

impl Zone {
    /// The fixed zone-to-profile bijection.
    pub fn profile(self) -> Profile {
        match self {
            Self::Left => Profile::Princesa,
            Self::Right => Profile::Joha,
        }
    }
}

/// Committing zone for a horizontal position.
///
/// `x < 40` is left, `x > 60` is right, the band between is neutral.
pub fn zone_for(x: f32) -> Option<Zone> {
    if x < 40.0 {
        Some(Zone::Left)
    } else if x > 60.0 {
        Some(Zone::Right)
    } else {
        None
    }
}

/// Visual focus zone for a horizontal position.
///
/// Wider than the committing zones (45/55 instead of 40/60) so the
/// side highlight engages before the pointer reaches a decision zone.
/// The asymmetry is deliberate anti-flicker behavior near the center;
/// do not unify the two thresholds.
pub fn focus_for(x: f32) -> Option<Zone> {
    if x < 45.0 {
        Some(Zone::Left)
    } else if x > 55.0 {
        Some(Zone::Right)
    } else {
        None
    }
}

/// Opaque handle identifying one pending selection generation.
///
/// Handed to the host on drag end and required back at commit time.
/// Tokens from superseded selections are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitToken(u64);

/// What the host must schedule after a drag ends in a decision zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitRequest {
    /// The profile that will be selected if the timer survives
    pub profile: Profile,

    /// Token to pass back to [`SelectionMachine::commit`]
    pub token: CommitToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingSelection {
    profile: Profile,
    token: CommitToken,
}

/// The landing-screen selection state machine.
#[derive(Debug, Default)]
pub struct SelectionMachine {
    last_sample: Option<PointerSample>,
    pending: Option<PendingSelection>,
    committed: Option<Profile>,
    generation: u64,
}

impl SelectionMachine {
    /// Create a machine in the `Undecided` state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a move event.
    ///
    /// Evaluated zones always come from the latest sample, including
    /// while a selection is pending (a further drag may supersede it).
    /// Ignored after commit.
    pub fn pointer_moved(&mut self, sample: PointerSample) {
        if self.committed.is_some() {
            return;
        }
        self.last_sample = Some(sample);
    }

    /// Handle the end-of-drag signal.
    ///
    /// If the last sample sits in a decision zone, a pending selection
    /// for that zone's profile replaces any prior pending one and a
    /// [`CommitRequest`] is returned for scheduling. A neutral release
    /// is a no-op; the drag can be retried.
    pub fn drag_ended(&mut self) -> Option<CommitRequest> {
        if self.committed.is_some() {
            return None;
        }

        let zone = zone_for(self.last_sample?.x)?;
        let profile = zone.profile();

        // Superseding invalidates any token handed out before.
        self.generation += 1;
        let token = CommitToken(self.generation);
        self.pending = Some(PendingSelection { profile, token });

        Some(CommitRequest { profile, token })
    }

    /// Fire the commit for the given token.
    ///
    /// Returns the selected profile exactly once, and only when the
    /// token belongs to the newest pending selection. Stale tokens and
    /// repeat calls return `None`.
    pub fn commit(&mut self, token: CommitToken) -> Option<Profile> {
        if self.committed.is_some() {
            return None;
        }

        let pending = self.pending?;
        if pending.token != token {
            return None;
        }

        self.pending = None;
        self.committed = Some(pending.profile);
        self.committed
    }

    /// Latest recorded pointer sample
    pub fn last_sample(&self) -> Option<PointerSample> {
        self.last_sample
    }

    /// Visual focus zone for the latest sample (45/55 band)
    pub fn focus(&self) -> Option<Zone> {
        focus_for(self.last_sample?.x)
    }

    /// Profile of the pending selection, if one exists
    pub fn pending(&self) -> Option<Profile> {
        self.pending.map(|p| p.profile)
    }

    /// Whether a selection is pending commit
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The committed profile, once the machine is terminal
    pub fn committed(&self) -> Option<Profile> {
        self.committed
    }

    /// Return to a fresh `Undecided` machine (navigating back to landing)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
