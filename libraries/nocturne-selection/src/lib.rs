//! Nocturne - Profile Selection
//!
//! Gesture tracking and the selection state machine for the landing
//! screen: a drag gesture moves a light across the screen, releasing it
//! inside a decision zone picks a profile, and the pick commits after a
//! fixed settle delay unless a later drag supersedes it.
//!
//! # Architecture
//!
//! `nocturne-selection` is completely platform-agnostic:
//! - No dependency on any UI toolkit or event-binding mechanism
//! - No async runtime; the host schedules the commit timer and calls
//!   back with the [`CommitToken`] it was handed
//!
//! The machine is a plain value with transition methods, so the whole
//! gesture flow can be tested without a rendering surface.
//!
//! # Example
//!
//! ```rust
//! use nocturne_core::Profile;
//! use nocturne_selection::{GestureTracker, SelectionMachine};
//!
//! let mut tracker = GestureTracker::new();
//! tracker.set_bounds(800.0, 600.0);
//!
//! let mut machine = SelectionMachine::new();
//!
//! // Drag into the left zone and release.
//! let sample = tracker.sample(240.0, 300.0).unwrap(); // x = 30%
//! machine.pointer_moved(sample);
//! let request = machine.drag_ended().unwrap();
//! assert_eq!(request.profile, Profile::Princesa);
//!
//! // Host waits COMMIT_DELAY, then commits with the token it was handed.
//! assert_eq!(machine.commit(request.token), Some(Profile::Princesa));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod gesture;
pub mod machine;

pub use gesture::{GestureTracker, PointerSample};
pub use machine::{
    focus_for, zone_for, CommitRequest, CommitToken, SelectionMachine, Zone, COMMIT_DELAY,
};
