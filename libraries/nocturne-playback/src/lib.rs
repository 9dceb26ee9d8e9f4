//! Nocturne - Playback Session Management
//!
//! Platform-agnostic playback management for the overlay player.
//!
//! This crate provides:
//! - Transport state machine (`Idle -> Playing <-> Paused -> Ended`)
//! - One-shot autoplay on session open
//! - Progress tracking guarded against unknown media duration
//! - Ear mode (screen-off listening) with double-tap unlock
//! - Event queue for host/UI synchronization
//!
//! # Architecture
//!
//! `nocturne-playback` is completely platform-agnostic:
//! - No dependency on any UI toolkit
//! - No dependency on a real media backend
//! - No async runtime; the host schedules the autoplay timer
//!
//! The platform media primitive (an HTML media element, a native
//! player, a test double) is provided via the [`MediaElement`] trait,
//! and the element's time-update/ended events are forwarded into the
//! session by the host.
//!
//! # Example
//!
//! ```no_run
//! use nocturne_playback::{MediaElement, OpenMode, PlaybackSession, SessionConfig};
//! # fn open(item: nocturne_core::ContentItem, media: Box<dyn MediaElement>) {
//! let mut session =
//!     PlaybackSession::new(item, media, OpenMode::Normal, SessionConfig::default()).unwrap();
//!
//! // Host fires this once, autoplay_delay after the overlay opens.
//! session.autoplay().unwrap();
//!
//! // Media events are forwarded in by the host.
//! session.on_time_update();
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod events;
pub mod media;
pub mod session;
pub mod types;

pub use error::{PlayerError, Result};
pub use events::PlayerEvent;
pub use media::MediaElement;
pub use session::PlaybackSession;
pub use types::{OpenMode, SessionConfig, TapOutcome, TransportState};
