//! Nocturne - Application Controller
//!
//! The single top-level owner of shared UI state: which profile is
//! active, which playback session (if any) exists, and the landing
//! selection in progress. Views receive this state as values plus the
//! [`AppEvent`] stream; there is no ambient global.
//!
//! This crate is also where the fixed timers live. The state-machine
//! crates hand out cancellable tokens; the controller schedules them on
//! tokio and keeps each `JoinHandle` next to the state its callback
//! will mutate, aborting it on supersede, close, and teardown. A stale
//! timer must never mutate discarded state.
//!
//! # Example
//!
//! ```ignore
//! use nocturne_app::{App, AppConfig};
//!
//! let (app, mut events) = App::new(AppConfig::default());
//! app.set_container_bounds(1000.0, 800.0);
//!
//! // Host forwards drag events from its input layer...
//! app.pointer_moved(300.0, 400.0);
//! app.drag_ended();
//!
//! // ...and 2100ms later receives AppEvent::ProfileSelected.
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod controller;
mod error;
mod events;

pub use controller::{App, AppConfig};
pub use error::{AppError, Result};
pub use events::AppEvent;
