//! Nocturne Core
//!
//! Platform-agnostic core types, traits, and error handling for Nocturne.
//!
//! This crate provides the foundational building blocks shared by the
//! selection, playback, and content crates:
//! - **Domain Types**: [`Profile`], [`ContentItem`], [`MediaKind`]
//! - **Core Traits**: [`ContentSource`]
//! - **Error Handling**: Unified [`NocturneError`] and [`Result`] types
//!
//! # Example
//!
//! ```rust
//! use nocturne_core::{ContentItem, MediaKind, Profile};
//! use chrono::Utc;
//!
//! let item = ContentItem {
//!     id: 1,
//!     created_at: Utc::now(),
//!     title: "Cuento de la Luna".to_string(),
//!     subtitle: "Video relajante".to_string(),
//!     kind: MediaKind::Video,
//!     target_profile: Profile::Princesa,
//!     source_uri: "https://example.com/luna.mp4".to_string(),
//!     duration: "10 min".to_string(),
//! };
//!
//! assert!(item.kind.is_video());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{NocturneError, Result};
pub use traits::ContentSource;
pub use types::{ContentItem, MediaKind, Profile};
