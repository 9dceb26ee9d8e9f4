//! Domain types shared across Nocturne crates

/// Content item and media kind types
mod content;
/// Profile identity type
mod profile;

pub use content::{ContentItem, MediaKind};
pub use profile::Profile;
