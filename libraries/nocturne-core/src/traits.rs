/// Core traits for Nocturne
use crate::error::Result;
use crate::types::{ContentItem, Profile};
use async_trait::async_trait;

/// Read-only source for the themed content list.
///
/// Implementors query the external `content` collection. The contract
/// is a pure filter-and-sort lookup: every returned item belongs to the
/// requested profile, ordered newest first by creation time. No
/// mutation happens on this path.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// List items for the given profile, newest first.
    ///
    /// # Errors
    /// Returns an error when the source is unreachable or the response
    /// is malformed. Callers decide how failures surface; the list
    /// screen collapses them into an empty list.
    async fn list_for_profile(&self, profile: Profile) -> Result<Vec<ContentItem>>;
}
