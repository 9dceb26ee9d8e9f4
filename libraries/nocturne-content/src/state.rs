//! Observable states of the content list.

use nocturne_core::ContentItem;

/// The three states the list consumer can observe.
///
/// There is deliberately no error state: a failed fetch is logged and
/// surfaced as [`ContentListState::Empty`], identical to a profile with
/// no content.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentListState {
    /// Fetch in flight
    Loading,

    /// Fetch resolved with at least one item, newest first
    Loaded(Vec<ContentItem>),

    /// Fetch resolved with no items (or failed)
    Empty,
}

impl ContentListState {
    /// Build the resolved state for a fetched list.
    pub fn from_items(items: Vec<ContentItem>) -> Self {
        if items.is_empty() {
            Self::Empty
        } else {
            Self::Loaded(items)
        }
    }

    /// Whether a fetch is still in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The loaded items (empty slice unless `Loaded`)
    pub fn items(&self) -> &[ContentItem] {
        match self {
            Self::Loaded(items) => items,
            Self::Loading | Self::Empty => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use nocturne_core::{MediaKind, Profile};

    fn item(id: i64) -> ContentItem {
        ContentItem {
            id,
            created_at: Utc::now(),
            title: "Estrellita donde estas".to_string(),
            subtitle: "Cancion de cuna".to_string(),
            kind: MediaKind::Music,
            target_profile: Profile::Princesa,
            source_uri: "https://example.com/estrellita.mp3".to_string(),
            duration: "4 min".to_string(),
        }
    }

    #[test]
    fn empty_fetch_is_empty_not_loading() {
        let state = ContentListState::from_items(vec![]);
        assert_eq!(state, ContentListState::Empty);
        assert!(!state.is_loading());
    }

    #[test]
    fn loaded_keeps_order() {
        let state = ContentListState::from_items(vec![item(2), item(1)]);
        let ids: Vec<i64> = state.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
