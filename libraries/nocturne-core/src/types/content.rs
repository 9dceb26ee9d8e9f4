/// Content item domain type
use crate::types::Profile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of media a content item carries.
///
/// Mirrors the `type` column of the remote `content` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Spoken-word recording (story, poem, guided meditation)
    Audio,

    /// Video clip
    Video,

    /// Music track (lullaby)
    Music,
}

impl MediaKind {
    /// Whether this kind renders through the video surface.
    ///
    /// Ear mode is only reachable for non-video items.
    pub fn is_video(self) -> bool {
        matches!(self, Self::Video)
    }
}

/// One playable item from the remote content table.
///
/// Owned by the external content source and read-only to the player.
/// `id` is unique within the source. `duration` is the display string
/// shown in the list (e.g. "5 min"), not a playback duration; the real
/// duration comes from the media element once metadata loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Unique item identifier
    pub id: i64,

    /// When the item was added to the source (list order key, newest first)
    pub created_at: DateTime<Utc>,

    /// Item title
    pub title: String,

    /// Short subtitle shown under the title
    pub subtitle: String,

    /// Media kind (wire name: `type`)
    #[serde(rename = "type")]
    pub kind: MediaKind,

    /// Which profile the item belongs to
    pub target_profile: Profile,

    /// URI of the media file
    pub source_uri: String,

    /// Display duration (e.g. "5 min")
    pub duration: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_wire_names() {
        assert_eq!(serde_json::to_string(&MediaKind::Audio).unwrap(), "\"audio\"");
        assert_eq!(serde_json::to_string(&MediaKind::Music).unwrap(), "\"music\"");

        let kind: MediaKind = serde_json::from_str("\"video\"").unwrap();
        assert!(kind.is_video());
    }

    #[test]
    fn item_deserializes_from_row_shape() {
        let row = r#"{
            "id": 7,
            "created_at": "2024-03-01T21:30:00Z",
            "title": "Para que descanses",
            "subtitle": "Meditacion guiada",
            "type": "audio",
            "target_profile": "Joha",
            "source_uri": "https://example.com/descansa.mp3",
            "duration": "15 min"
        }"#;

        let item: ContentItem = serde_json::from_str(row).unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.kind, MediaKind::Audio);
        assert_eq!(item.target_profile, Profile::Joha);
        assert!(!item.kind.is_video());
    }
}
