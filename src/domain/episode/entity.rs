use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::identity::{generate_id, now_millis};

/// Represents a single episode belonging to a Series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Caller-assigned identifier
    pub id: String,

    /// Reference to parent Series (REQUIRED, checked by caller only)
    pub series_id: String,

    /// Episode number. Duplicates within a series are legal.
    pub episode_number: u32,

    /// Episode title (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Embeddable player URL
    pub stream_url: String,

    /// Thumbnail as a data URI (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Creation timestamp, Unix epoch milliseconds
    pub added_at: i64,
}

impl Episode {
    /// Create a new Episode
    /// series_id MUST name an existing Series (checked by caller)
    pub fn new(
        series_id: impl Into<String>,
        episode_number: u32,
        stream_url: impl Into<String>,
    ) -> Self {
        Self {
            id: generate_id(),
            series_id: series_id.into(),
            episode_number,
            title: None,
            stream_url: stream_url.into(),
            image: None,
            added_at: now_millis(),
        }
    }

    pub fn belongs_to(&self, series_id: &str) -> bool {
        self.series_id == series_id
    }
}

/// Orders episodes by episode number only.
/// Used with a stable sort, so equal numbers keep insertion order.
pub fn by_episode_number(a: &Episode, b: &Episode) -> Ordering {
    a.episode_number.cmp(&b.episode_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_episode_has_no_title_or_image() {
        let episode = Episode::new("s1", 1, "https://player.example/s1e1");
        assert_eq!(episode.series_id, "s1");
        assert!(episode.title.is_none());
        assert!(episode.image.is_none());
        assert!(episode.belongs_to("s1"));
        assert!(!episode.belongs_to("s2"));
    }

    #[test]
    fn test_decodes_without_optional_fields() {
        let json = r#"{"id":"e1","seriesId":"s1","episodeNumber":2,"streamUrl":"u","addedAt":5}"#;
        let episode: Episode = serde_json::from_str(json).unwrap();
        assert_eq!(episode.episode_number, 2);
        assert!(episode.title.is_none());
    }

    #[test]
    fn test_sort_by_number_is_stable_for_duplicates() {
        let mut a = Episode::new("s1", 2, "a");
        a.id = "a".into();
        let mut b = Episode::new("s1", 1, "b");
        b.id = "b".into();
        let mut c = Episode::new("s1", 2, "c");
        c.id = "c".into();

        let mut episodes = vec![a, b, c];
        episodes.sort_by(by_episode_number);

        let ids: Vec<&str> = episodes.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }
}
