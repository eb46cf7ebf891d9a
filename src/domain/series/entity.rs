use serde::{Deserialize, Serialize};

use crate::domain::identity::{generate_id, now_millis};

/// A multi-episode show. Episodes reference it through `Episode::series_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub id: String,
    pub title: String,
    pub description: String,

    /// Cover art as a data URI
    pub cover_image: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,

    pub category: String,
    pub year: String,

    /// Number of seasons as announced by the admin (not derived from episodes)
    pub seasons_count: u32,

    /// Unix epoch milliseconds
    pub added_at: i64,
}

impl Series {
    /// Create a new Series with a fresh ID and creation timestamp.
    pub fn new(title: impl Into<String>, seasons_count: u32) -> Self {
        Self {
            id: generate_id(),
            title: title.into(),
            description: String::new(),
            cover_image: String::new(),
            background_image: None,
            category: String::new(),
            year: String::new(),
            seasons_count,
            added_at: now_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_stored_document_shape() {
        let json = r#"{
            "id": "s1",
            "title": "Dark",
            "description": "Time travel",
            "coverImage": "data:image/jpeg;base64,AAAA",
            "category": "Drama",
            "year": "2017",
            "seasonsCount": 3,
            "addedAt": 1500000000000
        }"#;

        let series: Series = serde_json::from_str(json).unwrap();
        assert_eq!(series.seasons_count, 3);
        assert!(series.background_image.is_none());
        assert_eq!(series.category, "Drama");
    }

    #[test]
    fn test_serializes_camel_case() {
        let series = Series::new("Dark", 3);
        let json = serde_json::to_string(&series).unwrap();
        assert!(json.contains("\"seasonsCount\":3"));
        assert!(json.contains("\"addedAt\":"));
    }
}
