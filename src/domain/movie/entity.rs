use serde::{Deserialize, Serialize};

use crate::domain::identity::{generate_id, now_millis};

/// A standalone film in the catalog.
/// Field contents are never validated here; the admin form owns that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Caller-assigned identifier
    pub id: String,

    pub title: String,

    pub description: String,

    pub category: String,

    /// Cover art as a data URI (opaque to the store)
    pub cover_image: String,

    /// Backdrop art as a data URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,

    /// Embeddable player URL
    pub stream_url: String,

    pub download_url: String,

    /// Release year, free text
    pub year: String,

    pub country: String,

    /// Running time, free text (e.g. "2h 10m")
    pub duration: String,

    /// Quality label (e.g. "1080p")
    pub quality: String,

    /// View counter
    #[serde(default)]
    pub views: u64,

    /// Creation timestamp, Unix epoch milliseconds
    pub added_at: i64,
}

impl Movie {
    /// Create a new Movie with a fresh ID and creation timestamp.
    /// Remaining fields start empty and are filled in by the caller.
    pub fn new(title: impl Into<String>, stream_url: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            title: title.into(),
            description: String::new(),
            category: String::new(),
            cover_image: String::new(),
            background_image: None,
            stream_url: stream_url.into(),
            download_url: String::new(),
            year: String::new(),
            country: String::new(),
            duration: String::new(),
            quality: String::new(),
            views: 0,
            added_at: now_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_movie_starts_unviewed() {
        let movie = Movie::new("Dune", "https://player.example/dune");
        assert_eq!(movie.views, 0);
        assert!(!movie.id.is_empty());
        assert!(movie.added_at > 0);
        assert!(movie.background_image.is_none());
    }

    #[test]
    fn test_decodes_stored_document_shape() {
        let json = r#"{
            "id": "1700000000000",
            "title": "Dune",
            "description": "Spice",
            "category": "Sci-Fi",
            "coverImage": "data:image/png;base64,AAAA",
            "backgroundImage": "data:image/png;base64,BBBB",
            "streamUrl": "https://player.example/dune",
            "downloadUrl": "https://dl.example/dune",
            "year": "2021",
            "country": "US",
            "duration": "2h 35m",
            "quality": "4K",
            "views": 42,
            "addedAt": 1700000000000
        }"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.cover_image, "data:image/png;base64,AAAA");
        assert_eq!(movie.background_image.as_deref(), Some("data:image/png;base64,BBBB"));
        assert_eq!(movie.views, 42);
        assert_eq!(movie.added_at, 1_700_000_000_000);
    }

    #[test]
    fn test_missing_views_defaults_to_zero() {
        let json = r#"{
            "id": "1", "title": "t", "description": "", "category": "",
            "coverImage": "", "streamUrl": "", "downloadUrl": "", "year": "",
            "country": "", "duration": "", "quality": "", "addedAt": 1
        }"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.views, 0);
        assert!(movie.background_image.is_none());
    }

    #[test]
    fn test_absent_background_is_omitted() {
        let movie = Movie::new("Dune", "u");
        let json = serde_json::to_string(&movie).unwrap();
        assert!(!json.contains("backgroundImage"));
        assert!(json.contains("\"streamUrl\":\"u\""));
    }
}
