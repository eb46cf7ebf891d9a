// src/config.rs
//
// Store configuration
//
// Every field has a default, so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::DEFAULT_EPISODE_VIEW_WEIGHT;
use crate::error::{AppError, AppResult};

/// Which host key-value store backs the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BackendConfig {
    /// Process-local map, lost on exit
    #[default]
    Memory,
    /// One file per key under `path`
    File { path: PathBuf },
    /// A single SQLite database file
    Sqlite { path: PathBuf },
}

/// What a read does when a stored collection cannot be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DecodePolicy {
    /// Log a warning and treat the collection as empty
    #[default]
    Lenient,
    /// Return the decode (or backend read) error to the caller
    Strict,
}

/// Blob keys of the four persisted documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageKeys {
    #[serde(default = "default_session_key")]
    pub session: String,
    #[serde(default = "default_movies_key")]
    pub movies: String,
    #[serde(default = "default_series_key")]
    pub series: String,
    #[serde(default = "default_episodes_key")]
    pub episodes: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            session: default_session_key(),
            movies: default_movies_key(),
            series: default_series_key(),
            episodes: default_episodes_key(),
        }
    }
}

fn default_session_key() -> String {
    "yakmov_admin_logged".to_string()
}

fn default_movies_key() -> String {
    "yakmov_movies".to_string()
}

fn default_series_key() -> String {
    "yakmov_series".to_string()
}

fn default_episodes_key() -> String {
    "yakmov_episodes".to_string()
}

fn default_episode_view_weight() -> u64 {
    DEFAULT_EPISODE_VIEW_WEIGHT
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub keys: StorageKeys,
    /// Views credited per episode in `DashboardStats::total_views`
    #[serde(default = "default_episode_view_weight")]
    pub episode_view_weight: u64,
    #[serde(default)]
    pub decode_policy: DecodePolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            keys: StorageKeys::default(),
            episode_view_weight: default_episode_view_weight(),
            decode_policy: DecodePolicy::default(),
        }
    }
}

impl StoreConfig {
    /// Load a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Default directory for on-disk backends: {APP_DATA}/catalog-store
    pub fn default_data_dir() -> AppResult<PathBuf> {
        let app_data_dir = dirs::data_dir()
            .ok_or_else(|| AppError::Config("Could not determine app data directory".to_string()))?;
        Ok(app_data_dir.join("catalog-store"))
    }

    /// Config backed by a SQLite file in the default data directory.
    pub fn sqlite_in_data_dir() -> AppResult<Self> {
        let path = Self::default_data_dir()?.join("catalog.db");
        Ok(Self {
            backend: BackendConfig::Sqlite { path },
            ..Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: StoreConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.keys.movies, "yakmov_movies");
        assert_eq!(config.episode_view_weight, 150);
        assert_eq!(config.decode_policy, DecodePolicy::Lenient);
    }

    #[test]
    fn test_partial_keys_keep_other_defaults() {
        let raw = r#"{"keys":{"movies":"films"},"decode_policy":"strict"}"#;
        let config: StoreConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.keys.movies, "films");
        assert_eq!(config.keys.series, "yakmov_series");
        assert_eq!(config.decode_policy, DecodePolicy::Strict);
    }

    #[test]
    fn test_backend_tagging() {
        let config: StoreConfig =
            serde_json::from_str(r#"{"backend":{"kind":"sqlite","path":"/tmp/c.db"}}"#).unwrap();
        assert_eq!(
            config.backend,
            BackendConfig::Sqlite { path: PathBuf::from("/tmp/c.db") }
        );
    }

    #[test]
    fn test_default_data_dir_is_app_subdir() {
        match dirs::data_dir() {
            Some(base) => {
                let dir = StoreConfig::default_data_dir().unwrap();
                assert_eq!(dir, base.join("catalog-store"));
            }
            None => assert!(matches!(
                StoreConfig::default_data_dir(),
                Err(AppError::Config(_))
            )),
        }
    }

    #[test]
    fn test_sqlite_in_data_dir() {
        let Ok(dir) = StoreConfig::default_data_dir() else {
            assert!(StoreConfig::sqlite_in_data_dir().is_err());
            return;
        };

        let config = StoreConfig::sqlite_in_data_dir().unwrap();
        assert_eq!(config.backend, BackendConfig::Sqlite { path: dir.join("catalog.db") });
        assert_eq!(config.keys, StorageKeys::default());
        assert_eq!(config.episode_view_weight, DEFAULT_EPISODE_VIEW_WEIGHT);
        assert_eq!(config.decode_policy, DecodePolicy::Lenient);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"episode_view_weight": 10}}"#).unwrap();

        let config = StoreConfig::load(file.path()).unwrap();
        assert_eq!(config.episode_view_weight, 10);
    }

    #[test]
    fn test_load_invalid_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = StoreConfig::load(file.path());
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
