// src/lib.rs
// Catalog Store - local-first persistence for a streaming catalog admin tool
//
// Architecture:
// - Domain: plain typed records (Movie, Series, Episode) and derived stats
// - Storage: host key-value blob stores (memory, files, SQLite)
// - Repositories: one narrow trait per collection, whole-collection codec
// - Services: CatalogStore (CRUD, cascade, session) and statistics
// - Explicit: the store is constructed once and passed around, no globals

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;
pub mod storage;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    by_episode_number, generate_id, now_millis, DashboardStats, Episode, Movie, Series,
    DEFAULT_EPISODE_VIEW_WEIGHT,
};

// ============================================================================
// PUBLIC API - Errors and configuration
// ============================================================================

pub use config::{BackendConfig, DecodePolicy, StorageKeys, StoreConfig};
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Storage and repositories
// ============================================================================

pub use storage::{BlobStore, FileBlobStore, MemoryBlobStore, SqliteBlobStore};

pub use repositories::{
    BlobEpisodeRepository, BlobMovieRepository, BlobSeriesRepository, BlobSessionRepository,
    EpisodeRepository, MovieRepository, SeriesRepository, SessionRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{CatalogStore, StatisticsService};
