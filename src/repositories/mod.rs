// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic (no cascades, no stats)
// - NO cross-repository calls
// - One narrow trait per collection, so an indexed backend can replace the
//   whole-collection codec without touching callers

pub mod blob_collection;
pub mod episode_repository;
pub mod movie_repository;
pub mod series_repository;
pub mod session_repository;

pub use blob_collection::BlobCollection;
pub use episode_repository::{BlobEpisodeRepository, EpisodeRepository};
pub use movie_repository::{BlobMovieRepository, MovieRepository};
pub use series_repository::{BlobSeriesRepository, SeriesRepository};
pub use session_repository::{BlobSessionRepository, SessionRepository};
