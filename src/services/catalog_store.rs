// src/services/catalog_store.rs
//
// Catalog Store - the single entry point for the admin UI
//
// CRITICAL RULES:
// - Constructed once and passed by reference; there is no global instance
// - Records are stored exactly as supplied, no field validation
// - add_episode does NOT check that the series exists
// - delete_series is two independent commits: series first, then episodes

use std::sync::Arc;

use log::{debug, info, warn};

use crate::config::{BackendConfig, StoreConfig};
use crate::domain::{by_episode_number, DashboardStats, Episode, Movie, Series};
use crate::error::AppResult;
use crate::repositories::{
    BlobEpisodeRepository, BlobMovieRepository, BlobSeriesRepository, BlobSessionRepository,
    EpisodeRepository, MovieRepository, SeriesRepository, SessionRepository,
};
use crate::services::StatisticsService;
use crate::storage::{BlobStore, FileBlobStore, MemoryBlobStore, SqliteBlobStore};

pub struct CatalogStore {
    session_repo: Arc<dyn SessionRepository>,
    movie_repo: Arc<dyn MovieRepository>,
    series_repo: Arc<dyn SeriesRepository>,
    episode_repo: Arc<dyn EpisodeRepository>,
    statistics_service: StatisticsService,
}

impl CatalogStore {
    pub fn new(
        session_repo: Arc<dyn SessionRepository>,
        movie_repo: Arc<dyn MovieRepository>,
        series_repo: Arc<dyn SeriesRepository>,
        episode_repo: Arc<dyn EpisodeRepository>,
        episode_view_weight: u64,
    ) -> Self {
        let statistics_service = StatisticsService::new(
            movie_repo.clone(),
            series_repo.clone(),
            episode_repo.clone(),
            episode_view_weight,
        );
        Self {
            session_repo,
            movie_repo,
            series_repo,
            episode_repo,
            statistics_service,
        }
    }

    /// Build a store over an existing blob store using the configured keys.
    pub fn with_blob_store(store: Arc<dyn BlobStore>, config: &StoreConfig) -> Self {
        let keys = &config.keys;
        let policy = config.decode_policy;

        let session_repo: Arc<dyn SessionRepository> =
            Arc::new(BlobSessionRepository::new(store.clone(), keys.session.clone(), policy));
        let movie_repo: Arc<dyn MovieRepository> =
            Arc::new(BlobMovieRepository::new(store.clone(), keys.movies.clone(), policy));
        let series_repo: Arc<dyn SeriesRepository> =
            Arc::new(BlobSeriesRepository::new(store.clone(), keys.series.clone(), policy));
        let episode_repo: Arc<dyn EpisodeRepository> =
            Arc::new(BlobEpisodeRepository::new(store, keys.episodes.clone(), policy));

        Self::new(
            session_repo,
            movie_repo,
            series_repo,
            episode_repo,
            config.episode_view_weight,
        )
    }

    /// Open the backend named by `config` and wire the store over it.
    pub fn open(config: &StoreConfig) -> AppResult<Self> {
        let store: Arc<dyn BlobStore> = match &config.backend {
            BackendConfig::Memory => Arc::new(MemoryBlobStore::new()),
            BackendConfig::File { path } => Arc::new(FileBlobStore::new(path)?),
            BackendConfig::Sqlite { path } => Arc::new(SqliteBlobStore::open(path)?),
        };
        info!("Catalog store opened ({:?}, {:?} decoding)", config.backend, config.decode_policy);
        Ok(Self::with_blob_store(store, config))
    }

    // ------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------

    pub fn is_authenticated(&self) -> AppResult<bool> {
        self.session_repo.is_set()
    }

    /// Mark the admin as authenticated. The credential check happens before
    /// this call and is not the store's concern.
    pub fn login(&self) -> AppResult<()> {
        self.session_repo.set()?;
        info!("Admin session opened");
        Ok(())
    }

    pub fn logout(&self) -> AppResult<()> {
        self.session_repo.clear()?;
        info!("Admin session closed");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Movies
    // ------------------------------------------------------------------

    pub fn list_movies(&self) -> AppResult<Vec<Movie>> {
        self.movie_repo.list_all()
    }

    pub fn find_movie(&self, id: &str) -> AppResult<Option<Movie>> {
        Ok(self.movie_repo.list_all()?.into_iter().find(|m| m.id == id))
    }

    pub fn add_movie(&self, movie: Movie) -> AppResult<()> {
        self.movie_repo.save(&movie)?;
        debug!("Added movie {} '{}'", movie.id, movie.title);
        Ok(())
    }

    /// No-op when the id is unknown.
    pub fn delete_movie(&self, id: &str) -> AppResult<()> {
        let removed = self.movie_repo.delete(id)?;
        debug!("Deleted {} movie(s) with id {}", removed, id);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Series
    // ------------------------------------------------------------------

    pub fn list_series(&self) -> AppResult<Vec<Series>> {
        self.series_repo.list_all()
    }

    pub fn find_series(&self, id: &str) -> AppResult<Option<Series>> {
        Ok(self.series_repo.list_all()?.into_iter().find(|s| s.id == id))
    }

    pub fn add_series(&self, series: Series) -> AppResult<()> {
        self.series_repo.save(&series)?;
        debug!("Added series {} '{}'", series.id, series.title);
        Ok(())
    }

    /// Delete a series and cascade to its episodes.
    ///
    /// The series collection is committed first, then the episode collection.
    /// If the second write fails the error is returned and the series' episodes
    /// stay behind as orphans; nothing rolls the first write back.
    pub fn delete_series(&self, id: &str) -> AppResult<()> {
        let removed_series = self.series_repo.delete(id)?;

        let removed_episodes = self.episode_repo.delete_by_series(id).map_err(|e| {
            warn!("Series {} deleted but its episodes were not: {}", id, e);
            e
        })?;

        info!(
            "Deleted {} series with id {} and {} episode(s)",
            removed_series, id, removed_episodes
        );
        Ok(())
    }

    // ------------------------------------------------------------------
    // Episodes
    // ------------------------------------------------------------------

    /// All episodes, or only those of `series_id`, in insertion order.
    ///
    /// An empty `series_id` is no filter.
    pub fn list_episodes(&self, series_id: Option<&str>) -> AppResult<Vec<Episode>> {
        match series_id.filter(|id| !id.is_empty()) {
            Some(series_id) => self.episode_repo.list_by_series(series_id),
            None => self.episode_repo.list_all(),
        }
    }

    /// Episodes of a series ordered for playback: by episode number, equal
    /// numbers keeping insertion order.
    pub fn series_playlist(&self, series_id: &str) -> AppResult<Vec<Episode>> {
        let mut episodes = self.episode_repo.list_by_series(series_id)?;
        episodes.sort_by(by_episode_number);
        Ok(episodes)
    }

    /// Number to suggest for the next episode of a series (1 when it has none).
    pub fn next_episode_number(&self, series_id: &str) -> AppResult<u32> {
        let highest = self
            .episode_repo
            .list_by_series(series_id)?
            .iter()
            .map(|e| e.episode_number)
            .max();
        Ok(highest.map_or(1, |n| n.saturating_add(1)))
    }

    /// Append an episode. The referenced series is not checked.
    pub fn add_episode(&self, episode: Episode) -> AppResult<()> {
        self.episode_repo.save(&episode)?;
        debug!(
            "Added episode {} (#{} of series {})",
            episode.id, episode.episode_number, episode.series_id
        );
        Ok(())
    }

    pub fn delete_episode(&self, id: &str) -> AppResult<()> {
        let removed = self.episode_repo.delete(id)?;
        debug!("Deleted {} episode(s) with id {}", removed, id);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Statistics
    // ------------------------------------------------------------------

    pub fn get_stats(&self) -> AppResult<DashboardStats> {
        self.statistics_service.calculate_dashboard_statistics()
    }
}
