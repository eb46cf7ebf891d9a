// src/services/statistics_service.rs
use std::sync::Arc;

use log::debug;

use crate::domain::DashboardStats;
use crate::error::AppResult;
use crate::repositories::{EpisodeRepository, MovieRepository, SeriesRepository};

/// Derives dashboard figures. Nothing is cached or stored; every call re-reads
/// the three collections.
pub struct StatisticsService {
    movie_repo: Arc<dyn MovieRepository>,
    series_repo: Arc<dyn SeriesRepository>,
    episode_repo: Arc<dyn EpisodeRepository>,
    episode_view_weight: u64,
}

impl StatisticsService {
    pub fn new(
        movie_repo: Arc<dyn MovieRepository>,
        series_repo: Arc<dyn SeriesRepository>,
        episode_repo: Arc<dyn EpisodeRepository>,
        episode_view_weight: u64,
    ) -> Self {
        Self {
            movie_repo,
            series_repo,
            episode_repo,
            episode_view_weight,
        }
    }

    pub fn calculate_dashboard_statistics(&self) -> AppResult<DashboardStats> {
        let movies = self.movie_repo.list_all()?;
        let series = self.series_repo.list_all()?;
        let episodes = self.episode_repo.list_all()?;

        let stats = DashboardStats::derive(
            movies.iter().map(|m| m.views),
            series.len(),
            episodes.len(),
            self.episode_view_weight,
        );

        debug!(
            "Dashboard: {} movie(s), {} series, {} episode(s), {} view(s)",
            stats.total_movies, stats.total_series, stats.total_episodes, stats.total_views
        );
        Ok(stats)
    }
}
