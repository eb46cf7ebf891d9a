use serde::{Deserialize, Serialize};

/// Views credited to every episode when estimating total views.
/// A placeholder popularity proxy, not a measurement.
pub const DEFAULT_EPISODE_VIEW_WEIGHT: u64 = 150;

/// Aggregate figures shown on the admin dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_movies: u64,
    pub total_series: u64,
    pub total_episodes: u64,
    /// Sum of movie view counters plus episodes × episode view weight
    pub total_views: u64,
}

impl DashboardStats {
    /// Derive the dashboard figures.
    ///
    /// `movie_views` yields each movie's view counter, so its length is the
    /// movie count.
    pub fn derive<I>(
        movie_views: I,
        total_series: usize,
        total_episodes: usize,
        episode_view_weight: u64,
    ) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let mut total_movies = 0u64;
        let mut views = 0u64;
        for v in movie_views {
            total_movies += 1;
            views = views.saturating_add(v);
        }

        let total_episodes = total_episodes as u64;
        let episode_views = total_episodes.saturating_mul(episode_view_weight);

        Self {
            total_movies,
            total_series: total_series as u64,
            total_episodes,
            total_views: views.saturating_add(episode_views),
        }
    }
}
