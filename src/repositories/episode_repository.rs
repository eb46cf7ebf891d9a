// src/repositories/episode_repository.rs
//
// Episode persistence over a blob store.

use std::sync::Arc;

use crate::config::DecodePolicy;
use crate::domain::Episode;
use crate::error::AppResult;
use crate::repositories::blob_collection::BlobCollection;
use crate::storage::BlobStore;

// ---------------------------------------------------------------------
// Repository contract
// ---------------------------------------------------------------------
pub trait EpisodeRepository: Send + Sync {
    /// Append an episode. The parent series is NOT checked.
    fn save(&self, episode: &Episode) -> AppResult<()>;

    fn list_all(&self) -> AppResult<Vec<Episode>>;

    /// Episodes of one series, in insertion order.
    fn list_by_series(&self, series_id: &str) -> AppResult<Vec<Episode>>;

    fn delete(&self, id: &str) -> AppResult<usize>;

    /// Remove every episode of a series in one write.
    fn delete_by_series(&self, series_id: &str) -> AppResult<usize>;
}

pub struct BlobEpisodeRepository {
    episodes: BlobCollection<Episode>,
}

impl BlobEpisodeRepository {
    pub fn new(store: Arc<dyn BlobStore>, key: impl Into<String>, policy: DecodePolicy) -> Self {
        Self {
            episodes: BlobCollection::new(store, key, policy),
        }
    }
}

impl EpisodeRepository for BlobEpisodeRepository {
    fn save(&self, episode: &Episode) -> AppResult<()> {
        self.episodes.append(episode.clone())
    }

    fn list_all(&self) -> AppResult<Vec<Episode>> {
        self.episodes.load()
    }

    fn list_by_series(&self, series_id: &str) -> AppResult<Vec<Episode>> {
        let mut episodes = self.episodes.load()?;
        episodes.retain(|e| e.belongs_to(series_id));
        Ok(episodes)
    }

    fn delete(&self, id: &str) -> AppResult<usize> {
        self.episodes.remove_where(|e| e.id == id)
    }

    fn delete_by_series(&self, series_id: &str) -> AppResult<usize> {
        self.episodes.remove_where(|e| e.belongs_to(series_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBlobStore;

    fn repo() -> BlobEpisodeRepository {
        BlobEpisodeRepository::new(
            Arc::new(MemoryBlobStore::new()),
            "episodes",
            DecodePolicy::Lenient,
        )
    }

    fn episode(id: &str, series_id: &str, number: u32) -> Episode {
        let mut e = Episode::new(series_id, number, format!("https://player.example/{}", id));
        e.id = id.to_string();
        e
    }

    #[test]
    fn test_list_by_series_filters_and_keeps_order() {
        let repo = repo();
        repo.save(&episode("a1", "a", 2)).unwrap();
        repo.save(&episode("b1", "b", 1)).unwrap();
        repo.save(&episode("a2", "a", 1)).unwrap();

        let ids: Vec<String> = repo
            .list_by_series("a")
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["a1", "a2"]);
        assert!(repo.list_by_series("zzz").unwrap().is_empty());
    }

    #[test]
    fn test_delete_by_series_leaves_others() {
        let repo = repo();
        repo.save(&episode("a1", "a", 1)).unwrap();
        repo.save(&episode("b1", "b", 1)).unwrap();
        repo.save(&episode("a2", "a", 2)).unwrap();

        assert_eq!(repo.delete_by_series("a").unwrap(), 2);

        let remaining = repo.list_all().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "b1");
    }
}
