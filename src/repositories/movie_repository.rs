// src/repositories/movie_repository.rs
//
// Movie persistence over a blob store.

use std::sync::Arc;

use crate::config::DecodePolicy;
use crate::domain::Movie;
use crate::error::AppResult;
use crate::repositories::blob_collection::BlobCollection;
use crate::storage::BlobStore;

pub trait MovieRepository: Send + Sync {
    /// Append a movie. The ID is trusted to be unique.
    fn save(&self, movie: &Movie) -> AppResult<()>;
    fn list_all(&self) -> AppResult<Vec<Movie>>;
    /// Returns how many records were removed (0 when absent).
    fn delete(&self, id: &str) -> AppResult<usize>;
}

pub struct BlobMovieRepository {
    movies: BlobCollection<Movie>,
}

impl BlobMovieRepository {
    pub fn new(store: Arc<dyn BlobStore>, key: impl Into<String>, policy: DecodePolicy) -> Self {
        Self {
            movies: BlobCollection::new(store, key, policy),
        }
    }
}

impl MovieRepository for BlobMovieRepository {
    fn save(&self, movie: &Movie) -> AppResult<()> {
        self.movies.append(movie.clone())
    }

    fn list_all(&self) -> AppResult<Vec<Movie>> {
        self.movies.load()
    }

    fn delete(&self, id: &str) -> AppResult<usize> {
        self.movies.remove_where(|m| m.id == id)
    }
}
