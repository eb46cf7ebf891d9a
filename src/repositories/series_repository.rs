// src/repositories/series_repository.rs

use std::sync::Arc;

use crate::config::DecodePolicy;
use crate::domain::Series;
use crate::error::AppResult;
use crate::repositories::blob_collection::BlobCollection;
use crate::storage::BlobStore;

pub trait SeriesRepository: Send + Sync {
    fn save(&self, series: &Series) -> AppResult<()>;
    fn list_all(&self) -> AppResult<Vec<Series>>;
    /// Removes the series record only. Episodes are not touched here.
    fn delete(&self, id: &str) -> AppResult<usize>;
}

pub struct BlobSeriesRepository {
    series: BlobCollection<Series>,
}

impl BlobSeriesRepository {
    pub fn new(store: Arc<dyn BlobStore>, key: impl Into<String>, policy: DecodePolicy) -> Self {
        Self {
            series: BlobCollection::new(store, key, policy),
        }
    }
}

impl SeriesRepository for BlobSeriesRepository {
    fn save(&self, series: &Series) -> AppResult<()> {
        self.series.append(series.clone())
    }

    fn list_all(&self) -> AppResult<Vec<Series>> {
        self.series.load()
    }

    fn delete(&self, id: &str) -> AppResult<usize> {
        self.series.remove_where(|s| s.id == id)
    }
}
