// src/storage/blob_store.rs

use crate::error::AppResult;

/// A key-addressed store of string blobs supplied by the host.
///
/// `set` replaces the whole value in one step: a later `get` sees either the
/// old value or the new one, never a mix.
#[cfg_attr(test, mockall::automock)]
pub trait BlobStore: Send + Sync {
    /// Returns `None` when the key has never been set or was removed.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> AppResult<()>;
}
