// src/repositories/blob_collection.rs
//
// Whole-collection codec
//
// A collection lives under one key as a JSON array. Every mutation reads the
// full array, edits it in memory and writes the full array back. There is no
// cache between calls, so the last writer wins.
//
// Mutations never write over a blob they could not read or decode, whatever
// the decode policy says.

use std::marker::PhantomData;
use std::sync::Arc;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::DecodePolicy;
use crate::error::AppResult;
use crate::storage::BlobStore;

pub struct BlobCollection<T> {
    blobs: Arc<dyn BlobStore>,
    key: String,
    policy: DecodePolicy,
    _record: PhantomData<fn() -> T>,
}

impl<T> BlobCollection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(store: Arc<dyn BlobStore>, key: impl Into<String>, policy: DecodePolicy) -> Self {
        Self {
            blobs: store,
            key: key.into(),
            policy,
            _record: PhantomData,
        }
    }

    /// Read every record in insertion order.
    ///
    /// An absent blob is an empty collection. An unreadable or undecodable blob
    /// is empty under `DecodePolicy::Lenient` and an error under `Strict`.
    pub fn load(&self) -> AppResult<Vec<T>> {
        let raw = match self.blobs.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(Vec::new()),
            Err(e) => match self.policy {
                DecodePolicy::Strict => return Err(e),
                DecodePolicy::Lenient => {
                    warn!("Could not read '{}', treating as empty: {}", self.key, e);
                    return Ok(Vec::new());
                }
            },
        };

        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(records) => {
                debug!("Loaded {} record(s) from '{}'", records.len(), self.key);
                Ok(records)
            }
            Err(e) => match self.policy {
                DecodePolicy::Strict => Err(e.into()),
                DecodePolicy::Lenient => {
                    warn!("Malformed data under '{}', treating as empty: {}", self.key, e);
                    Ok(Vec::new())
                }
            },
        }
    }

    /// Read the collection for a read-modify-write cycle.
    ///
    /// Backend and decode errors are always returned so the caller never
    /// writes a partial collection over records it failed to read.
    fn load_for_update(&self) -> AppResult<Vec<T>> {
        let Some(raw) = self.blobs.get(&self.key)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str::<Vec<T>>(&raw).map_err(|e| {
            warn!("Refusing to rewrite malformed data under '{}': {}", self.key, e);
            e.into()
        })
    }

    /// Replace the stored collection with `records` in a single write.
    pub fn store(&self, records: &[T]) -> AppResult<()> {
        let raw = serde_json::to_string(records)?;
        self.blobs.set(&self.key, &raw)?;
        debug!("Stored {} record(s) under '{}'", records.len(), self.key);
        Ok(())
    }

    pub fn append(&self, record: T) -> AppResult<()> {
        let mut records = self.load_for_update()?;
        records.push(record);
        self.store(&records)
    }

    /// Drop every record matching `predicate` and return how many went.
    ///
    /// The collection is written back even when nothing matched.
    pub fn remove_where<F>(&self, predicate: F) -> AppResult<usize>
    where
        F: Fn(&T) -> bool,
    {
        let mut records = self.load_for_update()?;
        let before = records.len();
        records.retain(|r| !predicate(r));
        let removed = before - records.len();
        self.store(&records)?;
        Ok(removed)
    }
}
