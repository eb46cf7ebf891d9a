// src/storage/mod.rs
//
// Host key-value blob stores
//
// RULES:
// - Stores are DUMB byte holders: get / set / remove by key
// - NO knowledge of records or collections
// - Absence is Ok(None), never an error

pub mod blob_store;
pub mod file_blob_store;
pub mod memory_blob_store;
pub mod sqlite_blob_store;

pub use blob_store::BlobStore;
pub use file_blob_store::FileBlobStore;
pub use memory_blob_store::MemoryBlobStore;
pub use sqlite_blob_store::SqliteBlobStore;

#[cfg(test)]
pub use blob_store::MockBlobStore;
