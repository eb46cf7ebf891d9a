// src/storage/sqlite_blob_store.rs
//
// SQLite-backed blob store: one row per key in the `blobs` table.

use chrono::Utc;
use rusqlite::params;
use std::path::Path;
use std::sync::Arc;

use crate::db::{create_connection_pool, get_connection, initialize_database, ConnectionPool};
use crate::error::{AppError, AppResult};
use crate::storage::BlobStore;

pub struct SqliteBlobStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteBlobStore {
    /// Wrap an existing pool. The schema must already be initialized.
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Open (creating if needed) the database file and initialize its schema.
    pub fn open(db_path: &Path) -> AppResult<Self> {
        let pool = Arc::new(create_connection_pool(db_path)?);
        {
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
        }
        Ok(Self::new(pool))
    }
}

impl BlobStore for SqliteBlobStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare("SELECT value FROM blobs WHERE key = ?1")?;

        match stmt.query_row(params![key], |row| row.get::<_, String>(0)) {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT OR REPLACE INTO blobs (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let conn = self.pool.get()?;
        conn.execute("DELETE FROM blobs WHERE key = ?1", params![key])?;
        Ok(())
    }
}
