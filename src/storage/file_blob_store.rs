// src/storage/file_blob_store.rs

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, error, info};

use crate::error::{AppError, AppResult};
use crate::storage::BlobStore;

/// Blob store keeping one `<key>.json` file per key under a base directory.
pub struct FileBlobStore {
    base_path: PathBuf,
}

impl FileBlobStore {
    pub fn new<P: AsRef<Path>>(base_path: P) -> AppResult<Self> {
        let base_path = base_path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path).map_err(|e| {
            error!("Failed to create blob dir {}: {}", base_path.display(), e);
            AppError::Io(e)
        })?;
        info!("FileBlobStore initialized at {}", base_path.display());
        Ok(Self { base_path })
    }

    fn blob_path(&self, key: &str) -> AppResult<PathBuf> {
        let valid = !key.is_empty()
            && !key.contains(['/', '\\'])
            && key != "."
            && !key.contains("..");
        if !valid {
            return Err(AppError::InvalidKey(key.to_string()));
        }
        Ok(self.base_path.join(format!("{}.json", key)))
    }

    /// Write `value` to `tmp_path`, flush it, then rename it over `path`.
    fn commit(tmp_path: &Path, path: &Path, value: &str) -> AppResult<()> {
        let mut f = fs::File::create(tmp_path).map_err(|e| {
            error!("Create failed {}: {}", tmp_path.display(), e);
            AppError::Io(e)
        })?;
        f.write_all(value.as_bytes())
            .and_then(|_| f.sync_all())
            .map_err(|e| {
                error!("Write failed {}: {}", tmp_path.display(), e);
                AppError::Io(e)
            })?;
        drop(f);

        fs::rename(tmp_path, path).map_err(|e| {
            error!("Rename failed {} -> {}: {}", tmp_path.display(), path.display(), e);
            AppError::Io(e)
        })
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.blob_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!("Read {} byte(s) from {}", content.len(), path.display());
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                error!("Read failed {}: {}", path.display(), e);
                Err(AppError::Io(e))
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.blob_path(key)?;
        let tmp_path = path.with_extension("json.tmp");

        // Write beside the target, then rename over it
        if let Err(e) = Self::commit(&tmp_path, &path, value) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }
        debug!("Wrote {} byte(s) to {}", value.len(), path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.blob_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                error!("Remove failed {}: {}", path.display(), e);
                Err(AppError::Io(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_and_persistence_across_instances() {
        let dir = tempfile::tempdir().unwrap();

        let store = FileBlobStore::new(dir.path()).unwrap();
        store.set("yakmov_movies", "[]").unwrap();

        let reopened = FileBlobStore::new(dir.path()).unwrap();
        assert_eq!(reopened.get("yakmov_movies").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStore::new(dir.path()).unwrap();
        assert_eq!(store.get("absent").unwrap(), None);
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStore::new(dir.path()).unwrap();
        store.set("k", "value").unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["k.json".to_string()]);
    }

    #[test]
    fn test_failed_rename_cleans_up_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStore::new(dir.path()).unwrap();
        // A directory in the target's place makes the rename fail
        fs::create_dir(dir.path().join("k.json")).unwrap();
        fs::write(dir.path().join("k.json").join("inner"), "x").unwrap();

        assert!(matches!(store.set("k", "value"), Err(AppError::Io(_))));
        assert!(!dir.path().join("k.json.tmp").exists());
        assert!(dir.path().join("k.json").is_dir());
    }

    #[test]
    fn test_remove_absent_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStore::new(dir.path()).unwrap();
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_path_like_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStore::new(dir.path()).unwrap();

        for key in ["", "../escape", "a/b", "a\\b", "."] {
            assert!(
                matches!(store.set(key, "x"), Err(AppError::InvalidKey(_))),
                "key {:?} should be rejected",
                key
            );
        }
    }
}
