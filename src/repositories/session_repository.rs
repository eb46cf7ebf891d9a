// src/repositories/session_repository.rs
//
// The admin session flag: the literal "true" under its key, or nothing.

use std::sync::Arc;

use log::warn;

use crate::config::DecodePolicy;
use crate::error::AppResult;
use crate::storage::BlobStore;

const AUTHENTICATED: &str = "true";

pub trait SessionRepository: Send + Sync {
    fn is_set(&self) -> AppResult<bool>;
    fn set(&self) -> AppResult<()>;
    fn clear(&self) -> AppResult<()>;
}

pub struct BlobSessionRepository {
    store: Arc<dyn BlobStore>,
    key: String,
    policy: DecodePolicy,
}

impl BlobSessionRepository {
    pub fn new(store: Arc<dyn BlobStore>, key: impl Into<String>, policy: DecodePolicy) -> Self {
        Self {
            store,
            key: key.into(),
            policy,
        }
    }
}

impl SessionRepository for BlobSessionRepository {
    /// An unreadable flag counts as logged out under `DecodePolicy::Lenient`.
    fn is_set(&self) -> AppResult<bool> {
        match self.store.get(&self.key) {
            Ok(flag) => Ok(flag.as_deref() == Some(AUTHENTICATED)),
            Err(e) => match self.policy {
                DecodePolicy::Strict => Err(e),
                DecodePolicy::Lenient => {
                    warn!("Could not read session flag '{}', treating as unset: {}", self.key, e);
                    Ok(false)
                }
            },
        }
    }

    fn set(&self) -> AppResult<()> {
        self.store.set(&self.key, AUTHENTICATED)
    }

    fn clear(&self) -> AppResult<()> {
        self.store.remove(&self.key)
    }
}
