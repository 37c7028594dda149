//! Local draft cache backed by SQLite.
//!
//! The cache is a dumb, best-effort mirror of the remote draft store, scoped
//! to the device. It performs no validation and has no knowledge of the
//! network; the [`crate::store::DraftStore`] is its only writer.

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    error::{CacheResultExt, DraftError, Result},
    models::{CachedDraft, Draft},
};

mod migrations;
mod queries;

/// Synchronous cache connection handler.
///
/// Opened per operation; the async [`DraftCache`] handle wraps every call in
/// `spawn_blocking`.
pub(crate) struct CacheDb {
    connection: rusqlite::Connection,
}

impl CacheDb {
    /// Opens a cache connection and initializes the schema.
    pub(crate) fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = rusqlite::Connection::open(path)
            .cache_context("Failed to open cache connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Asynchronous handle to the local draft cache.
///
/// Holds only the cache file path; each operation opens its own connection
/// on a blocking thread, mirroring how short-lived CLI and UI sessions use
/// the cache.
#[derive(Debug, Clone)]
pub struct DraftCache {
    db_path: PathBuf,
}

impl DraftCache {
    /// Opens (and initializes) a cache at the given path, or at the default
    /// XDG data location when `path` is `None`.
    pub async fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let db_path = match path {
            Some(p) => p.as_ref().to_path_buf(),
            None => Self::default_cache_path()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DraftError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = CacheDb::new(&db_path_clone)?;
            Ok::<(), DraftError>(())
        })
        .await
        .map_err(|e| DraftError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(Self { db_path })
    }

    /// Returns the default cache path following XDG Base Directory
    /// specification.
    fn default_cache_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("fundry")
            .place_data_file("drafts.db")
            .map_err(|e| DraftError::XdgDirectory(e.to_string()))
    }

    /// Writes (or overwrites) the cache entry for the draft's key.
    ///
    /// Never fails: a full disk or any other storage error degrades to a
    /// logged warning, so a cache problem can never interrupt the user's
    /// editing session. Drafts without a cache key are skipped.
    pub async fn put(&self, draft: &Draft, cache_only: bool) {
        let Some(key) = draft.cache_key().map(String::from) else {
            log::warn!("Skipping cache write for draft without a cache key");
            return;
        };

        let db_path = self.db_path.clone();
        let draft = draft.clone();

        let outcome = task::spawn_blocking(move || {
            let db = CacheDb::new(&db_path)?;
            db.upsert_draft(&key, &draft, cache_only)
        })
        .await;

        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(e)) => log::warn!("Draft cache write degraded: {e}"),
            Err(e) => log::warn!("Draft cache write task failed: {e}"),
        }
    }

    /// Reads the cache entry for a key, if present.
    pub async fn get(&self, key: &str) -> Result<Option<CachedDraft>> {
        let db_path = self.db_path.clone();
        let key = key.to_string();

        task::spawn_blocking(move || {
            let db = CacheDb::new(&db_path)?;
            db.get_draft(&key)
        })
        .await
        .map_err(|e| DraftError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists every cached draft (unordered).
    pub async fn list(&self) -> Result<Vec<CachedDraft>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = CacheDb::new(&db_path)?;
            db.list_drafts()
        })
        .await
        .map_err(|e| DraftError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Removes the entry for a key, best-effort.
    ///
    /// Used when a draft graduates from a temporary local key to a remote id
    /// so the stale temporary row does not resurface in listings.
    pub async fn remove(&self, key: &str) {
        let db_path = self.db_path.clone();
        let key = key.to_string();

        let outcome = task::spawn_blocking(move || {
            let db = CacheDb::new(&db_path)?;
            db.remove_draft(&key)
        })
        .await;

        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(e)) => log::warn!("Draft cache removal degraded: {e}"),
            Err(e) => log::warn!("Draft cache removal task failed: {e}"),
        }
    }
}
