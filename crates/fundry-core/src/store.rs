//! Failure-tolerant draft persistence.
//!
//! The [`DraftStore`] is the single surface the wizard reads and writes
//! through. It attempts the remote draft service first and falls back to the
//! local cache, keeping the cache a best-effort mirror whenever the remote
//! side is reachable. The remote store is always authoritative when
//! reachable; the cache exists purely for availability.

use std::sync::Arc;

use jiff::Timestamp;
use uuid::Uuid;

use crate::{
    cache::DraftCache,
    error::{DraftError, Result},
    models::{Campaign, Draft, DraftStatus, PersistedDraft, PersistenceMode},
    service::DraftService,
};

/// Two-tier persistence facade over the remote draft service and the local
/// cache.
///
/// Holds no per-draft state; the wizard controller enforces the
/// single-flight discipline (at most one outstanding save or publish per
/// draft).
pub struct DraftStore {
    service: Arc<dyn DraftService>,
    cache: DraftCache,
}

impl DraftStore {
    pub fn new(service: Arc<dyn DraftService>, cache: DraftCache) -> Self {
        Self { service, cache }
    }

    /// Persists a draft, remote-first with cache fallback.
    ///
    /// A draft without a remote id is created remotely; on success the
    /// returned id and timestamps are merged in (the id is assigned exactly
    /// once and never changes afterwards). On failure the draft is written
    /// to the cache under a session-stable temporary key and marked
    /// cache-only so a later save retries the remote path.
    ///
    /// Never fails for connectivity or storage-capacity reasons; the only
    /// error path is caller misuse (missing owner identity). Degraded
    /// persistence is reported through [`PersistedDraft::persistence`].
    pub async fn save(&self, draft: &Draft) -> Result<PersistedDraft> {
        if draft.owner_id.trim().is_empty() {
            return Err(DraftError::invalid_input(
                "owner_id",
                "a draft must carry its owner's identity",
            ));
        }

        let mut working = draft.clone();

        let attempt = match &working.id {
            None => self.service.create(&working).await,
            Some(id) => self.service.update(id, &working).await,
        };

        match attempt {
            Ok(remote) => {
                if working.id.is_none() {
                    working.id = remote.id;
                    working.created_at = remote.created_at;
                    // The temporary row is superseded by the remote id
                    if let Some(key) = working.local_key.take() {
                        self.cache.remove(&key).await;
                    }
                }
                working.updated_at = remote.updated_at;
                working.status = remote.status;

                self.cache.put(&working, false).await;
                Ok(PersistedDraft {
                    draft: working,
                    persistence: PersistenceMode::Remote,
                })
            }
            Err(e) => {
                log::warn!("Remote save failed ({}), falling back to cache: {e}", e.kind);

                if working.id.is_none() && working.local_key.is_none() {
                    working.local_key = Some(format!("local-{}", Uuid::new_v4()));
                }
                working.updated_at = Timestamp::now();

                self.cache.put(&working, true).await;
                Ok(PersistedDraft {
                    draft: working,
                    persistence: PersistenceMode::CacheOnly,
                })
            }
        }
    }

    /// Loads a draft by id: remote fetch first, cache fallback on any
    /// service failure.
    pub async fn load(&self, id: &str) -> Result<Draft> {
        match self.service.fetch(id).await {
            Ok(draft) => {
                // Keep the mirror fresh while the remote side is reachable
                self.cache.put(&draft, false).await;
                Ok(draft)
            }
            Err(e) => {
                log::warn!("Remote fetch failed ({}), trying cache: {e}", e.kind);
                match self.cache.get(id).await? {
                    Some(cached) => Ok(cached.draft),
                    None => Err(DraftError::DraftNotFound { id: id.to_string() }),
                }
            }
        }
    }

    /// Lists the owner's in-progress drafts.
    ///
    /// Remote is authoritative when reachable; on failure the cache listing
    /// is filtered to the owner. The two lists are never merged, avoiding
    /// duplicate or ambiguous ids. Published drafts are never returned.
    pub async fn list_mine(&self, owner_id: &str) -> Result<Vec<Draft>> {
        match self.service.list().await {
            Ok(drafts) => Ok(drafts
                .into_iter()
                .filter(|d| d.status == DraftStatus::Draft)
                .collect()),
            Err(e) => {
                log::warn!("Remote list failed ({}), listing cache: {e}", e.kind);
                Ok(self
                    .cache
                    .list()
                    .await?
                    .into_iter()
                    .map(|c| c.draft)
                    .filter(|d| d.owner_id == owner_id && d.status == DraftStatus::Draft)
                    .collect())
            }
        }
    }

    /// Publishes a draft into a campaign, exactly once per launch action.
    ///
    /// Forces a save first so the remote side has the latest data; a
    /// cache-only save outcome does not abort, since the service may hold a
    /// stale but valid copy. The draft-publish path is attempted when a
    /// remote id exists, with direct campaign creation as the fallback; a
    /// pure cache-only draft goes straight to direct creation. If both
    /// paths fail the draft remains in `Draft` status and is safe to retry.
    pub async fn publish(&self, draft: &Draft) -> Result<Campaign> {
        if draft.status != DraftStatus::Draft {
            return Err(DraftError::invalid_input(
                "status",
                "only a draft can be published",
            ));
        }

        let saved = self.save(draft).await?;
        let mut working = saved.draft;
        let degraded = saved.persistence == PersistenceMode::CacheOnly;

        let campaign = match &working.id {
            Some(id) => match self.service.publish(id).await {
                Ok(campaign) => campaign,
                Err(publish_err) => {
                    log::warn!(
                        "Draft publish failed ({}), trying direct campaign creation: {publish_err}",
                        publish_err.kind
                    );
                    self.service.create_campaign(&working).await.map_err(|e| {
                        DraftError::PublishFailed {
                            message: format!(
                                "draft publish failed ({publish_err}); direct creation failed ({e})"
                            ),
                        }
                    })?
                }
            },
            None => {
                self.service
                    .create_campaign(&working)
                    .await
                    .map_err(|e| DraftError::PublishFailed {
                        message: format!("direct creation failed ({e})"),
                    })?
            }
        };

        // Mark the local copy published so it disappears from listings
        working.status = DraftStatus::Published;
        working.updated_at = Timestamp::now();
        self.cache.put(&working, degraded).await;

        Ok(campaign)
    }

    /// Re-pushes cache-only drafts through the normal save path.
    ///
    /// Invoked explicitly when connectivity is believed to have returned;
    /// drafts the remote side still rejects simply stay cache-only.
    pub async fn sync_pending(&self, owner_id: &str) -> Result<Vec<PersistedDraft>> {
        let pending: Vec<Draft> = self
            .cache
            .list()
            .await?
            .into_iter()
            .filter(|c| c.cache_only)
            .map(|c| c.draft)
            .filter(|d| d.owner_id == owner_id && d.status == DraftStatus::Draft)
            .collect();

        let mut results = Vec::with_capacity(pending.len());
        for draft in &pending {
            results.push(self.save(draft).await?);
        }
        Ok(results)
    }

    /// Shared access to the underlying cache (read paths for the CLI).
    pub fn cache(&self) -> &DraftCache {
        &self.cache
    }
}
