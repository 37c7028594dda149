//! Draft model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{DraftStatus, PersistenceMode, StepData};

/// A campaign authoring document in progress.
///
/// The remote `id` is assigned exactly once, at first successful remote
/// persistence, and never changes afterwards. A draft that has only ever
/// reached the local cache carries a client-generated `local_key` instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Draft {
    /// Remote identifier; absent means "not yet persisted remotely"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Temporary client-generated cache key, present only for drafts that
    /// have fallen back to cache-only persistence. Never sent to the remote
    /// service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_key: Option<String>,

    /// Identity of the authoring user; set at creation, immutable
    pub owner_id: String,

    /// Per-step form payloads
    #[serde(default)]
    pub step_data: StepData,

    /// Draft lifecycle status
    #[serde(default)]
    pub status: DraftStatus,

    /// Timestamp when the draft was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp of the last successful persistence (UTC)
    pub updated_at: Timestamp,

    /// Back-reference when this draft was forked from a published campaign
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_campaign_id: Option<String>,
}

impl Draft {
    /// Creates an empty draft for the given owner.
    pub fn new(owner_id: impl Into<String>) -> Self {
        let now = Timestamp::now();
        Self {
            id: None,
            local_key: None,
            owner_id: owner_id.into(),
            step_data: StepData::default(),
            status: DraftStatus::Draft,
            created_at: now,
            updated_at: now,
            original_campaign_id: None,
        }
    }

    /// The key this draft is cached under: the remote id when assigned,
    /// otherwise the temporary local key.
    pub fn cache_key(&self) -> Option<&str> {
        self.id.as_deref().or(self.local_key.as_deref())
    }
}

/// The outcome of a [`crate::store::DraftStore::save`] call: the merged draft
/// plus which persistence tier actually confirmed the write.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedDraft {
    pub draft: Draft,
    pub persistence: PersistenceMode,
}

/// A cache row: the draft document plus its cache-only marker.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedDraft {
    pub draft: Draft,
    pub cache_only: bool,
}
