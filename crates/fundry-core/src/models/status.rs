//! Status enumerations for drafts and persistence tiers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of draft statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DraftStatus {
    /// Draft is mutable and owned by the authoring session
    #[default]
    Draft,

    /// Draft has been turned into a Campaign and is no longer editable here
    Published,
}

impl FromStr for DraftStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(DraftStatus::Draft),
            "published" => Ok(DraftStatus::Published),
            _ => Err(format!("Invalid draft status: {s}")),
        }
    }
}

impl DraftStatus {
    /// Convert to storage string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftStatus::Draft => "draft",
            DraftStatus::Published => "published",
        }
    }
}

/// Which persistence tier actually served the most recent save.
///
/// The cache is never authoritative while the remote store is reachable;
/// `CacheOnly` signals degraded persistence the UI should surface.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PersistenceMode {
    /// The remote draft service confirmed the write
    Remote,

    /// Only the local cache holds the latest state
    CacheOnly,
}

impl PersistenceMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersistenceMode::Remote => "remote",
            PersistenceMode::CacheOnly => "cacheOnly",
        }
    }
}

impl std::fmt::Display for PersistenceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
