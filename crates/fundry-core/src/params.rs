//! Parameter structures for draft workflow operations.
//!
//! Interface-agnostic structs passed between the CLI (or any future
//! interface) and the core, free of framework-specific derives. Interface
//! layers wrap these with their own derives and convert via `into_params`.

use serde::{Deserialize, Serialize};

/// Parameters for operations requiring just a draft id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftId {
    /// The id of the draft to operate on
    pub id: String,
}

/// Parameters for starting a new draft.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewDraft {
    /// Identity of the authoring user (required)
    pub owner_id: String,
    /// Initial campaign title, if already known
    pub title: Option<String>,
}

/// Parameters for listing an owner's drafts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListDrafts {
    /// Identity of the authoring user
    pub owner_id: String,
}
