//! Data models for drafts, campaigns, and the wizard step sequence.

mod campaign;
mod draft;
mod status;
mod steps;


pub use campaign::{Campaign, CampaignStatus};
pub use draft::{CachedDraft, Draft, PersistedDraft};
pub use status::{DraftStatus, PersistenceMode};
pub use steps::{
    Basics, Financials, MediaItem, MediaKind, Milestone, Risk, StepData, TeamMember, WizardStep,
};
