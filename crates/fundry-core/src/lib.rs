//! Core library for the Fundry campaign authoring workflow.
//!
//! This crate implements the draft/publish state machine behind the
//! multi-step campaign wizard: per-step validation gating, debounced
//! autosave, two-tier persistence (remote draft service with a local SQLite
//! fallback cache), and the one-shot publish transition that turns a draft
//! into an immutable campaign.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────┐
//! │  WizardController  │  step sequencing, validation, autosave
//! └─────────┬──────────┘
//!           ▼
//! ┌────────────────────┐
//! │     DraftStore     │  remote-first save/load, cache fallback
//! └───┬────────────┬───┘
//!     ▼            ▼
//! ┌────────┐  ┌──────────────┐
//! │ Draft  │  │ DraftService │
//! │ Cache  │  │   (remote)   │
//! └────────┘  └──────────────┘
//! ```
//!
//! The cache is a dumb local mirror and never authoritative while the
//! remote side is reachable; `save` never fails for connectivity or
//! storage-capacity reasons, reporting degraded persistence through
//! [`models::PersistedDraft`] instead.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use fundry_core::{
//!     cache::DraftCache,
//!     service::HttpDraftServiceBuilder,
//!     store::DraftStore,
//!     wizard::WizardController,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = HttpDraftServiceBuilder::new("https://api.example.com").build()?;
//! let cache = DraftCache::open(None::<&str>).await?;
//! let store = DraftStore::new(Arc::new(service), cache);
//!
//! let mut wizard = WizardController::new(store, "founder-1");
//! wizard.edit(|data| data.basics.title = "EcoCharge".to_string());
//! # Ok(())
//! # }
//! ```

pub mod autosave;
pub mod cache;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod service;
pub mod store;
pub mod validate;
pub mod wizard;

// Re-export commonly used types
pub use autosave::{AutosavePhase, AutosaveTimer};
pub use cache::DraftCache;
pub use display::{DraftSummaries, PublishResult, SaveResult};
pub use error::{DraftError, FieldError, Result, ServiceErrorKind};
pub use models::{
    Campaign, CampaignStatus, Draft, DraftStatus, PersistedDraft, PersistenceMode, StepData,
    WizardStep,
};
pub use service::{DraftService, HttpDraftService, HttpDraftServiceBuilder, ServiceError};
pub use store::DraftStore;
pub use wizard::{WizardController, WizardStatus};
