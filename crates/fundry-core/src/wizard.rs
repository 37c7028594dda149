//! Wizard controller: step sequencing, validation gating, autosave, and the
//! publish transition.
//!
//! The controller owns the draft as an explicit value; every transition
//! installs a new draft rather than mutating shared state, so a failed
//! transition can never leave partial edits behind. It also enforces the
//! single-flight rule: at most one outstanding save or publish per draft,
//! with the autosave timer re-arming instead of firing while one is in
//! flight.

use std::time::Instant;

use jiff::Timestamp;

use crate::{
    autosave::AutosaveTimer,
    error::{DraftError, FieldError, Result},
    models::{
        Campaign, Draft, DraftStatus, PersistedDraft, PersistenceMode, StepData, WizardStep,
    },
    store::DraftStore,
    validate::{validate_all, validate_step},
};

/// Observable wizard state for the surrounding UI.
#[derive(Debug, Clone)]
pub struct WizardStatus {
    pub current_step: WizardStep,
    pub step_errors: Vec<FieldError>,
    pub is_saving: bool,
    pub is_publishing: bool,
    pub last_saved_at: Option<Timestamp>,
    pub persistence_mode: Option<PersistenceMode>,
    /// Most recent non-blocking warning (degraded save, background failure)
    pub last_warning: Option<String>,
    /// Set once launch has succeeded
    pub published_campaign_id: Option<String>,
}

/// Drives one authoring session over a single draft.
pub struct WizardController {
    store: DraftStore,
    draft: Draft,
    step: WizardStep,
    autosave: AutosaveTimer,
    step_errors: Vec<FieldError>,
    is_saving: bool,
    is_publishing: bool,
    last_saved_at: Option<Timestamp>,
    persistence_mode: Option<PersistenceMode>,
    last_warning: Option<String>,
    published: Option<Campaign>,
}

impl WizardController {
    /// Starts a fresh wizard session with an empty draft for the owner.
    pub fn new(store: DraftStore, owner_id: impl Into<String>) -> Self {
        Self::with_draft(store, Draft::new(owner_id))
    }

    /// Resumes a session for a known draft id via the store.
    pub async fn resume(store: DraftStore, id: &str) -> Result<Self> {
        let draft = store.load(id).await?;
        if draft.status != DraftStatus::Draft {
            return Err(DraftError::invalid_input(
                "status",
                "published drafts cannot be edited; fork the campaign instead",
            ));
        }
        Ok(Self::with_draft(store, draft))
    }

    /// Resumes the owner's most recently updated draft, if any.
    pub async fn resume_latest(store: DraftStore, owner_id: &str) -> Result<Option<Self>> {
        let mut drafts = store.list_mine(owner_id).await?;
        drafts.sort_by_key(|d| d.updated_at);
        Ok(drafts
            .pop()
            .map(|draft| Self::with_draft(store, draft)))
    }

    /// Starts a new draft forked from a published campaign for editing.
    ///
    /// The campaign itself is never mutated; the fork carries a back
    /// reference through `original_campaign_id`.
    pub fn fork(store: DraftStore, campaign: &Campaign) -> Self {
        let mut draft = Draft::new(campaign.owner_id.clone());
        draft.step_data = campaign.step_data.clone();
        draft.original_campaign_id = Some(campaign.id.clone());
        Self::with_draft(store, draft)
    }

    fn with_draft(store: DraftStore, draft: Draft) -> Self {
        Self {
            store,
            draft,
            step: WizardStep::Basics,
            autosave: AutosaveTimer::default(),
            step_errors: Vec::new(),
            is_saving: false,
            is_publishing: false,
            last_saved_at: None,
            persistence_mode: None,
            last_warning: None,
            published: None,
        }
    }

    /// The draft as the controller currently knows it.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// The campaign produced by a successful launch, if any.
    pub fn campaign(&self) -> Option<&Campaign> {
        self.published.as_ref()
    }

    /// Snapshot of the observable state.
    pub fn status(&self) -> WizardStatus {
        WizardStatus {
            current_step: self.step,
            step_errors: self.step_errors.clone(),
            is_saving: self.is_saving,
            is_publishing: self.is_publishing,
            last_saved_at: self.last_saved_at,
            persistence_mode: self.persistence_mode,
            last_warning: self.last_warning.clone(),
            published_campaign_id: self.published.as_ref().map(|c| c.id.clone()),
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    /// Applies a field mutation and (re-)arms the autosave timer.
    ///
    /// The mutation runs against a copy of the step data; the new draft
    /// value is installed wholesale.
    pub fn edit(&mut self, mutate: impl FnOnce(&mut StepData)) {
        let mut step_data = self.draft.step_data.clone();
        mutate(&mut step_data);
        self.draft.step_data = step_data;
        self.autosave.arm(Instant::now());
    }

    /// Validates the current step and, on success, saves and advances.
    ///
    /// The save replaces any pending autosave and its failure is downgraded
    /// to a recorded warning; navigation is never blocked by the network.
    /// On validation failure the step is unchanged and the failing fields
    /// are reported.
    pub async fn next(&mut self) -> Result<WizardStep> {
        let Some(following) = self.step.next() else {
            return Err(DraftError::invalid_input(
                "step",
                "the review step has no next; use launch",
            ));
        };

        if let Err(fields) = validate_step(self.step, &self.draft.step_data) {
            self.step_errors = fields.clone();
            return Err(DraftError::Validation {
                step: self.step,
                fields,
            });
        }

        self.step_errors.clear();
        self.autosave.cancel();
        self.save_in_background().await;

        self.step = following;
        Ok(self.step)
    }

    /// Moves back one step. Unconditional: no validation, no save.
    pub fn prev(&mut self) -> WizardStep {
        if let Some(previous) = self.step.prev() {
            self.step = previous;
        }
        self.step
    }

    /// Explicit user-triggered save; errors are surfaced so the user can
    /// retry.
    pub async fn save_now(&mut self) -> Result<PersistedDraft> {
        self.autosave.cancel();
        self.is_saving = true;
        let result = self.store.save(&self.draft).await;
        self.is_saving = false;

        let persisted = result?;
        self.absorb(&persisted);
        Ok(persisted)
    }

    /// Publishes the draft. Only reachable from the review step, with every
    /// step passing validation; a second call while one is resolving (or
    /// after success) is refused, so repeated launches cannot create a
    /// second campaign.
    pub async fn launch(&mut self) -> Result<Campaign> {
        if self.step != WizardStep::Review {
            return Err(DraftError::invalid_input(
                "step",
                "launch is only available from the review step",
            ));
        }
        if self.is_publishing || self.published.is_some() {
            return Err(DraftError::invalid_input(
                "launch",
                "a launch is already in progress or completed",
            ));
        }
        if let Err(mut failures) = validate_all(&self.draft.step_data) {
            let (step, fields) = failures.remove(0);
            self.step_errors = fields.clone();
            return Err(DraftError::Validation { step, fields });
        }

        self.autosave.cancel();
        self.is_publishing = true;
        let result = self.store.publish(&self.draft).await;
        self.is_publishing = false;

        match result {
            Ok(campaign) => {
                self.draft.status = DraftStatus::Published;
                self.published = Some(campaign.clone());
                Ok(campaign)
            }
            // Draft untouched; the user stays at review and may retry
            Err(e) => Err(e),
        }
    }

    /// Drives the debounced autosave. Fires a save when the timer is due,
    /// the draft has a title, and no save is in flight; returns whether a
    /// save was performed.
    pub async fn poll_autosave(&mut self, now: Instant) -> bool {
        if !self.autosave.due(now) {
            return false;
        }
        if self.draft.step_data.basics.title.trim().is_empty() {
            // Nothing worth persisting yet; try again after the next edit
            self.autosave.cancel();
            return false;
        }
        if !self.autosave.fire(now) {
            return false;
        }

        self.save_in_background().await;
        self.autosave.complete();
        true
    }

    /// Teardown on navigation away: one best-effort final save for pending
    /// work, then the timer is cancelled.
    pub async fn teardown(&mut self) {
        let pending = self.autosave.flush();
        if pending && !self.draft.step_data.basics.title.trim().is_empty() {
            self.save_in_background().await;
        }
    }

    /// Saves with failures downgraded to a non-blocking warning.
    async fn save_in_background(&mut self) {
        self.is_saving = true;
        let result = self.store.save(&self.draft).await;
        self.is_saving = false;

        match result {
            Ok(persisted) => self.absorb(&persisted),
            Err(e) => {
                log::warn!("Background save failed: {e}");
                self.last_warning = Some(e.to_string());
            }
        }
    }

    /// Merges a save result into the controller's state.
    fn absorb(&mut self, persisted: &PersistedDraft) {
        self.draft = persisted.draft.clone();
        self.last_saved_at = Some(persisted.draft.updated_at);
        self.persistence_mode = Some(persisted.persistence);
        self.last_warning = match persisted.persistence {
            PersistenceMode::Remote => None,
            PersistenceMode::CacheOnly => {
                Some("changes saved locally; the service is unreachable".to_string())
            }
        };
    }
}
