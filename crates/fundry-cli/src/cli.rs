//! CLI command handlers.

use anyhow::{Context, Result};
use fundry_core::{
    display::{DraftSummaries, PublishResult, SaveResult},
    models::Draft,
    params::{DraftId, NewDraft},
    store::DraftStore,
};

/// Handler wiring the parsed commands to the draft store.
pub struct Cli {
    store: DraftStore,
    owner: String,
}

impl Cli {
    pub fn new(store: DraftStore, owner: String) -> Self {
        Self { store, owner }
    }

    /// Lists the owner's in-progress drafts.
    pub async fn list_drafts(&self) -> Result<()> {
        let drafts = self
            .store
            .list_mine(&self.owner)
            .await
            .context("Failed to list drafts")?;

        print!("{}", DraftSummaries(drafts));
        Ok(())
    }

    /// Shows one draft in full.
    pub async fn show_draft(&self, params: DraftId) -> Result<()> {
        let draft = self
            .store
            .load(&params.id)
            .await
            .with_context(|| format!("Failed to load draft {}", params.id))?;

        print!("{draft}");
        Ok(())
    }

    /// Starts (and persists) a new draft.
    pub async fn new_draft(&self, params: NewDraft) -> Result<()> {
        let mut draft = Draft::new(params.owner_id);
        if let Some(title) = params.title {
            draft.step_data.basics.title = title;
        }

        let persisted = self
            .store
            .save(&draft)
            .await
            .context("Failed to save new draft")?;

        print!("{}", SaveResult(persisted));
        Ok(())
    }

    /// Publishes a draft into a campaign.
    pub async fn publish_draft(&self, params: DraftId) -> Result<()> {
        let draft = self
            .store
            .load(&params.id)
            .await
            .with_context(|| format!("Failed to load draft {}", params.id))?;

        let campaign = self
            .store
            .publish(&draft)
            .await
            .context("Failed to publish draft")?;

        print!("{}", PublishResult(campaign));
        Ok(())
    }

    /// Re-pushes locally cached drafts to the remote service.
    pub async fn sync_drafts(&self) -> Result<()> {
        let synced = self
            .store
            .sync_pending(&self.owner)
            .await
            .context("Failed to sync cached drafts")?;

        if synced.is_empty() {
            println!("Nothing to sync.");
            return Ok(());
        }

        println!("Attempted to sync {} draft(s):", synced.len());
        println!();
        for persisted in synced {
            print!("{}", SaveResult(persisted));
            println!();
        }
        Ok(())
    }
}
