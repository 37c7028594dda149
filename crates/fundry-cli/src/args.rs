//! Command-line interface definitions using clap.
//!
//! Implements the parameter wrapper pattern: clap-specific argument
//! structures live here and convert explicitly into the core parameter
//! types, keeping `fundry-core` free of CLI framework concerns.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fundry_core::params::{DraftId, NewDraft};

/// Command-line interface for the Fundry campaign draft workflow
///
/// Fundry manages in-progress crowdfunding campaign drafts: work is saved to
/// the remote draft service when it is reachable and mirrored to a local
/// cache so nothing is lost while offline. Drafts are published into
/// campaigns exactly once.
#[derive(Parser)]
#[command(version, about, name = "fundry")]
pub struct Args {
    /// Base URL of the remote draft service
    #[arg(long, global = true, default_value = "http://localhost:8080")]
    pub service_url: String,

    /// Path to the local draft cache file. Defaults to
    /// $XDG_DATA_HOME/fundry/drafts.db
    #[arg(long, global = true)]
    pub cache_file: Option<PathBuf>,

    /// Identity of the authoring user
    #[arg(long, global = true, default_value = "anonymous")]
    pub owner: String,

    /// Bearer token for the draft service
    #[arg(long, global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Fundry CLI
#[derive(Subcommand)]
pub enum Commands {
    /// List your in-progress drafts
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a draft in full
    #[command(alias = "s")]
    Show(ShowDraftArgs),
    /// Start a new draft
    #[command(alias = "n")]
    New(NewDraftArgs),
    /// Publish a draft into a campaign
    #[command(alias = "p")]
    Publish(PublishDraftArgs),
    /// Re-push locally cached drafts to the draft service
    Sync,
}

/// Show details of a specific draft
#[derive(clap::Args)]
pub struct ShowDraftArgs {
    /// ID of the draft to display (remote id or local cache key)
    #[arg(help = "Identifier of the draft to show")]
    pub id: String,
}

impl From<ShowDraftArgs> for DraftId {
    fn from(val: ShowDraftArgs) -> Self {
        DraftId { id: val.id }
    }
}

/// Start a new draft
#[derive(clap::Args)]
pub struct NewDraftArgs {
    /// Initial campaign title
    #[arg(short, long)]
    pub title: Option<String>,
}

impl NewDraftArgs {
    /// Convert CLI arguments to the core parameter structure, attaching the
    /// globally supplied owner identity.
    pub fn into_params(self, owner: &str) -> NewDraft {
        NewDraft {
            owner_id: owner.to_string(),
            title: self.title,
        }
    }
}

/// Publish a draft
#[derive(clap::Args)]
pub struct PublishDraftArgs {
    /// ID of the draft to publish
    #[arg(help = "Identifier of the draft to publish")]
    pub id: String,
}

impl From<PublishDraftArgs> for DraftId {
    fn from(val: PublishDraftArgs) -> Self {
        DraftId { id: val.id }
    }
}
