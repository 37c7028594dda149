//! Fundry CLI Application
//!
//! Command-line interface for the campaign draft authoring workflow.

mod args;
mod cli;

use std::sync::Arc;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use fundry_core::{cache::DraftCache, service::HttpDraftServiceBuilder, store::DraftStore};
use log::info;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        service_url,
        cache_file,
        owner,
        token,
        command,
    } = Args::parse();

    let service = HttpDraftServiceBuilder::new(service_url)
        .with_bearer_token(token)
        .build()
        .context("Failed to initialize draft service client")?;

    let cache = DraftCache::open(cache_file)
        .await
        .context("Failed to open draft cache")?;

    let store = DraftStore::new(Arc::new(service), cache);
    let cli = Cli::new(store, owner.clone());

    info!("Fundry started for owner {owner}");

    match command {
        Some(Show(args)) => cli.show_draft(args.into()).await,
        Some(New(args)) => cli.new_draft(args.into_params(&owner)).await,
        Some(Publish(args)) => cli.publish_draft(args.into()).await,
        Some(Sync) => cli.sync_drafts().await,
        Some(List) | None => cli.list_drafts().await,
    }
}
