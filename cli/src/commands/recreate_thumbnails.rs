//! `mam recreate-thumbnails` — start a thumbnail job on a video or image item.

use anyhow::Result;
use clap::Args;

use crate::application::ports::MamApi;
use crate::application::services::item_rules::{ThumbnailOutcome, recreate_thumbnails};
use crate::output::{OutputContext, TerminalReporter, json};

/// Arguments for the recreate-thumbnails command.
#[derive(Args)]
pub struct RecreateThumbnailsArgs {
    /// Item to process
    #[arg(long, env = "portal_itemId", hide_env_values = true)]
    pub item_id: Option<String>,
}

/// Run the recreate-thumbnails command.
///
/// # Errors
///
/// Returns an error if the API is not configured or a request fails.
pub async fn run(ctx: &OutputContext, args: RecreateThumbnailsArgs, json: bool) -> Result<()> {
    let Some(item_id) = super::require_item_id(ctx, args.item_id) else {
        return Ok(());
    };
    let api = super::connect_api()?;
    execute(ctx, &api, &item_id, json).await
}

/// Recreate thumbnails for `item_id` through `api` and report the outcome.
///
/// # Errors
///
/// Returns an error if the item id is malformed or an API call fails.
pub async fn execute(
    ctx: &OutputContext,
    api: &impl MamApi,
    item_id: &str,
    json: bool,
) -> Result<()> {
    let reporter = TerminalReporter::new(ctx);
    let outcome = recreate_thumbnails(api, item_id, &reporter).await?;

    if json {
        let value = match outcome {
            ThumbnailOutcome::Started(job) => serde_json::json!({
                "item_id": item_id,
                "status": "started",
                "job_id": job.job_id,
                "job_status": job.status,
            }),
            ThumbnailOutcome::Ignored { media_type } => serde_json::json!({
                "item_id": item_id,
                "status": "ignored",
                "media_type": media_type,
            }),
        };
        json::print(&value)?;
    }
    Ok(())
}
