//! `mam delete-item` — permanently delete an item, keeping its files.

use anyhow::Result;
use clap::Args;

use crate::application::ports::MamApi;
use crate::application::services::item_rules::{DeleteOutcome, delete_item};
use crate::domain::KeepFiles;
use crate::output::{OutputContext, TerminalReporter, json};

/// Arguments for the delete-item command.
#[derive(Args)]
#[command(after_help = "\
Both lists accept comma separated values. When both are given only files
matching both are kept, e.g. --keep-shape-tag-media original,lowres
--keep-shape-tag-storage VX-1,VX-2 keeps original and lowres files on
VX-1 and VX-2 and deletes everything else.")]
pub struct DeleteItemArgs {
    /// Item to delete
    #[arg(long, env = "portal_itemId", hide_env_values = true)]
    pub item_id: Option<String>,

    /// Shape tags whose files are kept (default: all)
    #[arg(long, value_name = "TAGS")]
    pub keep_shape_tag_media: Option<String>,

    /// Storages on which files are kept (default: all)
    #[arg(long, value_name = "STORAGES")]
    pub keep_shape_tag_storage: Option<String>,

    /// Only print the request that would be made
    #[arg(long)]
    pub dry_run: bool,
}

/// Run the delete-item command.
///
/// # Errors
///
/// Returns an error if the API is not configured or rejects the request.
pub async fn run(ctx: &OutputContext, args: DeleteItemArgs, json: bool) -> Result<()> {
    let Some(item_id) = super::require_item_id(ctx, args.item_id.clone()) else {
        return Ok(());
    };
    let api = super::connect_api()?;
    execute(ctx, &api, &item_id, args, json).await
}

/// Delete `item_id` through `api` and report the outcome.
///
/// # Errors
///
/// Returns an error if the item id is malformed or the API call fails.
pub async fn execute(
    ctx: &OutputContext,
    api: &impl MamApi,
    item_id: &str,
    args: DeleteItemArgs,
    json: bool,
) -> Result<()> {
    let keep = KeepFiles {
        shape_tags: args.keep_shape_tag_media,
        storages: args.keep_shape_tag_storage,
    };
    let reporter = TerminalReporter::new(ctx);
    let outcome = delete_item(api, item_id, keep, args.dry_run, &reporter).await?;

    if json {
        let (url, deleted) = match &outcome {
            DeleteOutcome::DryRun { url } => (url, false),
            DeleteOutcome::Deleted { url } => (url, true),
        };
        json::print(&serde_json::json!({
            "item_id": item_id,
            "url": url,
            "dry_run": args.dry_run,
            "deleted": deleted,
        }))?;
    }
    Ok(())
}
