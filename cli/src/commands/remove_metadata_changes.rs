//! `mam remove-metadata-changes` — bulk removal of matching metadata changes.

use anyhow::Result;
use clap::Args;

use crate::application::ports::MamApi;
use crate::application::services::metadata_cleanup::remove_metadata_changes;
use crate::domain::ChangeFilter;
use crate::output::{OutputContext, TerminalReporter, json};

/// Arguments for the remove-metadata-changes command.
#[derive(Args)]
#[command(after_help = "\
The date is YYYY, YYYY-MM or YYYY-MM-DD: 2018 matches the whole year,
2018-05 May 2018 and 2018-05-08 a single day. Components cannot be skipped
and months and days need two digits.")]
pub struct RemoveMetadataChangesArgs {
    /// User who made the changes
    #[arg(long)]
    pub user: String,

    /// Metadata field name (portal_mfNNNNNN)
    #[arg(long)]
    pub metadata_field: String,

    /// Date prefix of the change timestamp
    #[arg(long, value_name = "YYYY[-MM[-DD]]")]
    pub date: String,

    /// Text a changed value must contain
    #[arg(long)]
    pub text: String,

    /// List the matching items without removing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Run the remove-metadata-changes command.
///
/// Arguments are validated before any configuration is read.
///
/// # Errors
///
/// Returns an error if an argument is invalid, the API is not configured, or
/// listing items fails.
pub async fn run(ctx: &OutputContext, args: RemoveMetadataChangesArgs, json: bool) -> Result<()> {
    let filter = ChangeFilter::new(&args.user, &args.metadata_field, &args.date, &args.text)?;
    let api = super::connect_api()?;
    execute(ctx, &api, &filter, args.dry_run, json).await
}

/// Remove changes matching `filter` through `api` and report the outcome.
///
/// # Errors
///
/// Returns an error if listing items or fetching change lists fails.
pub async fn execute(
    ctx: &OutputContext,
    api: &impl MamApi,
    filter: &ChangeFilter,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let reporter = TerminalReporter::new(ctx);
    let report = remove_metadata_changes(api, filter, dry_run, &reporter).await?;

    if json {
        let matched: Vec<_> = report
            .matched
            .iter()
            .map(|m| serde_json::json!({"item_id": m.item_id, "change_ids": m.change_ids}))
            .collect();
        json::print(&serde_json::json!({
            "dry_run": dry_run,
            "items_scanned": report.items_scanned,
            "matched": matched,
            "changes_deleted": report.changes_deleted,
            "changes_failed": report.changes_failed,
        }))?;
    } else {
        ctx.success("Done.");
    }
    Ok(())
}
