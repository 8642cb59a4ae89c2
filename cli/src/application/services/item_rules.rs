//! Application service — rule-engine actions on a single item.

use anyhow::Result;
use mam_common::api::JobDocument;
use mam_common::validate_item_id;

use crate::application::ports::{MamApi, ProgressReporter};
use crate::domain::KeepFiles;
use crate::domain::item::has_thumbnails;

/// Result of `delete_item`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Nothing was sent; `url` is the request that would have been made.
    DryRun { url: String },
    Deleted { url: String },
}

/// Permanently delete an item while leaving the selected files on storage.
///
/// # Errors
///
/// Returns an error if the item id is malformed or the API rejects the
/// request.
pub async fn delete_item(
    api: &impl MamApi,
    item_id: &str,
    keep: KeepFiles,
    dry_run: bool,
    reporter: &impl ProgressReporter,
) -> Result<DeleteOutcome> {
    validate_item_id(item_id)?;
    let keep = keep.resolved();
    let url = api.endpoint(&keep.delete_path(item_id));
    tracing::info!(item_id, ?keep, "deleting item, keeping files");

    if dry_run {
        reporter.step(&format!("Dry-run: would send DELETE {url}"));
        return Ok(DeleteOutcome::DryRun { url });
    }

    reporter.step(&format!("Sending DELETE {url}"));
    api.delete_item(item_id, &keep).await?;
    reporter.success(&format!("Deleted item {item_id}"));
    Ok(DeleteOutcome::Deleted { url })
}

/// Result of `recreate_thumbnails`.
#[derive(Debug, Clone)]
pub enum ThumbnailOutcome {
    Started(JobDocument),
    /// The item's media type has no thumbnails.
    Ignored { media_type: String },
}

/// Start a thumbnail job for video and image items.
///
/// # Errors
///
/// Returns an error if the item id is malformed or an API call fails.
pub async fn recreate_thumbnails(
    api: &impl MamApi,
    item_id: &str,
    reporter: &impl ProgressReporter,
) -> Result<ThumbnailOutcome> {
    validate_item_id(item_id)?;
    let item = api.item_field(item_id, "mediaType").await?;
    let media_type = item.field_value("mediaType").unwrap_or_default().to_string();

    if !has_thumbnails(&media_type) {
        tracing::info!(item_id, media_type = %media_type, "item ignored due to media type");
        reporter.warn(&format!(
            "Item {item_id} ignored due to media type: {media_type}"
        ));
        return Ok(ThumbnailOutcome::Ignored { media_type });
    }

    let job = api.start_thumbnail_job(item_id).await?;
    tracing::info!(item_id, job_id = %job.job_id, status = %job.status, "started thumbnail job");
    reporter.success(&format!("Started job {} on item {item_id}", job.job_id));
    Ok(ThumbnailOutcome::Started(job))
}
