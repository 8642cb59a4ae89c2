//! Application service — bulk removal of matching metadata changes.

use std::collections::HashSet;

use anyhow::Result;
use mam_common::api::ITEM_PAGE_SIZE;

use crate::application::ports::{MamApi, ProgressReporter};
use crate::domain::ChangeFilter;

/// Progress is reported every this many items.
pub const PROGRESS_EVERY: usize = 500;

/// Changes selected on one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemChanges {
    pub item_id: String,
    pub change_ids: Vec<String>,
}

/// Summary of a cleanup run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub items_scanned: usize,
    pub matched: Vec<ItemChanges>,
    pub changes_deleted: usize,
    pub changes_failed: usize,
}

/// Every item id, de-duplicated in first-seen order.
///
/// Pages until the running count reaches the reported total or a page
/// comes back empty.
///
/// # Errors
///
/// Returns an error if a listing request fails.
pub async fn collect_item_ids(api: &impl MamApi) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    let mut processed: u64 = 0;
    let mut hits: u64 = 1;

    while processed < hits {
        let page = api.list_items(processed + 1, ITEM_PAGE_SIZE).await?;
        hits = page.hits;
        if page.item.is_empty() {
            break;
        }
        processed += page.item.len() as u64;
        for item in page.item {
            if seen.insert(item.id.clone()) {
                ids.push(item.id);
            }
        }
    }
    Ok(ids)
}

/// Find changes matching `filter` on every item and, unless `dry_run`,
/// delete them.
///
/// A change list the API refuses to return is reported and treated as
/// empty. A failed delete is reported and counted, not fatal.
///
/// # Errors
///
/// Returns an error if listing items or fetching a change list fails at the
/// transport level.
pub async fn remove_metadata_changes(
    api: &impl MamApi,
    filter: &ChangeFilter,
    dry_run: bool,
    reporter: &impl ProgressReporter,
) -> Result<CleanupReport> {
    let ids = collect_item_ids(api).await?;
    let total = ids.len();
    reporter.step(&format!("Looking for changes in {total} items..."));

    let mut report = CleanupReport {
        items_scanned: total,
        ..CleanupReport::default()
    };

    for (idx, item_id) in ids.into_iter().enumerate() {
        if idx % PROGRESS_EVERY == 0 {
            reporter.step(&format!("Looking for changes on items: {idx}/{total}"));
        }
        let Some(doc) = api.metadata_changes(&item_id).await? else {
            reporter.warn(&format!("Error on trying to get changes list for item {item_id}"));
            continue;
        };
        let change_ids = filter.changes_to_remove(&doc.change_set);
        if change_ids.is_empty() {
            continue;
        }
        tracing::debug!(item_id = %item_id, changes = change_ids.len(), "item has matching changes");
        if dry_run {
            reporter.step(&format!(
                "Dry-run: item {item_id} matches, it has changes to be removed"
            ));
        }
        report.matched.push(ItemChanges {
            item_id,
            change_ids,
        });
    }

    if dry_run {
        return Ok(report);
    }

    let matched = report.matched.len();
    reporter.step(&format!("Removing changes on {matched} items..."));
    for (idx, item) in report.matched.iter().enumerate() {
        if idx % PROGRESS_EVERY == 0 {
            reporter.step(&format!("Removing changes: {idx}/{matched}"));
        }
        for change_id in &item.change_ids {
            match api.delete_metadata_change(&item.item_id, change_id).await {
                Ok(()) => report.changes_deleted += 1,
                Err(e) => {
                    tracing::warn!(item_id = %item.item_id, change_id = %change_id, error = %e, "delete failed");
                    reporter.warn(&format!(
                        "Failed to remove change {change_id} on item {}: {e}",
                        item.item_id
                    ));
                    report.changes_failed += 1;
                }
            }
        }
    }
    reporter.success(&format!(
        "Removed {} changes on {matched} items",
        report.changes_deleted
    ));
    Ok(report)
}
