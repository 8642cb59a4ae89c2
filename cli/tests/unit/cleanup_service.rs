//! Tests for bulk metadata-change removal.

#![allow(clippy::expect_used)]

use mam_cli::application::services::metadata_cleanup::{
    CleanupReport, ItemChanges, collect_item_ids, remove_metadata_changes,
};
use mam_cli::domain::ChangeFilter;

use crate::mocks::{MockApi, RecordingReporter, changes, matching_change, page};

fn filter() -> ChangeFilter {
    ChangeFilter::new("editor", "portal_mf123456", "2018-05", "draft").expect("valid filter")
}

#[tokio::test]
async fn listing_pages_until_hits_reached() {
    let mut api = MockApi::default();
    api.pages.insert(1, page(3, &["VX-1", "VX-2"]));
    api.pages.insert(3, page(3, &["VX-3"]));

    let ids = collect_item_ids(&api).await.expect("ids");

    assert_eq!(ids, vec!["VX-1", "VX-2", "VX-3"]);
    assert_eq!(*api.list_calls.lock().expect("lock"), vec![1, 3]);
}

#[tokio::test]
async fn listing_stops_on_empty_page_and_dedups() {
    let mut api = MockApi::default();
    api.pages.insert(1, page(10, &["VX-1", "VX-2"]));
    api.pages.insert(3, page(10, &["VX-2", "VX-3"]));

    let ids = collect_item_ids(&api).await.expect("ids");

    assert_eq!(ids, vec!["VX-1", "VX-2", "VX-3"]);
    assert_eq!(*api.list_calls.lock().expect("lock"), vec![1, 3, 5]);
}

#[tokio::test]
async fn deletes_matching_changes_only() {
    let mut api = MockApi::default();
    api.pages.insert(1, page(2, &["VX-1", "VX-2"]));
    api.changes.insert(
        "VX-1".to_string(),
        changes(&format!(
            r#"{{"changeSet":[{},{{"id":"VX-C9"}}]}}"#,
            matching_change("VX-C1")
        )),
    );
    api.changes
        .insert("VX-2".to_string(), changes(r#"{"changeSet":[]}"#));

    let report = remove_metadata_changes(&api, &filter(), false, &RecordingReporter::default())
        .await
        .expect("cleanup");

    assert_eq!(
        report,
        CleanupReport {
            items_scanned: 2,
            matched: vec![ItemChanges {
                item_id: "VX-1".to_string(),
                change_ids: vec!["VX-C1".to_string()],
            }],
            changes_deleted: 1,
            changes_failed: 0,
        }
    );
    assert_eq!(
        api.deleted_changes(),
        vec![("VX-1".to_string(), "VX-C1".to_string())]
    );
}

#[tokio::test]
async fn dry_run_lists_without_deleting() {
    let mut api = MockApi::default();
    api.pages.insert(1, page(1, &["VX-1"]));
    api.changes.insert(
        "VX-1".to_string(),
        changes(&format!(r#"{{"changeSet":[{}]}}"#, matching_change("VX-C1"))),
    );
    let reporter = RecordingReporter::default();

    let report = remove_metadata_changes(&api, &filter(), true, &reporter)
        .await
        .expect("cleanup");

    assert_eq!(report.matched.len(), 1);
    assert_eq!(report.changes_deleted, 0);
    assert!(api.deleted_changes().is_empty());
    assert!(
        reporter
            .events()
            .iter()
            .any(|e| e.contains("item VX-1 matches"))
    );
}

#[tokio::test]
async fn unavailable_change_list_is_a_warning() {
    let mut api = MockApi::default();
    api.pages.insert(1, page(1, &["VX-404"]));
    let reporter = RecordingReporter::default();

    let report = remove_metadata_changes(&api, &filter(), false, &reporter)
        .await
        .expect("cleanup");

    assert!(report.matched.is_empty());
    assert_eq!(
        reporter.warnings(),
        vec!["warn: Error on trying to get changes list for item VX-404"]
    );
}

#[tokio::test]
async fn failed_delete_is_counted_and_others_continue() {
    let mut api = MockApi::default();
    api.pages.insert(1, page(1, &["VX-1"]));
    api.changes.insert(
        "VX-1".to_string(),
        changes(&format!(
            r#"{{"changeSet":[{},{}]}}"#,
            matching_change("VX-C1"),
            matching_change("VX-C2")
        )),
    );
    api.failing_deletes.insert("VX-C1".to_string());

    let report = remove_metadata_changes(&api, &filter(), false, &RecordingReporter::default())
        .await
        .expect("cleanup");

    assert_eq!(report.changes_deleted, 1);
    assert_eq!(report.changes_failed, 1);
    assert_eq!(
        api.deleted_changes(),
        vec![("VX-1".to_string(), "VX-C2".to_string())]
    );
}

#[tokio::test]
async fn progress_reported_every_500_items() {
    let ids: Vec<String> = (0..1001).map(|i| format!("VX-{i}")).collect();
    let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    let mut api = MockApi::default();
    api.pages.insert(1, page(1001, &refs));
    let reporter = RecordingReporter::default();

    remove_metadata_changes(&api, &filter(), true, &reporter)
        .await
        .expect("cleanup");

    let progress: Vec<String> = reporter
        .events()
        .into_iter()
        .filter(|e| e.contains("Looking for changes on items"))
        .collect();
    assert_eq!(
        progress,
        vec![
            "step: Looking for changes on items: 0/1001",
            "step: Looking for changes on items: 500/1001",
            "step: Looking for changes on items: 1000/1001",
        ]
    );
}
