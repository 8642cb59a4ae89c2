//! Tests for the rule-engine item actions.

#![allow(clippy::expect_used)]

use mam_cli::application::services::item_rules::{
    DeleteOutcome, ThumbnailOutcome, delete_item, recreate_thumbnails,
};
use mam_cli::domain::KeepFiles;

use crate::mocks::{MockApi, RecordingReporter};

#[tokio::test]
async fn delete_without_options_keeps_every_file() {
    let api = MockApi::default();
    let reporter = RecordingReporter::default();

    let outcome = delete_item(&api, "VX-1979", KeepFiles::default(), false, &reporter)
        .await
        .expect("delete");

    assert_eq!(
        outcome,
        DeleteOutcome::Deleted {
            url: "http://vs.test:8080/API/item/VX-1979?keepShapeTagMedia=*&keepShapeTagStorage=*"
                .to_string()
        }
    );
    let deleted = api.deleted_items();
    assert_eq!(deleted.len(), 1);
    assert_eq!(deleted[0].1.shape_tags.as_deref(), Some("*"));
    assert_eq!(deleted[0].1.storages.as_deref(), Some("*"));
}

#[tokio::test]
async fn delete_sends_only_given_option() {
    let api = MockApi::default();
    let keep = KeepFiles {
        shape_tags: None,
        storages: Some("VX-1".to_string()),
    };

    delete_item(&api, "VX-2", keep, false, &RecordingReporter::default())
        .await
        .expect("delete");

    let deleted = api.deleted_items();
    assert_eq!(deleted[0].1.shape_tags, None);
    assert_eq!(deleted[0].1.storages.as_deref(), Some("VX-1"));
}

#[tokio::test]
async fn dry_run_sends_nothing() {
    let api = MockApi::default();
    let reporter = RecordingReporter::default();

    let outcome = delete_item(&api, "VX-3", KeepFiles::default(), true, &reporter)
        .await
        .expect("dry run");

    assert!(matches!(outcome, DeleteOutcome::DryRun { .. }));
    assert!(api.deleted_items().is_empty());
    assert!(reporter.events().iter().any(|e| e.contains("Dry-run")));
}

#[tokio::test]
async fn malformed_item_id_is_rejected_before_any_request() {
    let api = MockApi::default();

    let err = delete_item(
        &api,
        "VX-1/../../storage",
        KeepFiles::default(),
        false,
        &RecordingReporter::default(),
    )
    .await
    .expect_err("must reject");

    assert!(err.to_string().contains("VX-1/../../storage"));
    assert!(api.deleted_items().is_empty());
}

#[tokio::test]
async fn thumbnails_started_for_video() {
    let api = MockApi {
        media_type: "video".to_string(),
        ..MockApi::default()
    };

    let outcome = recreate_thumbnails(&api, "VX-2", &RecordingReporter::default())
        .await
        .expect("thumbnails");

    match outcome {
        ThumbnailOutcome::Started(job) => assert_eq!(job.job_id, "VX-77"),
        ThumbnailOutcome::Ignored { .. } => panic!("video must get thumbnails"),
    }
    assert_eq!(*api.thumbnail_jobs.lock().expect("lock"), vec!["VX-2"]);
}

#[tokio::test]
async fn thumbnails_ignored_for_audio() {
    let api = MockApi {
        media_type: "audio".to_string(),
        ..MockApi::default()
    };
    let reporter = RecordingReporter::default();

    let outcome = recreate_thumbnails(&api, "VX-4", &reporter)
        .await
        .expect("thumbnails");

    assert!(matches!(
        outcome,
        ThumbnailOutcome::Ignored { ref media_type } if media_type == "audio"
    ));
    assert!(api.thumbnail_jobs.lock().expect("lock").is_empty());
    assert_eq!(
        reporter.warnings(),
        vec!["warn: Item VX-4 ignored due to media type: audio"]
    );
}
