//! Tests for the total-duration aggregation.

#![allow(clippy::expect_used)]

use mam_cli::application::services::duration::total_duration;

use crate::mocks::{MockIndex, RecordingReporter, search_page};

fn item(seconds: &str) -> String {
    format!(r#"{{"_type":"item","_source":{{"durationSeconds":[{seconds}]}}}}"#)
}

#[tokio::test]
async fn sums_item_hits_across_pages() {
    let full = search_page(&format!(
        r#"{{"hits":{{"hits":[{},{}]}}}}"#,
        item("10.5"),
        item(r#""4.5""#)
    ));
    let last = search_page(&format!(
        r#"{{"hits":{{"hits":[{},{{"_type":"collection","_source":{{"durationSeconds":[99]}}}}]}}}}"#,
        item("5")
    ));
    // The second page is full too, so a third, empty page ends the walk.
    let index = MockIndex {
        pages: vec![full, last],
        ..MockIndex::default()
    };

    let total = total_duration(&index, 2, &RecordingReporter::default())
        .await
        .expect("total");

    assert!((total.seconds - 20.0).abs() < f64::EPSILON);
    assert_eq!(total.items, 3);
    assert_eq!(
        *index.requests.lock().expect("lock"),
        vec![(0, 2), (2, 2), (4, 2)]
    );
}

#[tokio::test]
async fn short_page_ends_the_walk() {
    let index = MockIndex {
        pages: vec![search_page(&format!(
            r#"{{"hits":{{"hits":[{}]}}}}"#,
            item("30")
        ))],
        ..MockIndex::default()
    };

    let total = total_duration(&index, 100, &RecordingReporter::default())
        .await
        .expect("total");

    assert!((total.seconds - 30.0).abs() < f64::EPSILON);
    assert_eq!(index.requests.lock().expect("lock").len(), 1);
}

#[tokio::test]
async fn zero_page_size_is_rejected() {
    let err = total_duration(&MockIndex::default(), 0, &RecordingReporter::default())
        .await
        .expect_err("must reject");
    assert!(err.to_string().contains("page size"));
}
