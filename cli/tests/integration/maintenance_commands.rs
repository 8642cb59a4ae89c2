//! Argument validation and offline behaviour of the maintenance commands.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn mam() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mam"));
    cmd.env("NO_COLOR", "1")
        .env("MAM_CONFIG", "/nonexistent/mam/config.yaml")
        .env_remove("MAM_SEARCH_URL");
    cmd
}

fn remove_changes(field: &str, date: &str) -> Command {
    let mut cmd = mam();
    cmd.args([
        "remove-metadata-changes",
        "--user",
        "editor",
        "--metadata-field",
        field,
        "--date",
        date,
        "--text",
        "draft",
    ]);
    cmd
}

#[test]
fn remove_changes_rejects_bad_field_name() {
    remove_changes("title", "2018")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid Metadata Field Name"));
}

#[test]
fn remove_changes_rejects_single_digit_month() {
    remove_changes("portal_mf123456", "2018-1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid date '2018-1'"));
}

#[test]
fn remove_changes_rejects_impossible_day() {
    remove_changes("portal_mf123456", "2018-02-30")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn remove_changes_requires_every_filter() {
    mam()
        .args(["remove-metadata-changes", "--user", "editor"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--metadata-field"));
}

#[test]
fn remove_changes_validates_before_reading_config() {
    remove_changes("portal_mf123456", "2018-05")
        .env_remove("MAM_API_URL")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("API is not configured"));
}

#[test]
fn total_duration_needs_a_search_endpoint() {
    mam()
        .arg("total-duration")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no search endpoint"));
}

#[test]
fn total_duration_rejects_zero_page_size() {
    mam()
        .args(["total-duration", "--page-size", "0"])
        .assert()
        .code(2);
}

#[cfg(unix)]
#[test]
fn generate_videos_runs_ffmpeg_and_skips_existing() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("tempdir");
    let ffmpeg = dir.path().join("ffmpeg");
    // Stand-in encoder: create the output file, the last argument.
    std::fs::write(&ffmpeg, "#!/bin/sh\nfor a; do last=$a; done\n: > \"$last\"\n")
        .expect("write script");
    std::fs::set_permissions(&ffmpeg, std::fs::Permissions::from_mode(0o755)).expect("chmod");
    let out = dir.path().join("videos");

    let run = || {
        let output = mam()
            .args(["generate-videos", "2", "--json", "--output-dir"])
            .arg(&out)
            .arg("--ffmpeg")
            .arg(&ffmpeg)
            .output()
            .expect("run mam");
        assert!(output.status.success(), "{output:?}");
        serde_json::from_slice::<serde_json::Value>(&output.stdout).expect("JSON summary")
    };

    let first = run();
    assert_eq!(first["created"].as_array().map(Vec::len), Some(2));
    assert!(
        out.join("356/a19/356a192b7913b04c54574d18c28d46e6395428ab.mov")
            .exists()
    );

    let second = run();
    assert_eq!(second["created"].as_array().map(Vec::len), Some(0));
    assert_eq!(second["skipped"], 2);
}
