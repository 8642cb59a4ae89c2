//! Rule-engine commands driven through the `portal_itemId` environment.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

/// `mam` with a complete API configuration and no item id.
fn mam() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mam"));
    cmd.env("NO_COLOR", "1")
        .env("MAM_CONFIG", "/nonexistent/mam/config.yaml")
        .env("MAM_API_URL", "http://vs.test:8080")
        .env("MAM_API_USER", "admin")
        .env("MAM_API_PASSWORD", "secret")
        .env_remove("portal_itemId");
    cmd
}

#[test]
fn delete_item_without_item_id_does_nothing() {
    mam()
        .arg("delete-item")
        .assert()
        .success()
        .stdout(predicate::str::contains("portal_itemId not set"));
}

#[test]
fn recreate_thumbnails_without_item_id_does_nothing() {
    mam()
        .arg("recreate-thumbnails")
        .assert()
        .success()
        .stdout(predicate::str::contains("portal_itemId not set"));
}

#[test]
fn missing_item_id_wins_over_missing_config() {
    mam()
        .env_remove("MAM_API_URL")
        .env_remove("MAM_API_USER")
        .env_remove("MAM_API_PASSWORD")
        .arg("delete-item")
        .assert()
        .success();
}

#[test]
fn delete_item_dry_run_reports_default_keep_all_url() {
    mam()
        .env("portal_itemId", "VX-1979")
        .args(["delete-item", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "DELETE http://vs.test:8080/API/item/VX-1979?keepShapeTagMedia=*&keepShapeTagStorage=*",
        ));
}

#[test]
fn delete_item_dry_run_json() {
    let output = mam()
        .env("portal_itemId", "VX-7")
        .args([
            "delete-item",
            "--dry-run",
            "--json",
            "--keep-shape-tag-media",
            "original",
        ])
        .output()
        .expect("run mam");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("JSON summary");
    assert_eq!(
        value["url"],
        "http://vs.test:8080/API/item/VX-7?keepShapeTagMedia=original"
    );
    assert_eq!(value["dry_run"], true);
    assert_eq!(value["deleted"], false);
}

#[test]
fn delete_item_rejects_path_like_item_id() {
    mam()
        .env("portal_itemId", "VX-1/../VX-2")
        .args(["delete-item", "--dry-run"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid item ID"));
}

#[test]
fn missing_configuration_names_the_keys() {
    mam()
        .env_remove("MAM_API_USER")
        .env_remove("MAM_API_PASSWORD")
        .env("portal_itemId", "VX-1")
        .args(["delete-item", "--dry-run"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("api.username, api.password"));
}

#[test]
fn item_id_flag_overrides_environment() {
    mam()
        .env("portal_itemId", "VX-1")
        .args(["delete-item", "--dry-run", "--item-id", "VX-42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/API/item/VX-42?"));
}
