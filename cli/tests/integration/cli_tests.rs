//! CLI structure and argument parsing.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn mam() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mam"));
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    mam().assert().code(2).stderr(predicate::str::contains(
        "Rule-engine and maintenance commands for the MAM platform",
    ));
}

#[test]
fn test_cli_help_lists_commands() {
    mam()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("delete-item"))
        .stdout(predicate::str::contains("recreate-thumbnails"))
        .stdout(predicate::str::contains("remove-metadata-changes"))
        .stdout(predicate::str::contains("total-duration"))
        .stdout(predicate::str::contains("generate-videos"));
}

#[test]
fn test_version_command_shows_version() {
    mam()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "mam {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_version_command_json_outputs_valid_json() {
    let output = mam()
        .args(["version", "--json"])
        .output()
        .expect("run mam");
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("version output is JSON");
    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_unknown_command_fails() {
    mam().arg("frobnicate").assert().code(2);
}
