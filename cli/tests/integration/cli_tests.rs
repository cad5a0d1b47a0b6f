//! Integration tests for the stratactl argument surface.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn stratactl() -> (Command, tempfile::TempDir) {
    let home = tempfile::tempdir().expect("tempdir");
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("stratactl"));
    cmd.env("NO_COLOR", "1")
        .env("STRATA_SETTINGS", home.path().join("settings.yaml"))
        .env_remove("RUST_LOG");
    (cmd, home)
}

// --- Help and version tests ---

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    let (mut cmd, _home) = stratactl();
    cmd.assert().code(2).stderr(predicate::str::contains(
        "Install, run, and scale the Strata platform",
    ));
}

#[test]
fn test_cli_help_lists_lifecycle_commands() {
    let (mut cmd, _home) = stratactl();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("refresh-units"))
        .stdout(predicate::str::contains("list-unit-files"));
}

#[test]
fn test_version_command_shows_version() {
    let (mut cmd, _home) = stratactl();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "stratactl {}",
            env!("CARGO_PKG_VERSION")
        )));
}

// --- Argument validation ---

#[test]
fn test_start_requires_targets() {
    let (mut cmd, _home) = stratactl();
    cmd.arg("start").assert().code(2);
}

#[test]
fn test_config_rejects_unknown_action() {
    let (mut cmd, _home) = stratactl();
    cmd.args(["config", "platform", "delete", "domain"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Valid actions: get, set, rm"));
}

// --- Validation before any backend call ---

#[test]
fn test_scale_non_scalable_component_fails() {
    let (mut cmd, _home) = stratactl();
    cmd.args(["scale", "controller=2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: cannot scale controller component",
        ));
}

#[test]
fn test_scale_unparseable_target_fails() {
    let (mut cmd, _home) = stratactl();
    cmd.args(["scale", "router3"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Could not parse: router3"));
}

#[test]
fn test_config_set_malformed_assignment_fails() {
    let (mut cmd, _home) = stratactl();
    cmd.args(["config", "platform", "set", "domain"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("expected key=value"));
}

#[test]
fn test_invalid_settings_file_is_reported() {
    let (mut cmd, home) = stratactl();
    std::fs::write(home.path().join("settings.yaml"), "backend: [not, a, map]")
        .expect("write settings");
    cmd.args(["scale", "router=1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot parse"));
}

// --- NO_COLOR environment ---

#[test]
fn test_no_color_numeric_value_runs_command() {
    let (mut cmd, _home) = stratactl();
    cmd.env("NO_COLOR", "1")
        .args(["scale", "controller=2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot scale controller component"))
        .stderr(predicate::str::contains("invalid value").not());
}

#[test]
fn test_no_color_falsey_and_empty_values_are_accepted() {
    for value in ["0", "false", ""] {
        let (mut cmd, _home) = stratactl();
        cmd.env("NO_COLOR", value).arg("version").assert().success();
    }
}
