//! # OpenFolder CLI `call` Integration Tests
//!
//! File: cli/tests/call.rs
//!
//! Method-call dispatch through the binary, the way the bridge sees it.
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

/// Test that `call getPlatformVersion` prints a desktop version string.
#[test]
fn test_call_get_platform_version() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), &[]);

    open_folder_cmd()
        .arg("--config")
        .arg(&config)
        .args(["call", "getPlatformVersion"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("Linux")
                .or(predicate::str::starts_with("macOS"))
                .or(predicate::str::starts_with("Windows")),
        );
}

/// Test that `openFolder` without arguments prints the fixed missing-path payload.
#[test]
fn test_call_open_folder_without_path() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), &[]);

    open_folder_cmd()
        .arg("--config")
        .arg(&config)
        .args(["call", "openFolder", "--args", "{}"])
        .assert()
        .success()
        .stdout(
            r#"{"type":"error","message":"Folder path is required"}"#.to_string() + "\n",
        );
}

/// Test `call openFolder` on a directory that does not exist.
#[test]
fn test_call_open_folder_missing_directory() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), &[]);
    let args = serde_json::json!({ "folder_path": dir.path().join("gone") });
    let args = args.to_string();

    let output = open_folder_cmd()
        .arg("--config")
        .arg(&config)
        .args(["call", "openFolder", "--args", &args])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(parse_payload(&output.stdout)["type"], "fileNotFound");
}

/// Test that an unknown method exits with code 2.
#[test]
fn test_call_unknown_method() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), &[]);

    open_folder_cmd()
        .arg("--config")
        .arg(&config)
        .args(["call", "deleteFolder"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not implemented: deleteFolder"));
}

/// Test that `strategies` lists the launchers from the configuration file.
#[test]
fn test_strategies_lists_configured_launchers() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), &["thunar", "caja"]);

    let assert = open_folder_cmd()
        .arg("--config")
        .arg(&config)
        .arg("strategies")
        .assert()
        .success()
        .stdout(predicate::str::contains("Platform:"));

    if cfg!(target_os = "linux") {
        assert
            .stdout(predicate::str::contains("1. launch:thunar"))
            .stdout(predicate::str::contains("2. launch:caja"));
    }
}

/// Test the `--help` and `--version` flags.
#[test]
fn test_main_help_and_version_flags() {
    open_folder_cmd().arg("--help").assert().success();
    open_folder_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
