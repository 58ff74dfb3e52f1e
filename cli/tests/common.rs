//! # OpenFolder CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! Shared helpers for the integration tests. Every command is pointed at an
//! explicit configuration file so that no test ever launches the real file
//! browser of the machine running the suite.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Creates an `assert_cmd::Command` for the compiled `open-folder` binary.
///
/// ## Panics
/// Panics if the `open-folder` binary cannot be found via `Command::cargo_bin`.
pub fn open_folder_cmd() -> Command {
    let mut cmd = Command::cargo_bin("open-folder")
        .expect("Failed to find open-folder binary for testing");
    cmd.env_remove("OPEN_FOLDER_CONFIG").env_remove("RUST_LOG");
    cmd
}

/// macOS and Windows strategies that would reach the real desktop.
const DESKTOP_STRATEGIES: &str = "\"workspace-open\", \"select-in-finder\", \"open-command\", \
                                  \"shell-explore\", \"shell-open\", \"explorer-command\"";

/// Writes a config whose Linux launcher list is `launchers` and which
/// disables every launcher-free strategy of the other desktops.
pub fn write_config(dir: &Path, launchers: &[&str]) -> PathBuf {
    let list = launchers
        .iter()
        .map(|l| format!("\"{}\"", l))
        .collect::<Vec<_>>()
        .join(", ");
    let content = format!(
        "[linux]\nfile_managers = [{}]\n\n[strategies]\ndisabled = [{}]\n",
        list, DESKTOP_STRATEGIES
    );
    let path = dir.join("open-folder.toml");
    std::fs::write(&path, content).expect("Failed to write test config");
    path
}

/// Parses a JSON payload printed on stdout.
pub fn parse_payload(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).expect("stdout should be a JSON object")
}
