//! # macOS Strategies
//!
//! File: cli/src/platform/macos.rs
//!
//! Finder is asked to open the folder; if that fails the folder is selected
//! in a Finder window rooted at it; if that fails too, `/usr/bin/open` is run
//! and its exit status decides between `done` and `error`.
//!
use crate::chain::{Chain, Folder, Outcome, Strategy};
use crate::common::process::CommandRunner;
use crate::core::config::Config;
use crate::platform::capabilities::{Capabilities, Capability};
use crate::platform::shell::ShellOpen;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const OPEN_PROGRAM: &str = "/usr/bin/open";

/// Workspace-level Finder operations.
pub trait MacosHost: Send + Sync {
    /// Opens the folder in Finder (`NSWorkspace.open`).
    fn workspace_open(&self, path: &Path) -> bool;

    /// Selects the folder in a Finder window (`NSWorkspace.selectFile`).
    fn select_in_file_viewer(&self, path: &Path) -> bool;
}

/// `MacosHost` driving Finder through LaunchServices' `open` tool.
pub struct FinderHost {
    runner: Arc<dyn CommandRunner>,
}

impl FinderHost {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    fn open_with(&self, flags: &[&str], path: &Path) -> bool {
        let mut args: Vec<&OsStr> = flags.iter().map(OsStr::new).collect();
        args.push(path.as_os_str());
        match self.runner.run(&PathBuf::from(OPEN_PROGRAM), &args) {
            Ok(exit) => exit.success(),
            Err(e) => {
                tracing::debug!("{} {:?} failed: {}", OPEN_PROGRAM, flags, e);
                false
            }
        }
    }
}

impl MacosHost for FinderHost {
    fn workspace_open(&self, path: &Path) -> bool {
        self.open_with(&["-a", "Finder"], path)
    }

    fn select_in_file_viewer(&self, path: &Path) -> bool {
        self.open_with(&["-R"], path)
    }
}

pub struct WorkspaceOpen {
    host: Arc<dyn MacosHost>,
}

impl Strategy for WorkspaceOpen {
    fn name(&self) -> &str {
        "workspace-open"
    }

    fn requires(&self) -> Capability {
        Capability::WorkspaceReveal
    }

    fn attempt(&self, folder: &Folder) -> Outcome {
        if self.host.workspace_open(folder.absolute()) {
            Outcome::Success("Folder opened in Finder".to_string())
        } else {
            Outcome::Failed("Finder did not open the folder".to_string())
        }
    }
}

pub struct SelectInFinder {
    host: Arc<dyn MacosHost>,
}

impl Strategy for SelectInFinder {
    fn name(&self) -> &str {
        "select-in-finder"
    }

    fn requires(&self) -> Capability {
        Capability::WorkspaceReveal
    }

    fn attempt(&self, folder: &Folder) -> Outcome {
        if self.host.select_in_file_viewer(folder.absolute()) {
            Outcome::Success("Folder selected in Finder".to_string())
        } else {
            Outcome::Failed("Finder did not select the folder".to_string())
        }
    }
}

pub fn strategies(
    host: Arc<dyn MacosHost>,
    runner: Arc<dyn CommandRunner>,
) -> Vec<Box<dyn Strategy>> {
    vec![
        Box::new(WorkspaceOpen { host: host.clone() }),
        Box::new(SelectInFinder { host }),
        Box::new(ShellOpen::new("open-command", OPEN_PROGRAM, runner)),
    ]
}

pub fn build_chain(
    config: &Config,
    capabilities: &Capabilities,
    host: Arc<dyn MacosHost>,
    runner: Arc<dyn CommandRunner>,
) -> Chain {
    Chain::new(strategies(host, runner), capabilities, &config.strategies)
}
