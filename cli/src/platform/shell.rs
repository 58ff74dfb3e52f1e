//! # Shell Open Fallback
//!
//! File: cli/src/platform/shell.rs
//!
//! The last-resort strategy shared by the macOS and Windows chains: run the
//! OS's generic open command (`/usr/bin/open`, `explorer`) with the folder as
//! its only argument. Unlike the Linux launchers, a non-zero exit here ends
//! the call as an `error` carrying the exit code.
//!
use crate::chain::{Folder, Outcome, Strategy};
use crate::common::process::CommandRunner;
use crate::core::error::OpenFolderError;
use crate::platform::capabilities::Capability;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Runs the OS's generic open command on the folder; the exit status decides.
pub struct ShellOpen {
    pub(crate) name: &'static str,
    pub(crate) program: &'static str,
    pub(crate) runner: Arc<dyn CommandRunner>,
}

impl ShellOpen {
    pub fn new(name: &'static str, program: &'static str, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            name,
            program,
            runner,
        }
    }
}

impl Strategy for ShellOpen {
    fn name(&self) -> &str {
        self.name
    }

    fn requires(&self) -> Capability {
        Capability::CommandLine
    }

    fn is_last_resort(&self) -> bool {
        true
    }

    fn attempt(&self, folder: &Folder) -> Outcome {
        let program = match self.runner.require(self.program) {
            Ok(program) => program,
            Err(e) => {
                debug!("{}; running '{}' as given", e, self.program);
                PathBuf::from(self.program)
            }
        };
        match self.runner.run(&program, &[folder.absolute().as_os_str()]) {
            Ok(exit) if exit.success() => {
                Outcome::Success("Folder opened using system command".to_string())
            }
            Ok(exit) => {
                let status = OpenFolderError::ExitStatus {
                    program: self.program.to_string(),
                    code: exit.code,
                };
                Outcome::Failed(format!("Failed to open folder: {}", status))
            }
            Err(e) => Outcome::Failed(format!("Failed to open folder: {}", e)),
        }
    }
}
