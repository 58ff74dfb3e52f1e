//! # OpenFolder Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Desktop strategies surface folders by launching external programs
//! (`xdg-open`, `nautilus`, `/usr/bin/open`, `explorer`). This module wraps
//! `std::process::Command` behind the `CommandRunner` trait so strategies can
//! be exercised in tests without launching anything.
//!
//! - `locate`: PATH lookup via the `which` crate. A program that cannot be
//!   located is *not available*, which the chain treats differently from a
//!   program that ran and failed.
//! - `require`: `locate`, with the miss reported as `ProgramNotFound`.
//! - `run`: spawn, wait, and report the exit code. Arguments are passed
//!   directly, never through a shell, so paths with spaces or quotes are safe.
//!
use crate::core::error::OpenFolderError;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Exit information of a finished process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitReport {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl ExitReport {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Launches external programs on behalf of desktop strategies.
pub trait CommandRunner: Send + Sync {
    /// Resolves `program` (a bare name or a path) to an executable.
    fn locate(&self, program: &str) -> Option<PathBuf>;

    /// Like `locate`, but a missing program is an error.
    fn require(&self, program: &str) -> Result<PathBuf, OpenFolderError> {
        self.locate(program)
            .ok_or_else(|| OpenFolderError::ProgramNotFound {
                program: program.to_string(),
            })
    }

    /// Runs `program` with `args` and waits for it to exit.
    fn run(&self, program: &Path, args: &[&OsStr]) -> Result<ExitReport, OpenFolderError>;
}

/// `CommandRunner` backed by the real operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        match which::which(program) {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::debug!("'{}' not found on PATH: {}", program, e);
                None
            }
        }
    }

    fn run(&self, program: &Path, args: &[&OsStr]) -> Result<ExitReport, OpenFolderError> {
        tracing::debug!("Running {} {:?}", program.display(), args);
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| OpenFolderError::Spawn {
                program: program.display().to_string(),
                source,
            })?;
        tracing::debug!("{} exited with {}", program.display(), status);
        Ok(ExitReport {
            code: status.code(),
        })
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Runner with a scripted set of installed programs and their exit codes.
    #[derive(Default)]
    pub(crate) struct FakeRunner {
        installed: HashMap<String, Option<i32>>,
        pub runs: Mutex<Vec<(String, Vec<String>)>>,
    }

    impl FakeRunner {
        pub(crate) fn with(mut self, program: &str, exit_code: Option<i32>) -> Self {
            self.installed.insert(program.to_string(), exit_code);
            self
        }

        pub(crate) fn ran(&self) -> Vec<String> {
            self.runs
                .lock()
                .unwrap()
                .iter()
                .map(|(p, _)| p.clone())
                .collect()
        }
    }

    impl CommandRunner for FakeRunner {
        fn locate(&self, program: &str) -> Option<PathBuf> {
            self.installed
                .contains_key(program)
                .then(|| PathBuf::from(program))
        }

        fn run(&self, program: &Path, args: &[&OsStr]) -> Result<ExitReport, OpenFolderError> {
            let name = program.to_string_lossy().into_owned();
            self.runs.lock().unwrap().push((
                name.clone(),
                args.iter()
                    .map(|a| a.to_string_lossy().into_owned())
                    .collect(),
            ));
            match self.installed.get(&name) {
                Some(code) => Ok(ExitReport { code: *code }),
                None => Err(OpenFolderError::Spawn {
                    program: name,
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                }),
            }
        }
    }
}
