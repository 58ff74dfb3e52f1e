//! # Linux Strategies
//!
//! File: cli/src/platform/linux.rs
//!
//! One strategy per configured launcher (`xdg-open` first, then the common
//! desktop file managers). A launcher missing from PATH is skipped; one that
//! exits non-zero counts as a failed attempt and the next launcher is tried.
//!
use crate::chain::{Chain, Folder, Outcome, Strategy};
use crate::common::process::CommandRunner;
use crate::core::config::Config;
use crate::platform::capabilities::{Capabilities, Capability};
use std::sync::Arc;
use tracing::debug;

/// Runs a single launcher program with the folder as its only argument.
pub struct Launch {
    runner: Arc<dyn CommandRunner>,
    program: String,
    name: String,
}

impl Launch {
    pub fn new(program: impl Into<String>, runner: Arc<dyn CommandRunner>) -> Self {
        let program = program.into();
        Self {
            name: format!("launch:{}", program),
            program,
            runner,
        }
    }
}

impl Strategy for Launch {
    fn name(&self) -> &str {
        &self.name
    }

    fn requires(&self) -> Capability {
        Capability::CommandLine
    }

    fn attempt(&self, folder: &Folder) -> Outcome {
        let program = match self.runner.require(&self.program) {
            Ok(program) => program,
            Err(e) => {
                debug!("Skipping '{}': {}", self.name, e);
                return Outcome::NotAvailable;
            }
        };
        match self.runner.run(&program, &[folder.absolute().as_os_str()]) {
            Ok(exit) if exit.success() => Outcome::Success("Folder opened".to_string()),
            Ok(exit) => Outcome::Failed(format!(
                "{} exited with code {:?}",
                self.program, exit.code
            )),
            Err(e) => Outcome::Failed(e.to_string()),
        }
    }
}

pub fn strategies(programs: &[String], runner: Arc<dyn CommandRunner>) -> Vec<Box<dyn Strategy>> {
    programs
        .iter()
        .map(|program| {
            Box::new(Launch::new(program.as_str(), runner.clone())) as Box<dyn Strategy>
        })
        .collect()
}

pub fn build_chain(
    config: &Config,
    capabilities: &Capabilities,
    runner: Arc<dyn CommandRunner>,
) -> Chain {
    Chain::new(
        strategies(&config.linux.file_managers, runner),
        capabilities,
        &config.strategies,
    )
}
