//! # Platform-specific functionality
//!
//! File: cli/src/platform/mod.rs
//!
//! ## Overview
//!
//! One module per platform, each exposing the host trait its strategies call
//! into, the strategies themselves, and a `build_chain` function:
//!
//! - **android**: VIEW intents (document tree, FileProvider, known file managers, generic)
//! - **ios**: Files app URL, then a path alert
//! - **macos**: Finder open, Finder select, `/usr/bin/open`
//! - **windows**: ShellExecute `explore`, `open`, then `explorer`
//! - **linux**: configurable launcher programs (`xdg-open`, nautilus, ...)
//!
//! Every module is compiled on every target. Only the OS calls behind the
//! host traits are target-specific, so the chains can be tested anywhere.
//! Mobile hosts come from the embedding application; desktop hosts are
//! built by `native_chain`.
//!
//! `capabilities` resolves, once, which native mechanisms exist; `version`
//! answers `getPlatformVersion`.

pub mod android;
pub mod capabilities;
pub mod ios;
pub mod linux;
pub mod macos;
pub mod shell;
pub mod version;
pub mod windows;

use crate::chain::Chain;
use crate::common::process::{CommandRunner, SystemRunner};
use crate::core::config::Config;
use capabilities::Capabilities;
use std::fmt;
use std::sync::Arc;

/// Platform families with their own fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Android,
    Ios,
    Macos,
    Windows,
    Linux,
}

impl Platform {
    /// The desktop family this binary was compiled for. Other Unix systems
    /// share the Linux launchers.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::Macos
        } else if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Android => "Android",
            Platform::Ios => "iOS",
            Platform::Macos => "macOS",
            Platform::Windows => "Windows",
            Platform::Linux => "Linux",
        };
        f.write_str(name)
    }
}

/// Builds the chain for the running desktop, backed by real OS calls.
pub fn native_chain(config: &Config, capabilities: &Capabilities) -> Chain {
    let runner: Arc<dyn CommandRunner> = Arc::new(SystemRunner);
    match capabilities.platform() {
        Platform::Macos => macos::build_chain(
            config,
            capabilities,
            Arc::new(macos::FinderHost::new(runner.clone())),
            runner,
        ),
        #[cfg(windows)]
        Platform::Windows => {
            windows::build_chain(config, capabilities, Arc::new(windows::Win32Shell), runner)
        }
        _ => linux::build_chain(config, capabilities, runner),
    }
}
