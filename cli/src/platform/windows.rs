//! # Windows Strategies
//!
//! File: cli/src/platform/windows.rs
//!
//! Explorer is reached through ShellExecuteW, first with the `explore` verb
//! and then with `open`. If both are refused, `explorer <path>` is run and its
//! exit status decides between `done` and `error`.
//!
use crate::chain::{Chain, Folder, Outcome, Strategy};
use crate::common::process::CommandRunner;
use crate::core::config::Config;
use crate::platform::capabilities::{Capabilities, Capability};
use crate::platform::shell::ShellOpen;
use std::path::Path;
use std::sync::Arc;

pub const EXPLORER_PROGRAM: &str = "explorer";

/// Shell verb invocation.
pub trait WindowsHost: Send + Sync {
    /// `ShellExecuteW(NULL, verb, path, NULL, NULL, SW_SHOWNORMAL) > 32`
    fn shell_execute(&self, verb: &str, path: &Path) -> bool;
}

/// `WindowsHost` backed by the Win32 shell.
#[cfg(windows)]
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Shell;

#[cfg(windows)]
impl WindowsHost for Win32Shell {
    fn shell_execute(&self, verb: &str, path: &Path) -> bool {
        use std::ffi::OsStr;
        use std::os::windows::ffi::OsStrExt;
        use windows_sys::Win32::UI::Shell::ShellExecuteW;
        use windows_sys::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;

        fn wide(s: &OsStr) -> Vec<u16> {
            s.encode_wide().chain(std::iter::once(0)).collect()
        }

        let verb = wide(OsStr::new(verb));
        let file = wide(path.as_os_str());
        // SAFETY: both buffers are NUL-terminated and outlive the call.
        let handle = unsafe {
            ShellExecuteW(
                0,
                verb.as_ptr(),
                file.as_ptr(),
                std::ptr::null(),
                std::ptr::null(),
                SW_SHOWNORMAL,
            )
        };
        tracing::debug!("ShellExecuteW returned {}", handle);
        handle > 32
    }
}

/// One ShellExecuteW verb.
pub struct ShellVerb {
    host: Arc<dyn WindowsHost>,
    name: &'static str,
    verb: &'static str,
    message: &'static str,
}

impl Strategy for ShellVerb {
    fn name(&self) -> &str {
        self.name
    }

    fn requires(&self) -> Capability {
        Capability::ShellExecute
    }

    fn attempt(&self, folder: &Folder) -> Outcome {
        if self.host.shell_execute(self.verb, folder.absolute()) {
            Outcome::Success(self.message.to_string())
        } else {
            Outcome::Failed(format!("ShellExecute '{}' was refused", self.verb))
        }
    }
}

pub fn strategies(
    host: Arc<dyn WindowsHost>,
    runner: Arc<dyn CommandRunner>,
) -> Vec<Box<dyn Strategy>> {
    vec![
        Box::new(ShellVerb {
            host: host.clone(),
            name: "shell-explore",
            verb: "explore",
            message: "Folder opened in Explorer",
        }),
        Box::new(ShellVerb {
            host,
            name: "shell-open",
            verb: "open",
            message: "Folder opened",
        }),
        Box::new(ShellOpen::new("explorer-command", EXPLORER_PROGRAM, runner)),
    ]
}

pub fn build_chain(
    config: &Config,
    capabilities: &Capabilities,
    host: Arc<dyn WindowsHost>,
    runner: Arc<dyn CommandRunner>,
) -> Chain {
    Chain::new(strategies(host, runner), capabilities, &config.strategies)
}
