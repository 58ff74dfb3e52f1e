//! # The Fallback Chain
//!
//! File: cli/src/chain/mod.rs
//!
//! ## Overview
//!
//! A chain is an ordered list of strategies, each wrapping one native way of
//! surfacing a folder. Strategies are tried in order and the first success
//! ends the call. A strategy never lets a failure escape: it reports one of
//! three typed outcomes instead.
//!
//! - `Success`: the folder was surfaced; the message goes back to the caller.
//! - `NotAvailable`: the handler is absent (app not installed, program not on
//!   PATH, nothing registered for the action). Skipped silently.
//! - `Failed`: the handler exists but did not work.
//!
//! ## Terminal states
//!
//! - first `Success` → `done`
//! - chain exhausted → `noAppToOpen`
//! - chain exhausted and the final attempt was a *last resort* strategy that
//!   `Failed` → `error`, carrying that strategy's reason
//!
//! The last rule covers the desktop shell fallbacks (`/usr/bin/open`,
//! `explorer`), whose non-zero exit is reported as an error rather than as
//! a missing application.
//!
//! A strategy that panics is treated as `Failed` with the panic text, and the
//! chain moves on to the next strategy.
//!
pub mod validate;

use crate::core::config::StrategiesConfig;
use crate::core::result::OpenResult;
use crate::platform::capabilities::{Capabilities, Capability};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, error, info, warn};

pub use validate::{validate, Folder, Rejection};

/// Result of a single strategy attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(String),
    NotAvailable,
    Failed(String),
}

/// One platform-specific way of surfacing a folder.
///
/// Implementations hold whatever host handle they need. They must be
/// stateless with respect to the call: attempting twice on the same folder
/// with the same installed handlers gives the same outcome.
pub trait Strategy: Send + Sync {
    /// Stable name, used in logs and in `strategies.disabled`.
    fn name(&self) -> &str;

    /// Capability the running platform must report for this strategy to be kept.
    fn requires(&self) -> Capability;

    /// Whether a failure of this strategy, as the final attempt, is an `error`.
    fn is_last_resort(&self) -> bool {
        false
    }

    fn attempt(&self, folder: &Folder) -> Outcome;
}

/// An ordered, capability-filtered list of strategies.
pub struct Chain {
    strategies: Vec<Box<dyn Strategy>>,
}

impl Chain {
    /// Keeps the candidates whose capability is present and that are not disabled.
    pub fn new(
        candidates: Vec<Box<dyn Strategy>>,
        capabilities: &Capabilities,
        selection: &StrategiesConfig,
    ) -> Self {
        let strategies = candidates
            .into_iter()
            .filter(|s| {
                if !capabilities.has(s.requires()) {
                    debug!(
                        "Dropping strategy '{}': capability {:?} not present",
                        s.name(),
                        s.requires()
                    );
                    return false;
                }
                if selection.is_disabled(s.name()) {
                    debug!(
                        "Dropping strategy '{}': disabled by configuration",
                        s.name()
                    );
                    return false;
                }
                true
            })
            .collect();
        Self { strategies }
    }

    /// Strategy names in attempt order.
    pub fn names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Tries each strategy in order until one succeeds.
    pub fn run(&self, folder: &Folder) -> OpenResult {
        let mut last: Option<(&dyn Strategy, Outcome)> = None;

        for strategy in &self.strategies {
            debug!("Trying strategy '{}'", strategy.name());
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| strategy.attempt(folder)))
                .unwrap_or_else(|payload| {
                    let reason = panic_reason(payload.as_ref());
                    error!("Strategy '{}' panicked: {}", strategy.name(), reason);
                    Outcome::Failed(format!("Failed to open folder: {}", reason))
                });
            match &outcome {
                Outcome::Success(message) => {
                    info!("Strategy '{}' succeeded: {}", strategy.name(), message);
                    return OpenResult::done(message.clone());
                }
                Outcome::NotAvailable => {
                    debug!("Strategy '{}' not available, skipping", strategy.name());
                }
                Outcome::Failed(reason) => {
                    warn!("Strategy '{}' failed: {}", strategy.name(), reason);
                }
            }
            last = Some((&**strategy, outcome));
        }

        match last {
            Some((strategy, Outcome::Failed(reason))) if strategy.is_last_resort() => {
                OpenResult::error(reason)
            }
            _ => {
                warn!(
                    "No strategy could open '{}' ({} tried)",
                    folder.requested(),
                    self.strategies.len()
                );
                OpenResult::no_app_to_open()
            }
        }
    }
}

/// Text carried by a panic payload, when it has any.
pub(crate) fn panic_reason(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
