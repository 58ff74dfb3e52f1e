//! # iOS Strategies
//!
//! File: cli/src/platform/ios.rs
//!
//! iOS offers no programmatic way to reveal an arbitrary folder. The best
//! available option is asking the Files app to open a `shareddocuments://`
//! URL (iOS 11+). When that is not possible the path is shown to the user in
//! an alert; acknowledging the alert counts as `done`.
//!
//! The embedding application implements `IosHost` and runs its calls on the
//! main queue.
//!
use crate::chain::{Chain, Folder, Outcome, Strategy};
use crate::core::config::Config;
use crate::platform::capabilities::{Capabilities, Capability};
use std::sync::Arc;

pub const SHARED_DOCUMENTS_SCHEME: &str = "shareddocuments";
pub const ALERT_TITLE: &str = "Folder Location";

/// What happened to the path alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertOutcome {
    /// Shown and dismissed with OK.
    Acknowledged,
    /// There was no view controller to present it from.
    NoPresenter,
}

/// Services the embedding iOS application provides.
pub trait IosHost: Send + Sync {
    /// `UIApplication.canOpenURL`
    fn can_open_url(&self, url: &str) -> bool;

    /// `UIApplication.open`, resolved with its completion flag.
    fn open_url(&self, url: &str) -> bool;

    /// Presents a single-button alert and blocks until it is dismissed.
    fn present_alert(&self, title: &str, message: &str) -> AlertOutcome;
}

pub fn shared_documents_url(folder: &Folder) -> String {
    format!("{}://{}", SHARED_DOCUMENTS_SCHEME, folder.absolute_str())
}

pub fn alert_message(folder: &Folder) -> String {
    format!(
        "Folder path: {}\n\nOn iOS, folders cannot be opened directly. \
         You can access this folder through the Files app.",
        folder.requested()
    )
}

/// Opens the Files app at the folder.
pub struct SharedDocuments {
    host: Arc<dyn IosHost>,
}

impl Strategy for SharedDocuments {
    fn name(&self) -> &str {
        "shared-documents"
    }

    fn requires(&self) -> Capability {
        Capability::SharedDocumentsUrl
    }

    fn attempt(&self, folder: &Folder) -> Outcome {
        let url = shared_documents_url(folder);
        if !self.host.can_open_url(&url) {
            return Outcome::NotAvailable;
        }
        if self.host.open_url(&url) {
            Outcome::Success("Files app opened".to_string())
        } else {
            Outcome::Failed(format!("Files app refused {}", url))
        }
    }
}

/// Shows the path as text and waits for acknowledgement.
pub struct PathAlert {
    host: Arc<dyn IosHost>,
}

impl Strategy for PathAlert {
    fn name(&self) -> &str {
        "path-alert"
    }

    fn requires(&self) -> Capability {
        Capability::AlertDialog
    }

    fn is_last_resort(&self) -> bool {
        true
    }

    fn attempt(&self, folder: &Folder) -> Outcome {
        match self.host.present_alert(ALERT_TITLE, &alert_message(folder)) {
            AlertOutcome::Acknowledged => Outcome::Success("Folder path shown to user".to_string()),
            AlertOutcome::NoPresenter => {
                Outcome::Failed("Cannot display folder information on iOS".to_string())
            }
        }
    }
}

pub fn strategies(host: Arc<dyn IosHost>) -> Vec<Box<dyn Strategy>> {
    vec![
        Box::new(SharedDocuments { host: host.clone() }),
        Box::new(PathAlert { host }),
    ]
}

pub fn build_chain(config: &Config, capabilities: &Capabilities, host: Arc<dyn IosHost>) -> Chain {
    Chain::new(strategies(host), capabilities, &config.strategies)
}
