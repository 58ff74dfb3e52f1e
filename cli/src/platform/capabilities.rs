//! # Platform Capability Detection
//!
//! File: cli/src/platform/capabilities.rs
//!
//! ## Overview
//!
//! Capabilities are resolved once, when a plugin is built, and chains keep
//! only the strategies whose required capability is present. OS version
//! gating lives here and nowhere else.
//!
//! - Desktop targets: fixed per compiled OS, cached in `DETECTED`
//! - Android: `DocumentTreeUri` from SDK 26 on
//! - iOS: `SharedDocumentsUrl` from iOS 11 on
//!
use super::Platform;
use once_cell::sync::Lazy;
use std::collections::BTreeSet;

/// A native mechanism a strategy depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    /// Storage Access Framework document URIs (Android 8.0, API 26+)
    DocumentTreeUri,
    /// Content-provider URI grants to a VIEW action
    ContentProvider,
    /// Intents addressed to a specific application package
    PackageTargeting,
    /// Unscoped VIEW intents resolved by the package manager
    GenericView,
    /// `shareddocuments://` URLs handled by the Files app (iOS 11+)
    SharedDocumentsUrl,
    /// Modal alert presented over the top view controller
    AlertDialog,
    /// NSWorkspace open / select in Finder
    WorkspaceReveal,
    /// ShellExecuteW verbs
    ShellExecute,
    /// Spawning external programs and waiting for their exit status
    CommandLine,
}

/// Minimum Android API level for document-tree URIs.
pub const MIN_DOCUMENT_TREE_SDK: u32 = 26;

/// Minimum iOS major version for `shareddocuments://`.
pub const MIN_SHARED_DOCUMENTS_IOS: u32 = 11;

/// The set of capabilities of the running platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    platform: Platform,
    flags: BTreeSet<Capability>,
}

impl Capabilities {
    pub fn new(platform: Platform, flags: impl IntoIterator<Item = Capability>) -> Self {
        Self {
            platform,
            flags: flags.into_iter().collect(),
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn has(&self, capability: Capability) -> bool {
        self.flags.contains(&capability)
    }

    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.flags.iter().copied()
    }

    /// Capabilities of an Android device running the given API level.
    pub fn android(sdk_int: u32) -> Self {
        let mut flags = vec![
            Capability::ContentProvider,
            Capability::PackageTargeting,
            Capability::GenericView,
        ];
        if sdk_int >= MIN_DOCUMENT_TREE_SDK {
            flags.push(Capability::DocumentTreeUri);
        }
        Self::new(Platform::Android, flags)
    }

    /// Capabilities of an iOS device running the given major version.
    pub fn ios(major_version: u32) -> Self {
        let mut flags = vec![Capability::AlertDialog];
        if major_version >= MIN_SHARED_DOCUMENTS_IOS {
            flags.push(Capability::SharedDocumentsUrl);
        }
        Self::new(Platform::Ios, flags)
    }

    pub fn macos() -> Self {
        Self::new(
            Platform::Macos,
            [Capability::WorkspaceReveal, Capability::CommandLine],
        )
    }

    pub fn windows() -> Self {
        Self::new(
            Platform::Windows,
            [Capability::ShellExecute, Capability::CommandLine],
        )
    }

    pub fn linux() -> Self {
        Self::new(Platform::Linux, [Capability::CommandLine])
    }

    /// Capabilities of the desktop this binary was compiled for, detected once.
    pub fn detect() -> Self {
        DETECTED.clone()
    }
}

static DETECTED: Lazy<Capabilities> = Lazy::new(|| {
    let caps = match Platform::current() {
        Platform::Macos => Capabilities::macos(),
        Platform::Windows => Capabilities::windows(),
        _ => Capabilities::linux(),
    };
    tracing::debug!("Detected capabilities: {:?}", caps);
    caps
});
