//! # The OpenFolder Plugin
//!
//! File: cli/src/plugin.rs
//!
//! ## Overview
//!
//! `OpenFolderPlugin` ties the pieces together for one platform: the
//! capability-filtered chain and the platform version string. It is built
//! once, when the plugin is registered, and then serves any number of
//! independent calls. Nothing is shared between calls besides the chain,
//! which is immutable.
//!
//! ## Call flow
//!
//! 1. Validate the path (`fileNotFound` / `error` end the call here)
//! 2. Run the chain until a strategy succeeds
//! 3. Return exactly one `OpenResult`
//!
//! The chain already contains panics raised by individual strategies. Any
//! panic that still escapes it is caught here and reported as an `error`,
//! so the caller always gets a well-formed payload.
//!
use crate::chain::{self, Chain};
use crate::core::config::Config;
use crate::core::result::OpenResult;
use crate::platform::capabilities::Capabilities;
use crate::platform::{self, android::AndroidHost, ios::IosHost, version};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, error};

pub struct OpenFolderPlugin {
    chain: Chain,
    platform_version: String,
}

impl OpenFolderPlugin {
    pub fn new(chain: Chain, platform_version: impl Into<String>) -> Self {
        Self {
            chain,
            platform_version: platform_version.into(),
        }
    }

    /// Plugin for the desktop this process runs on.
    pub fn native(config: &Config) -> Self {
        let capabilities = Capabilities::detect();
        Self::new(
            platform::native_chain(config, &capabilities),
            version::desktop(),
        )
    }

    /// Plugin for an Android embedder.
    pub fn android(
        config: &Config,
        sdk_int: u32,
        release: &str,
        host: Arc<dyn AndroidHost>,
    ) -> Self {
        let capabilities = Capabilities::android(sdk_int);
        Self::new(
            platform::android::build_chain(config, &capabilities, host),
            version::android(release),
        )
    }

    /// Plugin for an iOS embedder.
    pub fn ios(config: &Config, system_version: &str, host: Arc<dyn IosHost>) -> Self {
        let major = system_version
            .split('.')
            .next()
            .and_then(|m| m.parse().ok())
            .unwrap_or(0);
        let capabilities = Capabilities::ios(major);
        Self::new(
            platform::ios::build_chain(config, &capabilities, host),
            version::ios(system_version),
        )
    }

    pub fn platform_version(&self) -> &str {
        &self.platform_version
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Validates `folder_path` and runs the chain on it.
    pub fn open_folder(&self, folder_path: &str) -> OpenResult {
        debug!("openFolder({:?})", folder_path);
        let folder = match chain::validate(folder_path) {
            Ok(folder) => folder,
            Err(rejection) => return rejection.into(),
        };

        match panic::catch_unwind(AssertUnwindSafe(|| self.chain.run(&folder))) {
            Ok(result) => result,
            Err(payload) => {
                let reason = chain::panic_reason(payload.as_ref());
                error!(
                    "Chain panicked while opening '{}': {}",
                    folder_path, reason
                );
                OpenResult::error(format!("Failed to open folder: {}", reason))
            }
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::tests::{Exploding, Scripted};
    use crate::chain::{Outcome, Strategy};
    use crate::core::config::StrategiesConfig;
    use crate::core::result::ResultKind;
    use crate::platform::capabilities::Capability;
    use crate::platform::Platform;
    use std::sync::atomic::Ordering;
    use tempfile::{tempdir, NamedTempFile};

    fn plugin(strategies: Vec<Box<dyn Strategy>>) -> OpenFolderPlugin {
        let caps = Capabilities::new(Platform::Linux, [Capability::CommandLine]);
        OpenFolderPlugin::new(
            Chain::new(strategies, &caps, &StrategiesConfig::default()),
            "Linux test",
        )
    }

    /// Test that `fileNotFound` and non-directory rejections happen before any strategy runs.
    #[test]
    fn test_validation_precedes_strategies() {
        let scripted = Scripted::new("only", Outcome::Success("opened".into()));
        let calls = scripted.calls.clone();
        let plugin = plugin(vec![Box::new(scripted)]);

        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let result = plugin.open_folder(missing.to_str().unwrap());
        assert_eq!(result.kind, ResultKind::FileNotFound);

        let file = NamedTempFile::new().unwrap();
        let result = plugin.open_folder(file.path().to_str().unwrap());
        assert_eq!(result.kind, ResultKind::Error);

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    /// Test that a valid directory reaches the chain.
    #[test]
    fn test_valid_directory_runs_chain() {
        let plugin = plugin(vec![Box::new(Scripted::new(
            "only",
            Outcome::Success("opened".into()),
        ))]);
        let dir = tempdir().unwrap();
        assert_eq!(
            plugin.open_folder(dir.path().to_str().unwrap()),
            OpenResult::done("opened")
        );
    }

    /// Test that a strategy panic never escapes `open_folder`.
    #[test]
    fn test_panicking_strategy_is_contained() {
        let plugin = plugin(vec![Box::new(Exploding { last_resort: true })]);
        let dir = tempdir().unwrap();
        let result = plugin.open_folder(dir.path().to_str().unwrap());
        assert_eq!(
            result,
            OpenResult::error("Failed to open folder: handler crashed")
        );
    }

    /// Test that a panicking strategy early in the chain does not stop a later success.
    #[test]
    fn test_panicking_strategy_does_not_end_call() {
        let fallback = Scripted::new("fallback", Outcome::Success("opened".into()));
        let calls = fallback.calls.clone();
        let plugin = plugin(vec![
            Box::new(Exploding { last_resort: false }),
            Box::new(fallback),
        ]);
        let dir = tempdir().unwrap();

        assert_eq!(
            plugin.open_folder(dir.path().to_str().unwrap()),
            OpenResult::done("opened")
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    /// Test that the iOS system version gates the Files app strategy.
    #[test]
    fn test_ios_version_parsing_gates_files_app() {
        let phone = crate::platform::ios::tests::FakePhone::new(true, true, true);
        let modern = OpenFolderPlugin::ios(&Config::default(), "17.4", phone.clone());
        assert_eq!(modern.platform_version(), "iOS 17.4");
        assert_eq!(
            modern.chain().names(),
            vec!["shared-documents", "path-alert"]
        );

        let legacy = OpenFolderPlugin::ios(&Config::default(), "10.3.1", phone);
        assert_eq!(legacy.chain().names(), vec!["path-alert"]);
    }

    /// Test an Android plugin built from SDK level and release string.
    #[test]
    fn test_android_plugin_end_to_end() {
        let device = crate::platform::android::tests::FakeDevice::new(&[], true);
        let mut config = Config::default();
        config.android.external_storage_root = "/".to_string();
        let plugin = OpenFolderPlugin::android(&config, 34, "14", device.clone());
        assert_eq!(plugin.platform_version(), "Android 14");

        let dir = tempdir().unwrap();
        let result = plugin.open_folder(dir.path().to_str().unwrap());
        assert_eq!(result.kind, ResultKind::Done);
        assert_eq!(device.started().len(), 1);
    }
}
