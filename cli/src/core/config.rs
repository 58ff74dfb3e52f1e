//! # OpenFolder Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates the configuration that shapes the
//! fallback chains. Nothing here changes *how* a strategy works; it only
//! controls *which* candidates are tried and in what order:
//! - the ordered allowlist of Android file-manager packages,
//! - the ordered list of Linux launcher programs,
//! - the FileProvider roots used to build content:// URIs,
//! - strategy names to drop from every chain.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file (`--config` / `OPEN_FOLDER_CONFIG`), used on its own
//! 2. Project-specific `.open-folder.toml` in current directory or ancestors
//! 3. User-specific `<config dir>/open-folder/config.toml`
//! 4. Default values defined in the code
//!
//! Paths in launcher entries are expanded (`~` to home directory) and the
//! result is validated before any chain is built from it.
//!
//! ## Examples
//!
//! ```toml
//! [linux]
//! file_managers = ["xdg-open", "~/bin/my-fm"]
//!
//! [android]
//! file_managers = ["pl.solidexplorer2", "com.android.documentsui"]
//!
//! [strategies]
//! disabled = ["generic-view"]
//! ```
//!
use crate::core::error::{OpenFolderError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::collections::HashSet;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub android: AndroidConfig,
    #[serde(default)]
    pub linux: LinuxConfig,
    #[serde(default)]
    pub strategies: StrategiesConfig,
}

/// Candidate handlers and URI building parameters for Android.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AndroidConfig {
    /// Third-party file manager packages, tried in list order.
    #[serde(default = "default_android_file_managers")]
    pub file_managers: Vec<String>,
    /// Absolute path of the primary shared storage volume.
    #[serde(default = "default_external_storage_root")]
    pub external_storage_root: String,
    /// Appended to the application package name to form the provider authority.
    #[serde(default = "default_provider_authority_suffix")]
    pub provider_authority_suffix: String,
    /// Roots exposed by the application's FileProvider.
    #[serde(default = "default_provider_roots")]
    pub provider_roots: Vec<ProviderRoot>,
}

/// A single FileProvider root (`<external-path name="..." path="..."/>`).
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProviderRoot {
    /// URI segment identifying the root.
    pub name: String,
    /// Absolute directory the root maps to.
    pub path: String,
}

/// Launcher programs for Linux desktops.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LinuxConfig {
    /// Program names or paths (can use ~), tried in list order.
    #[serde(default = "default_linux_file_managers")]
    pub file_managers: Vec<String>,
}

/// Cross-platform strategy selection.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StrategiesConfig {
    /// Strategy names removed from every chain (see `open-folder strategies`).
    #[serde(default)]
    pub disabled: Vec<String>,
}

impl Default for AndroidConfig {
    fn default() -> Self {
        Self {
            file_managers: default_android_file_managers(),
            external_storage_root: default_external_storage_root(),
            provider_authority_suffix: default_provider_authority_suffix(),
            provider_roots: default_provider_roots(),
        }
    }
}

impl Default for LinuxConfig {
    fn default() -> Self {
        Self {
            file_managers: default_linux_file_managers(),
        }
    }
}

impl StrategiesConfig {
    pub fn is_disabled(&self, name: &str) -> bool {
        self.disabled.iter().any(|d| d == name)
    }
}

fn default_android_file_managers() -> Vec<String> {
    [
        "com.google.android.documentsui",
        "com.android.documentsui",
        "com.mi.android.globalFileexplorer",
        "com.estrongs.android.pop",
        "com.speedsoftware.explorer",
        "nextapp.fx",
        "com.ghisler.android.TotalCommander",
        "com.alphainventor.filemanager",
        "pl.solidexplorer2",
        "com.lonelycatgames.Xplore",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
fn default_external_storage_root() -> String {
    "/storage/emulated/0".to_string()
}
fn default_provider_authority_suffix() -> String {
    ".fileprovider".to_string()
}
fn default_provider_roots() -> Vec<ProviderRoot> {
    vec![ProviderRoot {
        name: "external".to_string(),
        path: default_external_storage_root(),
    }]
}
fn default_linux_file_managers() -> Vec<String> {
    [
        "xdg-open", "nautilus", "dolphin", "thunar", "pcmanfm", "caja",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

const PROJECT_CONFIG_FILENAME: &str = ".open-folder.toml";

/// Loads the effective configuration.
///
/// When `explicit` is given, only that file is read (on top of defaults).
/// Otherwise the user and project files are merged.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let mut config = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(path)?
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    expand_config_paths(&mut config).context("Failed to expand paths in configuration")?;
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "open-folder") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.open-folder.toml) found.");
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root looking for a project file.
/// The search stops at the first directory that contains `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path: &Path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the built-in defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let defaults = Config::default();
    let mut merged = Config::default();

    merged.android.file_managers =
        if project_cfg.android.file_managers != defaults.android.file_managers {
            project_cfg.android.file_managers
        } else {
            user.android.file_managers
        };
    merged.android.external_storage_root =
        if project_cfg.android.external_storage_root != defaults.android.external_storage_root {
            project_cfg.android.external_storage_root
        } else {
            user.android.external_storage_root
        };
    merged.android.provider_authority_suffix = if project_cfg.android.provider_authority_suffix
        != defaults.android.provider_authority_suffix
    {
        project_cfg.android.provider_authority_suffix
    } else {
        user.android.provider_authority_suffix
    };
    merged.android.provider_roots =
        if project_cfg.android.provider_roots != defaults.android.provider_roots {
            project_cfg.android.provider_roots
        } else {
            user.android.provider_roots
        };
    merged.linux.file_managers = if project_cfg.linux.file_managers != defaults.linux.file_managers
    {
        project_cfg.linux.file_managers
    } else {
        user.linux.file_managers
    };
    merged.strategies.disabled = if !project_cfg.strategies.disabled.is_empty() {
        project_cfg.strategies.disabled
    } else {
        user.strategies.disabled
    };
    merged
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    debug!("Expanding paths in configuration...");
    for program in &mut config.linux.file_managers {
        if program.starts_with('~') {
            *program = shellexpand::tilde(program.as_str()).into_owned();
            debug!("Expanded launcher path: {}", program);
        }
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    check_allowlist("android.file_managers", &config.android.file_managers)?;
    check_allowlist("linux.file_managers", &config.linux.file_managers)?;

    if !config.android.external_storage_root.starts_with('/') {
        return Err(anyhow!(OpenFolderError::Config(format!(
            "android.external_storage_root must be absolute, got '{}'.",
            config.android.external_storage_root
        ))));
    }
    for root in &config.android.provider_roots {
        if root.name.is_empty() || root.name.contains('/') {
            return Err(anyhow!(OpenFolderError::Config(format!(
                "Provider root name '{}' must be a non-empty single path segment.",
                root.name
            ))));
        }
        if !root.path.starts_with('/') {
            return Err(anyhow!(OpenFolderError::Config(format!(
                "Provider root '{}' must map to an absolute path, got '{}'.",
                root.name, root.path
            ))));
        }
    }
    Ok(())
}

fn check_allowlist(field: &str, entries: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for entry in entries {
        if entry.trim().is_empty() {
            return Err(anyhow!(OpenFolderError::Config(format!(
                "{} cannot contain an empty entry.",
                field
            ))));
        }
        if !seen.insert(entry.as_str()) {
            return Err(anyhow!(OpenFolderError::Config(format!(
                "{} lists '{}' more than once.",
                field, entry
            ))));
        }
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Test deserializing a configuration that sets every section.
    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [linux]
            file_managers = ["nautilus", "xdg-open"]

            [android]
            file_managers = ["pl.solidexplorer2"]

            [[android.provider_roots]]
            name = "downloads"
            path = "/storage/emulated/0/Download"

            [strategies]
            disabled = ["generic-view"]
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.linux.file_managers, vec!["nautilus", "xdg-open"]);
        assert_eq!(config.android.file_managers, vec!["pl.solidexplorer2"]);
        assert_eq!(config.android.provider_roots.len(), 1);
        assert_eq!(config.android.provider_roots[0].name, "downloads");
        // Defaults
        assert_eq!(config.android.external_storage_root, "/storage/emulated/0");
        assert_eq!(config.android.provider_authority_suffix, ".fileprovider");
        assert!(config.strategies.is_disabled("generic-view"));
        assert!(!config.strategies.is_disabled("file-provider"));
    }

    /// Test that an empty file gives the built-in defaults.
    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.linux.file_managers[0], "xdg-open");
        assert_eq!(config.android.file_managers.len(), 10);
        assert_eq!(
            config.android.file_managers[0],
            "com.google.android.documentsui"
        );
    }

    /// Test that misspelled keys are rejected instead of silently ignored.
    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[linux]\nlaunchers = []\n");
        assert!(result.is_err());
    }

    /// Test `~` expansion in Linux launcher entries.
    #[test]
    fn test_path_expansion() {
        let mut config = Config::default();
        config.linux.file_managers = vec!["~/bin/fm".to_string(), "xdg-open".to_string()];

        expand_config_paths(&mut config).unwrap();

        let home_dir = dirs::home_dir().unwrap();
        assert_eq!(
            config.linux.file_managers[0],
            home_dir.join("bin/fm").to_string_lossy()
        );
        assert_eq!(config.linux.file_managers[1], "xdg-open");
    }

    /// Test that project settings win over user settings where they differ from defaults.
    #[test]
    fn test_merge_project_overrides_user() {
        let mut user = Config::default();
        user.linux.file_managers = vec!["thunar".to_string()];
        user.strategies.disabled = vec!["shell-open".to_string()];

        let mut project = Config::default();
        project.android.file_managers = vec!["nextapp.fx".to_string()];

        let merged = merge_configs(user, Some(project));
        assert_eq!(merged.linux.file_managers, vec!["thunar"]);
        assert_eq!(merged.android.file_managers, vec!["nextapp.fx"]);
        assert_eq!(merged.strategies.disabled, vec!["shell-open"]);
    }

    /// Test that empty and duplicate allowlist entries fail validation.
    #[test]
    fn test_validation_rejects_duplicates_and_blanks() {
        let mut config = Config::default();
        config.linux.file_managers = vec!["caja".to_string(), "caja".to_string()];
        let err = validate_config(&config).unwrap_err();
        assert!(format!("{:?}", err).contains("more than once"));

        config.linux.file_managers = vec!["  ".to_string()];
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_rejects_relative_provider_root() {
        let mut config = Config::default();
        config.android.provider_roots = vec![ProviderRoot {
            name: "files".to_string(),
            path: "relative/dir".to_string(),
        }];
        assert!(validate_config(&config).is_err());
    }

    /// Test loading an explicit configuration file.
    #[test]
    fn test_load_explicit_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("open-folder.toml");
        fs::write(&path, "[linux]\nfile_managers = [\"true\"]\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.linux.file_managers, vec!["true"]);
        assert_eq!(config.android, AndroidConfig::default());
    }

    /// Test that a missing explicit configuration file is an error.
    #[test]
    fn test_load_explicit_file_missing() {
        let dir = tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("absent.toml"))).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Failed to read configuration file"));
    }

    /// Test that the project file search stops at the repository root.
    #[test]
    fn test_find_project_config_stops_at_git() {
        let root = tempdir().unwrap();
        fs::write(root.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();
        let repo = root.path().join("repo");
        let nested = repo.join("a/b");
        fs::create_dir_all(&nested).unwrap();
        fs::create_dir(repo.join(".git")).unwrap();

        assert_eq!(find_project_config_path(&nested), None);

        fs::write(repo.join("a").join(PROJECT_CONFIG_FILENAME), "").unwrap();
        assert_eq!(
            find_project_config_path(&nested),
            Some(repo.join("a").join(PROJECT_CONFIG_FILENAME))
        );
    }
}
