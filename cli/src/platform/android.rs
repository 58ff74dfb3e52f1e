//! # Android Strategies
//!
//! File: cli/src/platform/android.rs
//!
//! ## Overview
//!
//! Android has no "reveal" call, so folders are surfaced by dispatching VIEW
//! intents and letting the system pick a handler. The strategies differ in
//! how the folder is addressed and who is asked to handle it:
//!
//! 1. `document-tree`: a DocumentsContract document URI on the primary
//!    external storage volume, handled by the system Files UI (API 26+).
//! 2. `file-provider`: a content:// URI minted from the app's own
//!    FileProvider roots, with a read grant.
//! 3. `file-manager:<package>`: the same intent addressed to each known file
//!    manager in turn. A package that is not installed is skipped.
//! 4. `generic-view`: an unscoped `resource/folder` intent, only dispatched
//!    when the package manager reports at least one handler.
//!
//! ## Host
//!
//! Intent dispatch lives in the embedding application. It implements
//! `AndroidHost` and is responsible for running `start_activity` on the main
//! thread. Everything in this module is plain value construction plus the
//! outcome mapping, so it runs and tests the same on any target.
//!
use crate::chain::{Chain, Folder, Outcome, Strategy};
use crate::core::config::{AndroidConfig, Config, ProviderRoot};
use crate::core::error::OpenFolderError;
use crate::platform::capabilities::{Capabilities, Capability};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const ACTION_VIEW: &str = "android.intent.action.VIEW";
pub const CATEGORY_DEFAULT: &str = "android.intent.category.DEFAULT";
/// `DocumentsContract.Document.MIME_TYPE_DIR`
pub const MIME_TYPE_DIR: &str = "vnd.android.document/directory";
pub const MIME_TYPE_FOLDER: &str = "resource/folder";
pub const EXTERNAL_STORAGE_AUTHORITY: &str = "com.android.externalstorage.documents";
/// Document id prefix of the primary shared storage volume.
pub const PRIMARY_VOLUME: &str = "primary";

/// Intent flags used by the strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentFlag {
    /// `FLAG_ACTIVITY_NEW_TASK`, required when starting from a non-activity context.
    NewTask,
    /// `FLAG_GRANT_READ_URI_PERMISSION`
    GrantReadUriPermission,
}

/// A VIEW intent, described as plain data for the host to materialize.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Intent {
    pub action: String,
    pub data: Option<String>,
    pub mime_type: Option<String>,
    pub package: Option<String>,
    pub flags: Vec<IntentFlag>,
    pub categories: Vec<String>,
}

impl Intent {
    pub fn view() -> Self {
        Self {
            action: ACTION_VIEW.to_string(),
            ..Default::default()
        }
    }

    pub fn data(mut self, uri: impl Into<String>) -> Self {
        self.data = Some(uri.into());
        self
    }

    pub fn mime_type(mut self, mime: impl Into<String>) -> Self {
        self.mime_type = Some(mime.into());
        self
    }

    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn flag(mut self, flag: IntentFlag) -> Self {
        if !self.flags.contains(&flag) {
            self.flags.push(flag);
        }
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }
}

/// Services the embedding Android application provides.
pub trait AndroidHost: Send + Sync {
    /// Package name of the embedding application.
    fn package_name(&self) -> String;

    /// `Context.startActivity`. Must report a missing handler as
    /// `OpenFolderError::ActivityNotFound`.
    fn start_activity(&self, intent: &Intent) -> Result<(), OpenFolderError>;

    /// Number of activities `PackageManager.queryIntentActivities` resolves.
    fn query_activities(&self, intent: &Intent) -> usize;
}

/// Path of `folder` relative to `root`, without a leading slash.
/// `None` when the folder lies outside `root`.
pub fn relative_to(folder: &Path, root: &Path) -> Option<String> {
    folder
        .strip_prefix(root)
        .ok()
        .map(|rel| rel.to_string_lossy().trim_start_matches('/').to_string())
}

/// `DocumentsContract.buildDocumentUri` for the external storage provider.
pub fn document_uri(relative_path: &str) -> String {
    let document_id = format!("{}:{}", PRIMARY_VOLUME, relative_path);
    format!(
        "content://{}/document/{}",
        EXTERNAL_STORAGE_AUTHORITY,
        urlencoding::encode(&document_id)
    )
}

/// `Uri.fromFile`: a file:// URI with each path segment percent-encoded.
pub fn file_uri(path: &Path) -> String {
    let text = path.to_string_lossy();
    let encoded: Vec<String> = text
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect();
    format!("file://{}", encoded.join("/"))
}

/// `FileProvider.getUriForFile`: picks the most specific root containing `path`.
pub fn provider_uri(
    authority: &str,
    roots: &[ProviderRoot],
    path: &Path,
) -> Result<String, OpenFolderError> {
    let (root, relative) = roots
        .iter()
        .filter_map(|root| Some((root, relative_to(path, Path::new(&root.path))?)))
        .max_by_key(|(root, _)| root.path.len())
        .ok_or_else(|| OpenFolderError::OutsideProviderRoots {
            path: path.display().to_string(),
        })?;

    let encoded: Vec<String> = relative
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect();
    Ok(format!(
        "content://{}/{}/{}",
        authority,
        urlencoding::encode(&root.name),
        encoded.join("/")
    ))
}

fn dispatch(host: &dyn AndroidHost, intent: &Intent, message: String) -> Outcome {
    match host.start_activity(intent) {
        Ok(()) => Outcome::Success(message),
        Err(OpenFolderError::ActivityNotFound) => Outcome::NotAvailable,
        Err(e) => Outcome::Failed(e.to_string()),
    }
}

/// VIEW on the folder's document URI, handled by the system Files UI.
pub struct DocumentTree {
    host: Arc<dyn AndroidHost>,
    storage_root: PathBuf,
}

impl Strategy for DocumentTree {
    fn name(&self) -> &str {
        "document-tree"
    }

    fn requires(&self) -> Capability {
        Capability::DocumentTreeUri
    }

    fn attempt(&self, folder: &Folder) -> Outcome {
        let Some(relative) = relative_to(folder.absolute(), &self.storage_root) else {
            return Outcome::Failed(format!(
                "{} is outside {}",
                folder.absolute_str(),
                self.storage_root.display()
            ));
        };
        let intent = Intent::view()
            .data(document_uri(&relative))
            .mime_type(MIME_TYPE_DIR)
            .flag(IntentFlag::NewTask)
            .flag(IntentFlag::GrantReadUriPermission);
        dispatch(
            self.host.as_ref(),
            &intent,
            format!("Folder opened: {}", folder.absolute_str()),
        )
    }
}

/// VIEW on a content:// URI from the embedding app's FileProvider.
pub struct FileProvider {
    host: Arc<dyn AndroidHost>,
    authority_suffix: String,
    roots: Vec<ProviderRoot>,
}

impl Strategy for FileProvider {
    fn name(&self) -> &str {
        "file-provider"
    }

    fn requires(&self) -> Capability {
        Capability::ContentProvider
    }

    fn attempt(&self, folder: &Folder) -> Outcome {
        let authority = format!("{}{}", self.host.package_name(), self.authority_suffix);
        let uri = match provider_uri(&authority, &self.roots, folder.absolute()) {
            Ok(uri) => uri,
            Err(e) => return Outcome::Failed(e.to_string()),
        };
        let intent = Intent::view()
            .data(uri)
            .mime_type(MIME_TYPE_DIR)
            .flag(IntentFlag::NewTask)
            .flag(IntentFlag::GrantReadUriPermission);
        dispatch(
            self.host.as_ref(),
            &intent,
            format!("Folder opened with FileProvider: {}", folder.absolute_str()),
        )
    }
}

/// VIEW addressed to one specific file manager package.
pub struct FileManager {
    host: Arc<dyn AndroidHost>,
    package: String,
    name: String,
    storage_root: PathBuf,
}

impl FileManager {
    /// DocumentsUI understands document URIs; everything else gets a file:// URI.
    fn intent_for(&self, folder: &Folder) -> Option<Intent> {
        let intent = if self.package.contains("documentsui") {
            let relative = relative_to(folder.absolute(), &self.storage_root)?;
            Intent::view()
                .data(document_uri(&relative))
                .mime_type(MIME_TYPE_DIR)
                .flag(IntentFlag::GrantReadUriPermission)
        } else {
            Intent::view().data(file_uri(folder.absolute()))
        };
        let intent = intent.package(self.package.as_str());
        Some(intent.flag(IntentFlag::NewTask))
    }
}

impl Strategy for FileManager {
    fn name(&self) -> &str {
        &self.name
    }

    fn requires(&self) -> Capability {
        Capability::PackageTargeting
    }

    fn attempt(&self, folder: &Folder) -> Outcome {
        let Some(intent) = self.intent_for(folder) else {
            return Outcome::Failed(format!(
                "{} cannot address {}",
                self.package,
                folder.absolute_str()
            ));
        };
        dispatch(
            self.host.as_ref(),
            &intent,
            format!(
                "Folder opened with {}: {}",
                self.package,
                folder.absolute_str()
            ),
        )
    }
}

/// Unscoped `resource/folder` VIEW, only sent when something can handle it.
pub struct GenericView {
    host: Arc<dyn AndroidHost>,
}

impl Strategy for GenericView {
    fn name(&self) -> &str {
        "generic-view"
    }

    fn requires(&self) -> Capability {
        Capability::GenericView
    }

    fn attempt(&self, folder: &Folder) -> Outcome {
        let intent = Intent::view()
            .data(file_uri(folder.absolute()))
            .mime_type(MIME_TYPE_FOLDER)
            .flag(IntentFlag::NewTask)
            .category(CATEGORY_DEFAULT);
        if self.host.query_activities(&intent) == 0 {
            return Outcome::NotAvailable;
        }
        dispatch(
            self.host.as_ref(),
            &intent,
            format!("Folder opened: {}", folder.absolute_str()),
        )
    }
}

/// All Android strategies in priority order, before capability filtering.
pub fn strategies(config: &AndroidConfig, host: Arc<dyn AndroidHost>) -> Vec<Box<dyn Strategy>> {
    let storage_root = PathBuf::from(&config.external_storage_root);
    let mut strategies: Vec<Box<dyn Strategy>> = vec![
        Box::new(DocumentTree {
            host: host.clone(),
            storage_root: storage_root.clone(),
        }),
        Box::new(FileProvider {
            host: host.clone(),
            authority_suffix: config.provider_authority_suffix.clone(),
            roots: config.provider_roots.clone(),
        }),
    ];
    for package in &config.file_managers {
        strategies.push(Box::new(FileManager {
            host: host.clone(),
            package: package.clone(),
            name: format!("file-manager:{}", package),
            storage_root: storage_root.clone(),
        }));
    }
    strategies.push(Box::new(GenericView { host }));
    strategies
}

pub fn build_chain(
    config: &Config,
    capabilities: &Capabilities,
    host: Arc<dyn AndroidHost>,
) -> Chain {
    Chain::new(
        strategies(&config.android, host),
        capabilities,
        &config.strategies,
    )
}
