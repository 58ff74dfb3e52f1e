//! # Folder Path Validation
//!
//! File: cli/src/chain/validate.rs
//!
//! The Validator runs once per call, before any strategy. It checks, in
//! order, that the path exists and that it is a directory. Symlinks are
//! followed, so a link to a directory is accepted.
//!
use crate::core::result::OpenResult;
use std::fs;
use std::path::{Path, PathBuf};

/// A folder that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    requested: String,
    absolute: PathBuf,
}

impl Folder {
    /// The path exactly as the caller supplied it.
    pub fn requested(&self) -> &str {
        &self.requested
    }

    /// Absolute form of the path, resolved against the working directory.
    pub fn absolute(&self) -> &Path {
        &self.absolute
    }

    /// Absolute path as text, for URIs and messages.
    pub fn absolute_str(&self) -> String {
        self.absolute.to_string_lossy().into_owned()
    }
}

/// Why a path was refused before the chain ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    NotFound(String),
    NotADirectory(String),
}

impl From<Rejection> for OpenResult {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::NotFound(path) => {
                OpenResult::file_not_found(format!("Folder does not exist: {}", path))
            }
            Rejection::NotADirectory(path) => {
                OpenResult::error(format!("Path is not a directory: {}", path))
            }
        }
    }
}

/// Checks that `folder_path` names an existing directory.
pub fn validate(folder_path: &str) -> Result<Folder, Rejection> {
    let path = Path::new(folder_path);
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) => {
            tracing::debug!("stat failed for '{}': {}", folder_path, e);
            return Err(Rejection::NotFound(folder_path.to_string()));
        }
    };
    if !metadata.is_dir() {
        return Err(Rejection::NotADirectory(folder_path.to_string()));
    }

    let absolute = match std::path::absolute(path) {
        Ok(absolute) => absolute,
        Err(_) => path.to_path_buf(),
    };
    Ok(Folder {
        requested: folder_path.to_string(),
        absolute,
    })
}

#[cfg(test)]
pub(crate) fn folder_for_tests(path: &str) -> Folder {
    Folder {
        requested: path.to_string(),
        absolute: PathBuf::from(path),
    }
}
