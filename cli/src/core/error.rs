//! # OpenFolder Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used by the plumbing around the
//! fallback chain: configuration loading, process spawning, intent dispatch and
//! payload serialization.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `OpenFolderError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! None of these errors ever reach the caller of `openFolder`. Strategies map
//! them into an `Outcome`, and the plugin maps outcomes into an `OpenResult`.
//! They exist so that the internals can use `?` and `.context(...)` the usual way.
//!
//! ## Examples
//!
//! ```rust,ignore
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//!
//! if status.code() != Some(0) {
//!     return Err(OpenFolderError::ExitStatus { program, code: status.code() }.into());
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the open-folder plugin.
#[derive(Error, Debug)]
pub enum OpenFolderError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Program '{program}' was not found on PATH")]
    ProgramNotFound { program: String },

    #[error("Failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Process exited with code {}", display_code(.code))]
    ExitStatus { program: String, code: Option<i32> },

    #[error("No activity found to handle the intent")]
    ActivityNotFound,

    #[error("Action dispatch failed: {0}")]
    Dispatch(String),

    #[error("Path '{path}' is not covered by any provider root")]
    OutsideProviderRoots { path: String },

    #[error("not implemented: {method}")]
    NotImplemented { method: String },

    #[error("Failed to serialize result: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => c.to_string(),
        None => "unknown".to_string(),
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
