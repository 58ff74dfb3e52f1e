//! # OpenFolder Result Payloads
//!
//! File: cli/src/core/result.rs
//!
//! ## Overview
//!
//! Every `openFolder` call ends in exactly one `OpenResult`: a kind plus a
//! human-readable message. This module defines that type and the Result
//! Encoder that turns it into the JSON string handed back across the bridge:
//!
//! ```json
//! {"type":"fileNotFound","message":"Folder does not exist: /tmp/nope"}
//! ```
//!
//! Encoding never fails from the caller's point of view. If serialization
//! itself goes wrong, `FALLBACK_JSON` is returned instead.
//!
use crate::core::error::OpenFolderError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Payload returned when a result cannot be serialized.
pub const FALLBACK_JSON: &str = r#"{"type":"error","message":"Failed to serialize result"}"#;

/// Message for calls that arrive without a usable `folder_path` argument.
pub const MISSING_PATH_MESSAGE: &str = "Folder path is required";

/// Message for calls whose arguments are not a map at all.
pub const INVALID_ARGUMENTS_MESSAGE: &str = "Invalid arguments";

/// Message for chains that ran out of strategies.
pub const NO_APP_MESSAGE: &str = "No application available to open folders on this device";

/// The terminal outcome category of an `openFolder` call.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ResultKind {
    Done,
    FileNotFound,
    NoAppToOpen,
    Error,
}

impl ResultKind {
    /// Wire name of the kind, as it appears in the `type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            ResultKind::Done => "done",
            ResultKind::FileNotFound => "fileNotFound",
            ResultKind::NoAppToOpen => "noAppToOpen",
            ResultKind::Error => "error",
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single `openFolder` call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OpenResult {
    #[serde(rename = "type")]
    pub kind: ResultKind,
    pub message: String,
}

impl OpenResult {
    pub fn new(kind: ResultKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn done(message: impl Into<String>) -> Self {
        Self::new(ResultKind::Done, message)
    }

    pub fn file_not_found(message: impl Into<String>) -> Self {
        Self::new(ResultKind::FileNotFound, message)
    }

    pub fn no_app_to_open() -> Self {
        Self::new(ResultKind::NoAppToOpen, NO_APP_MESSAGE)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ResultKind::Error, message)
    }

    pub fn missing_path() -> Self {
        Self::error(MISSING_PATH_MESSAGE)
    }

    /// Serializes the result, surfacing the serializer error.
    pub fn try_to_json(&self) -> Result<String, OpenFolderError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the result for the bridge. Always yields a well-formed payload.
    pub fn to_json(&self) -> String {
        encode_or_fallback(self)
    }
}

/// Result Encoder: JSON for `value`, or `FALLBACK_JSON` if serialization fails.
pub(crate) fn encode_or_fallback<T: Serialize>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!(
                "Falling back to fixed error payload: {}",
                OpenFolderError::from(e)
            );
            FALLBACK_JSON.to_string()
        }
    }
}
