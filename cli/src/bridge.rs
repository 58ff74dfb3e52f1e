//! # Method-Call Dispatch
//!
//! File: cli/src/bridge.rs
//!
//! The platform bridge delivers a method name plus a map of arguments and
//! expects either a success value or a "not implemented" marker back. This
//! module is the plugin's side of that exchange:
//!
//! | method               | success value                                  |
//! |----------------------|------------------------------------------------|
//! | `getPlatformVersion` | OS name and version, e.g. `"macOS 14.4"`       |
//! | `openFolder`         | JSON string `{"type": ..., "message": ...}`    |
//!
//! Argument problems never surface as bridge errors; they are encoded as an
//! `error` result like any other failure.
//!
use crate::core::result::{OpenResult, INVALID_ARGUMENTS_MESSAGE};
use crate::plugin::OpenFolderPlugin;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Channel name the plugin registers under.
pub const CHANNEL: &str = "open_folder";
pub const GET_PLATFORM_VERSION: &str = "getPlatformVersion";
pub const OPEN_FOLDER: &str = "openFolder";
pub const FOLDER_PATH_ARG: &str = "folder_path";

/// An incoming call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }
}

/// What the plugin hands back to the bridge.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodResponse {
    Success(Value),
    NotImplemented,
}

/// Routes `call` to the plugin.
pub fn handle_method_call(plugin: &OpenFolderPlugin, call: &MethodCall) -> MethodResponse {
    tracing::debug!("Method call: {}", call.method);
    match call.method.as_str() {
        GET_PLATFORM_VERSION => {
            MethodResponse::Success(Value::String(plugin.platform_version().to_string()))
        }
        OPEN_FOLDER => {
            let result = match folder_path_argument(&call.arguments) {
                Ok(path) => plugin.open_folder(path),
                Err(result) => result,
            };
            MethodResponse::Success(Value::String(result.to_json()))
        }
        other => {
            tracing::warn!("Method '{}' is not implemented", other);
            MethodResponse::NotImplemented
        }
    }
}

/// Extracts `folder_path` from the argument map.
fn folder_path_argument(arguments: &Value) -> Result<&str, OpenResult> {
    match arguments {
        Value::Object(map) => map
            .get(FOLDER_PATH_ARG)
            .and_then(Value::as_str)
            .ok_or_else(OpenResult::missing_path),
        Value::Null => Err(OpenResult::missing_path()),
        _ => Err(OpenResult::error(INVALID_ARGUMENTS_MESSAGE)),
    }
}
