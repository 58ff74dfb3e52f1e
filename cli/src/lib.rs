//! # open_folder
//!
//! File: cli/src/lib.rs
//!
//! Reveals a folder in the host operating system's native file browser
//! (Finder, Explorer, the Android Files UI, ...) and reports the outcome as
//! a small structured result.
//!
//! ## Architecture
//!
//! - `chain`: the Validator, the `Strategy` trait and the fallback `Chain`
//! - `platform`: per-platform strategies, capability flags, version strings
//! - `plugin`: `OpenFolderPlugin`, one chain plus the platform version
//! - `bridge`: method-call dispatch (`getPlatformVersion`, `openFolder`)
//! - `core`: configuration, errors, and the `OpenResult` encoder
//! - `common`: process helpers for the desktop strategies
//!
//! ## Example
//!
//! ```rust,no_run
//! use open_folder::bridge::{handle_method_call, MethodCall, MethodResponse};
//! use open_folder::core::config::Config;
//! use open_folder::plugin::OpenFolderPlugin;
//!
//! let plugin = OpenFolderPlugin::native(&Config::default());
//! let call = MethodCall::new("openFolder", serde_json::json!({ "folder_path": "/tmp" }));
//! if let MethodResponse::Success(payload) = handle_method_call(&plugin, &call) {
//!     println!("{}", payload);
//! }
//! ```

pub mod bridge;
pub mod chain;
pub mod common;
pub mod core;
pub mod platform;
pub mod plugin;

pub use crate::core::result::{OpenResult, ResultKind};
pub use plugin::OpenFolderPlugin;
