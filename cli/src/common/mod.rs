//! # OpenFolder Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! Shared helpers used by more than one platform module.
//!
//! - **`process`**: Locating and running external programs for the desktop strategies.

/// Utilities for executing external processes and reading their exit status.
pub mod process;
