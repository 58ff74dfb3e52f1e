//! # OpenFolder Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! Subcommands of the `open-folder` binary. Each one is a thin wrapper over
//! the library: it builds the native plugin from the loaded configuration,
//! runs it on tokio's blocking pool and prints the outcome.

/// Reveal a folder and print the OpenResult JSON.
pub mod open;
/// Dispatch a raw bridge method call.
pub mod call;
/// Print the platform version string.
pub mod version;
/// List the active fallback chain.
pub mod strategies;
