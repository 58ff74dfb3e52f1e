//! # `open-folder version`
//!
//! File: cli/src/commands/version.rs
//!
//! Prints the `getPlatformVersion` string of the running desktop.
//!
use clap::Parser;
use open_folder::core::error::Result;
use open_folder::platform::version;

/// Arguments for the 'version' subcommand.
#[derive(Parser, Debug)]
pub struct VersionArgs {}

pub async fn handle_version(_args: VersionArgs) -> Result<()> {
    println!("{}", version::desktop());
    Ok(())
}
