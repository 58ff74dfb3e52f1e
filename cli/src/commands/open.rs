//! # `open-folder open`
//!
//! File: cli/src/commands/open.rs
//!
//! Runs `openFolder` on a path and prints the JSON payload on stdout. The
//! process exits 0 whatever the result kind is; callers inspect `type`.
//!
use anyhow::Context;
use clap::Parser;
use open_folder::core::config::Config;
use open_folder::core::error::Result;
use open_folder::OpenFolderPlugin;

/// Arguments for the 'open' subcommand.
#[derive(Parser, Debug)]
pub struct OpenArgs {
    /// Folder to reveal in the native file browser.
    pub path: String,
}

pub async fn handle_open(args: OpenArgs, config: Config) -> Result<()> {
    tracing::info!("Opening folder: {}", args.path);
    let payload = tokio::task::spawn_blocking(move || {
        let plugin = OpenFolderPlugin::native(&config);
        plugin.open_folder(&args.path).to_json()
    })
    .await
    .context("openFolder task did not complete")?;
    println!("{}", payload);
    Ok(())
}
