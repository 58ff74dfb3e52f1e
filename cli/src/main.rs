//! # OpenFolder Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! The `open-folder` binary is a local stand-in for the platform bridge. It
//! handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration once and routing to the command handlers
//!
//! Logs go to stderr; stdout carries only command output, so
//! `open-folder open <path>` can be piped straight into a JSON parser.
//!
//! ## Examples
//!
//! ```bash
//! open-folder open ~/Downloads
//! open-folder -vv --config ./open-folder.toml open /tmp
//! open-folder call openFolder --args '{"folder_path": "/tmp"}'
//! open-folder strategies --capabilities
//! ```
//!
use clap::{Parser, Subcommand};
use open_folder::core::{config, error::OpenFolderError};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "open-folder",
    about = "Reveal a folder in the native file browser",
    long_about = "Reveal a folder in the host OS's native file browser and print a \
                  {\"type\", \"message\"} result, trying each platform strategy in turn.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Configuration file to use instead of the user and project files.
    #[arg(long, env = "OPEN_FOLDER_CONFIG", global = true)]
    config: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(alias = "o")]
    Open(commands::open::OpenArgs),
    Call(commands::call::CallArgs),
    Version(commands::version::VersionArgs),
    Strategies(commands::strategies::StrategiesArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match config::load_config(cli.config.as_deref()) {
        Ok(cfg) => match cli.command {
            Commands::Open(args) => commands::open::handle_open(args, cfg).await,
            Commands::Call(args) => commands::call::handle_call(args, cfg).await,
            Commands::Version(args) => commands::version::handle_version(args).await,
            Commands::Strategies(args) => commands::strategies::handle_strategies(args, cfg).await,
        },
        Err(e) => Err(e),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        let code = match e.downcast_ref::<OpenFolderError>() {
            Some(OpenFolderError::NotImplemented { .. }) => 2,
            _ => 1,
        };
        std::process::exit(code);
    }

    Ok(())
}
