//! # `open-folder strategies`
//!
//! File: cli/src/commands/strategies.rs
//!
//! Lists the active chain for this desktop, in attempt order, after
//! capability filtering and `strategies.disabled` have been applied. The
//! printed names are the ones accepted by `strategies.disabled`.
//!
use clap::Parser;
use open_folder::core::config::Config;
use open_folder::core::error::Result;
use open_folder::platform::{self, capabilities::Capabilities};

/// Arguments for the 'strategies' subcommand.
#[derive(Parser, Debug)]
pub struct StrategiesArgs {
    /// Also print the detected capability flags.
    #[arg(long)]
    pub capabilities: bool,
}

pub async fn handle_strategies(args: StrategiesArgs, config: Config) -> Result<()> {
    let caps = Capabilities::detect();
    let chain = platform::native_chain(&config, &caps);

    println!("Platform: {}", caps.platform());
    if args.capabilities {
        for capability in caps.iter() {
            println!("  capability: {:?}", capability);
        }
    }
    for (index, name) in chain.names().iter().enumerate() {
        println!("{}. {}", index + 1, name);
    }
    if chain.is_empty() {
        println!("(no strategies enabled)");
    }
    Ok(())
}
