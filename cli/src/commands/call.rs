//! # `open-folder call`
//!
//! File: cli/src/commands/call.rs
//!
//! Dispatches a raw method call the way the platform bridge would:
//!
//! ```bash
//! open-folder call getPlatformVersion
//! open-folder call openFolder --args '{"folder_path": "/tmp"}'
//! ```
//!
//! String results are printed verbatim; other values as JSON. Unknown
//! methods fail with `not implemented: <method>`.
//!
use anyhow::Context;
use clap::Parser;
use open_folder::bridge::{handle_method_call, MethodCall, MethodResponse};
use open_folder::core::config::Config;
use open_folder::core::error::{OpenFolderError, Result};
use open_folder::OpenFolderPlugin;
use serde_json::Value;

/// Arguments for the 'call' subcommand.
#[derive(Parser, Debug)]
pub struct CallArgs {
    /// Method name, e.g. `openFolder`.
    pub method: String,
    /// Method arguments as a JSON value.
    #[arg(long, default_value = "null")]
    pub args: String,
}

pub async fn handle_call(args: CallArgs, config: Config) -> Result<()> {
    let arguments: Value = serde_json::from_str(&args.args)
        .with_context(|| format!("--args is not valid JSON: {}", args.args))?;
    let call = MethodCall::new(args.method, arguments);

    let response = tokio::task::spawn_blocking(move || {
        let plugin = OpenFolderPlugin::native(&config);
        let response = handle_method_call(&plugin, &call);
        (call.method, response)
    })
    .await
    .context("method call task did not complete")?;

    match response {
        (_, MethodResponse::Success(Value::String(text))) => println!("{}", text),
        (_, MethodResponse::Success(value)) => println!("{}", value),
        (method, MethodResponse::NotImplemented) => {
            return Err(OpenFolderError::NotImplemented { method }.into());
        }
    }
    Ok(())
}
