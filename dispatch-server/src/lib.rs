//! HTTP service and command-line entry point for the dispatch engine.
//!
//! The `dispatch serve` command binds a listener and exposes the order queue
//! and route graph of [`dispatch_core`] over JSON endpoints. Each process owns
//! a single in-memory [`api::AppState`]; nothing survives a restart.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

pub mod api;
mod error;
mod serve;

pub use error::CliError;

use serve::ServeArgs;

const ARG_HOST: &str = "host";
const ARG_PORT: &str = "port";
const ENV_HOST: &str = "DISPATCH_CMDS_SERVE_HOST";

/// Run the dispatch CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments or configuration are invalid, when the
/// listener cannot be bound, or when the server stops abnormally.
pub async fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Serve(args) => serve::serve(args.into_config()?).await,
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "dispatch",
    about = "Order queue and delivery routing service",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the dispatch HTTP API.
    Serve(ServeArgs),
}

#[cfg(test)]
mod tests;
