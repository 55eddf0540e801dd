//! Entry point for the `dispatch` binary.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use dispatch_server::CliError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dispatch_server=info,dispatch_core=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match dispatch_server::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(error) => {
            tracing::error!(%error, "dispatch failed");
            ExitCode::FAILURE
        }
    }
}
