//! The `serve` subcommand: configuration layering and the listener loop.

use std::net::{IpAddr, SocketAddr};

use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, signal};

use crate::api::{AppState, router};
use crate::{ARG_HOST, ARG_PORT, CliError, ENV_HOST};

/// Interface bound when no host is configured.
pub(crate) const DEFAULT_HOST: &str = "0.0.0.0";
/// Port bound when no port is configured.
pub(crate) const DEFAULT_PORT: u16 = 3000;

/// CLI arguments for the `serve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Serve the order queue and route graph over HTTP. The listen \
                 address can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Run the dispatch HTTP service"
)]
#[ortho_config(prefix = "DISPATCH")]
pub(crate) struct ServeArgs {
    /// Interface address to listen on.
    #[arg(long = ARG_HOST, value_name = "addr")]
    #[serde(default)]
    pub(crate) host: Option<String>,
    /// TCP port to listen on.
    #[arg(long = ARG_PORT, value_name = "port")]
    #[serde(default)]
    pub(crate) port: Option<u16>,
}

impl ServeArgs {
    pub(crate) fn into_config(self) -> Result<ServeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ServeConfig::try_from(merged)
    }
}

/// Resolved `serve` command configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ServeConfig {
    /// Socket address the listener binds.
    pub(crate) listen: SocketAddr,
}

impl TryFrom<ServeArgs> for ServeConfig {
    type Error = CliError;

    fn try_from(args: ServeArgs) -> Result<Self, Self::Error> {
        let host = args.host.unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let ip: IpAddr = host
            .parse()
            .map_err(|source| CliError::InvalidListenAddress {
                host: host.clone(),
                field: ARG_HOST,
                env: ENV_HOST,
                source,
            })?;
        Ok(Self {
            listen: SocketAddr::new(ip, args.port.unwrap_or(DEFAULT_PORT)),
        })
    }
}

/// Bind the configured address and serve requests until shutdown.
pub(crate) async fn serve(config: ServeConfig) -> Result<(), CliError> {
    let listener = TcpListener::bind(config.listen)
        .await
        .map_err(|source| CliError::Bind {
            address: config.listen,
            source,
        })?;

    match listener.local_addr() {
        Ok(address) => tracing::info!(%address, "dispatch server listening"),
        Err(error) => tracing::warn!(%error, "could not determine local address"),
    }

    axum::serve(listener, router(AppState::default()))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(CliError::Serve)?;

    tracing::info!("server shutdown complete");
    Ok(())
}

/// Resolves once the process receives Ctrl-C.
///
/// A failure to install the handler leaves the server running until it is
/// killed.
async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => tracing::info!("received Ctrl-C, shutting down"),
        Err(error) => {
            tracing::warn!(%error, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ServeConfig, CliError> {
    let merged = ServeArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ServeConfig::try_from(merged)
}
