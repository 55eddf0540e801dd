//! Error types emitted by the dispatch server process.
//!
//! Keep this error type reasonably small, as the command helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::net::{AddrParseError, SocketAddr};
use std::sync::Arc;

use thiserror::Error;

/// Errors emitted while configuring or running the dispatch server.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// The configured host is not an IP address.
    #[error("invalid listen host {host:?} (set --{field} or {env}): {source}")]
    InvalidListenAddress {
        /// Host value after configuration merging.
        host: String,
        /// Flag naming the host option.
        field: &'static str,
        /// Environment variable naming the host option.
        env: &'static str,
        /// Parse failure reported by the standard library.
        #[source]
        source: AddrParseError,
    },
    /// Binding the listening socket failed.
    #[error("failed to bind {address}: {source}")]
    Bind {
        /// Address the server tried to bind.
        address: SocketAddr,
        /// Underlying socket error.
        #[source]
        source: std::io::Error,
    },
    /// The server stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
