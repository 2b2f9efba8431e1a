//! HTTP server command
//!
//! Runs the person endpoint with the stub provider.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use personctl_server::{run_server, Logger, ServerConfig, StaticProvider, Wiring};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// How the handler's logger and provider are wired into the route
    #[arg(long, short = 'w', value_enum, default_value_t = Wiring::Method)]
    pub wiring: Wiring,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            bind_addr: args.bind,
            wiring: args.wiring,
            timeout_secs: args.timeout,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!(wiring = ?args.wiring, "Starting personctl server on {}", args.bind);

    // Tracing is initialised by now, so this captures the process subscriber
    let logger = Logger::current();

    // Run server (blocks until shutdown)
    run_server(args.into(), logger, StaticProvider)
        .await
        .context("Server error")?;

    Ok(())
}
