//! Axum server setup
//!
//! Mounts the person route with:
//! - Request tracing
//! - A per-request timeout
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use axum::routing::MethodRouter;
use axum::Router;
use personctl_core::PersonProvider;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{error, info, warn};

use crate::error::{ServerError, ServerResult};
use crate::logger::Logger;
use crate::wiring::Wiring;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8080)
    pub bind_addr: SocketAddr,

    /// How the handler's collaborators are wired into the route
    pub wiring: Wiring,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            wiring: Wiring::default(),
            timeout_secs: 30,
        }
    }
}

/// Mount `person_route` at `/person` behind the middleware stack.
pub fn build_router(person_route: MethodRouter, timeout_secs: u64) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(timeout_secs)));

    Router::new()
        .route("/person", person_route)
        .layer(middleware)
}

/// Run the HTTP server until a shutdown signal arrives.
pub async fn run_server<P: PersonProvider>(
    config: ServerConfig,
    logger: Logger,
    provider: P,
) -> ServerResult<()> {
    let route = config.wiring.person_route(logger, provider);
    let app = build_router(route, config.timeout_secs);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind_addr,
            source,
        })?;
    info!(
        addr = %config.bind_addr,
        wiring = ?config.wiring,
        "Server listening on http://{}",
        config.bind_addr
    );

    serve(listener, app, shutdown_signal()).await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Serve `app` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> ServerResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!(err = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!(err = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
