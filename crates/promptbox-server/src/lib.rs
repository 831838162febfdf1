pub mod config;
pub mod error;
mod routes;
#[cfg(test)]
mod test_helpers;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

use config::ServerConfig;

/// Build the application router for `config`.
pub fn app(config: &ServerConfig) -> Router {
    routes::build_router(config)
}

/// Serve on `listener` until Ctrl-C, then drain in-flight requests.
pub async fn serve(listener: TcpListener, config: &ServerConfig) -> Result<()> {
    axum::serve(listener, app(config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            warn!("failed to listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    }
}
