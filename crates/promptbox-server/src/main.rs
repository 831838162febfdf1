use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use promptbox_server::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();
    let addr = config.socket_addr();

    if config.gemini().is_enabled() {
        info!("gemini api key configured (requests are acknowledged, not forwarded)");
    } else {
        info!("gemini integration disabled (no GEMINI_API_KEY)");
    }

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("promptbox-server listening on http://{addr}");
    info!("max upload size: {} bytes", config.max_upload_bytes);
    if config.cors {
        info!("cors enabled for all origins");
    }

    promptbox_server::serve(listener, &config).await
}
