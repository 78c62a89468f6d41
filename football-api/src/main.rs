//! Football Predictions proxy server

use football_api::{app, AppState};
use football_core::AppConfig;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env.local file
    if let Err(e) = dotenvy::from_filename(".env.local") {
        // Not an error if the file doesn't exist
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env.local: {}", e);
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,football_api=debug,tower_http=debug")),
        )
        .init();

    info!("Starting Football Predictions proxy");

    let config = AppConfig::from_env()?;
    let gateway = config.proxy_gateway()?;

    if gateway.bearer_token.is_some() {
        info!("API_KEY found - upstream requests will be authenticated");
    } else {
        info!("No API_KEY set - upstream requests will be anonymous");
    }
    info!(
        "Forwarding to {} (timeout {:?})",
        gateway.base_url, gateway.timeout
    );

    let state = AppState::new(gateway, config.labels.clone())?;
    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
