// provider-gate - HTTP gateway for a chat-completion API and S3-compatible storage
// Author: kelexine (https://github.com/kelexine)

use anyhow::Result;
use clap::Parser;
use provider_gate::cli::Args;
use provider_gate::config::AppConfig;
use provider_gate::server::{create_router, AppState};
use provider_gate::utils::logging;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration
    let config = AppConfig::load(args.config.as_deref())?;

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting provider-gate v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded: port={}, storage endpoint={}",
        config.port, config.storage_endpoint
    );

    // Phase 3: Initialize provider clients
    let addr = config.bind_address();
    let state = AppState::from_config(config)?;

    // Phase 4: Build and start HTTP server
    let app = create_router(state);

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    // Phase 5: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
