// Crowdfund API - Local Development Server

use std::net::SocketAddr;
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use crowdfund_app::{body_limit_layer, build_cors_layer, create_app};
use crowdfund_common::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .pretty()
        .init();

    info!("Starting Crowdfund API local development server");

    let config = Config::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!(store = ?config.store, "Configuration loaded successfully");

    let app = create_app(&config).await.map_err(|e| {
        error!("Failed to create application: {}", e);
        e
    })?;

    let cors = match config.cors_allowed_origins.as_deref() {
        Some(origins) => build_cors_layer(origins),
        None => CorsLayer::permissive(),
    };

    // Layers applied innermost-first: body limit, then CORS, then tracing outermost.
    let app = app
        .layer(body_limit_layer())
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!("Server starting on http://{}", addr);
    info!("Health check available at http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
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
            info!("Received Ctrl+C signal, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }
}
