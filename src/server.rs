//! HTTP Server Shell
//!
//! Wraps the API router with CORS, request tracing and optional static asset
//! serving, then runs it until Ctrl+C or SIGTERM.

use crate::api::{self, handlers::handle_not_found};
use crate::config::Config;
use crate::storage::Storage;

use anyhow::{Context, Result};
use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
};
use std::sync::Arc;
use std::time::Duration;
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::info;

/// The full application: API routes plus everything around them.
pub fn build_app<S: Storage>(config: &Config, storage: Arc<S>) -> Result<Router> {
    let origin = HeaderValue::from_str(&config.client_url)
        .with_context(|| format!("Invalid CORS origin {}", config.client_url))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(60 * 60));

    let app = match &config.static_dir {
        Some(dir) => {
            info!("Serving static assets from {}", dir.display());
            let index = ServeFile::new(dir.join("index.html"));
            api::router(storage).fallback_service(ServeDir::new(dir).fallback(index))
        }
        None => api::router(storage).fallback(handle_not_found),
    };

    Ok(app.layer(cors).layer(TraceLayer::new_for_http()))
}

/// Binds `config.bind_addr` and serves until a shutdown signal arrives.
pub async fn run<S: Storage>(config: Config, storage: Arc<S>) -> Result<()> {
    let app = build_app(&config, storage)?;

    info!("Binding to {}", config.bind_addr);
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("Server running on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
