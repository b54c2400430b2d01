//! movies-api server entry point.
//!
//! Builds the movie store, then starts the Axum HTTP server.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::http::StatusCode;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use movies_api::api;
use movies_api::app_state::AppState;
use movies_api::config::{LogFormat, ServiceConfig};
use movies_api::persistence::{InMemoryMovieStore, MovieStore, PostgresMovieStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServiceConfig::from_env().context("failed to load configuration")?;

    // Initialize tracing
    init_tracing(config.log_format);
    tracing::info!(addr = %config.listen_addr, "starting movies-api");

    // Build persistence layer
    let store = build_store(&config).await?;

    // Build router
    let mut app = api::build_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());
    if config.request_timeout_secs > 0 {
        app = app.layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ));
    }
    let app = app.with_state(AppState::new(Arc::clone(&store)));

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    store.close().await;
    tracing::info!("shutdown complete");

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

async fn build_store(config: &ServiceConfig) -> anyhow::Result<Arc<dyn MovieStore>> {
    if !config.persistence_enabled {
        tracing::warn!("persistence disabled; movies are kept in memory only");
        return Ok(Arc::new(InMemoryMovieStore::new()));
    }

    let store = PostgresMovieStore::connect(&config.database)
        .await
        .context("failed to connect to the database")?;
    if config.database.run_migrations {
        store
            .run_migrations()
            .await
            .context("failed to apply migrations")?;
    }
    Ok(Arc::new(store))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
