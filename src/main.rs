use std::sync::Arc;

use axum::{routing::get, Router};
use sqlx::postgres::PgPoolOptions;
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

mod config;
mod db;
mod error;
mod handlers;
mod models;

use crate::config::Config;
use crate::db::{PgProductStore, ProductStore};

/// Shared application state. Cheap to clone; the store handle is injected here
/// so tests can swap in a substitute.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
    pub app_name: Arc<str>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,product_service=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    // Lazy pool: a down database must not take /health with it. A malformed
    // connection string still fails here.
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy(&config.database_url)?;
    info!(max_connections = config.max_connections, "Database pool configured");

    let state = AppState {
        store: Arc::new(PgProductStore::new(pool)),
        app_name: Arc::from(config.app_name.as_str()),
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!(app_name = %config.app_name, "Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/data", get(handlers::data))
        .route(
            "/products",
            get(handlers::products::list_products).post(handlers::products::create_product),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => warn!("Received Ctrl+C, shutting down"),
        _ = terminate => warn!("Received SIGTERM, shutting down"),
    }
}
