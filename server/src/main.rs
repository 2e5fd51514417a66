//! Shelfmark Server - sync server for reading progress.
//!
//! This server lets reader clients reconcile their local shelf of books with
//! the canonical per-owner copy, using the shelfmark-engine planning logic.

mod config;
mod db;
mod error;
mod handlers;
mod routes;

use crate::config::Config;
use crate::db::Pool;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub pool: Pool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shelfmark_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!("Starting Shelfmark Server on {}:{}", config.host, config.port);

    // Create database pool and bootstrap the schema
    let pool = db::create_pool(&config.database_url).await?;
    db::init_schema(&pool).await?;

    let state = AppState { pool };

    // Build router
    let app = Router::new()
        .merge(routes::create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
