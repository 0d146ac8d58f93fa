//! Mural REST API
//!
//! HTTP API layer for the board, built with Axum. Every endpoint is a
//! read over the frozen board state.
//!
//! # Endpoints
//!
//! ## Messages
//! - `GET /api/v1/messages` - Cards in display order (newest first)
//! - `GET /api/v1/messages?q=term` - Filtered cards
//! - `GET /api/v1/messages/:id` - One card
//!
//! ## Daily
//! - `GET /api/v1/daily` - Today's featured entry
//! - `GET /api/v1/daily?date=YYYY-MM-DD` - Featured entry for a date
//!
//! ## Palette
//! - `GET /api/v1/palette` - The session palette
//!
//! ## Stats
//! - `GET /api/v1/stats` - Board statistics
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use mural::api::{serve, ApiConfig, AppState};
//! use mural::board::Board;
//! use mural::config::Config;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let board = Arc::new(Board::load(&config).await?);
//!
//!     let api_config = ApiConfig::from(&config.api);
//!     let state = AppState::new(board, api_config.clone());
//!     serve(state, &api_config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Message routes
        .route("/messages", get(routes::messages::list_messages))
        .route("/messages/:id", get(routes::messages::get_message))
        // Daily featured route
        .route("/daily", get(routes::daily::get_daily))
        // Palette route
        .route("/palette", get(routes::palette::get_palette))
        // Stats route
        .route("/stats", get(routes::stats::get_stats));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // Configure properly in production
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Mural API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Mural API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
