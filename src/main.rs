//! Mural API Server
//!
//! Run with: cargo run --bin mural
//!
//! # Configuration
//!
//! Config file locations (first match wins): `~/.config/mural/config.toml`,
//! `/etc/mural/config.toml`, `./mural.toml`.
//!
//! Environment variables:
//! - `MURAL_FEED_SOURCE`: Feed file path or URL (default: data/messages.json)
//! - `MURAL_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `MURAL_API_PORT`: Port to listen on (default: 8090)
//! - `MURAL_LOG_LEVEL`: Log level (default: info)
//! - `MURAL_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Overrides the configured log level when set

use mural::api::{serve, ApiConfig, AppState};
use mural::board::Board;
use mural::config::Config;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    init_tracing(&config);

    tracing::info!("Starting Mural API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Feed source: {}", config.feed.source);

    // Startup pipeline: palette, then feed, then serve.
    let board = Arc::new(Board::load(&config).await?);
    tracing::info!(
        messages = board.len(),
        palette_colors = board.palette().len(),
        "board ready"
    );

    let api_config = ApiConfig::from(&config.api);
    let state = AppState::new(board, api_config.clone());

    serve(state, &api_config).await?;

    tracing::info!("Mural API server stopped");
    Ok(())
}

/// Initialize tracing from the logging config, honoring `RUST_LOG`.
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new(format!(
                "mural={},tower_http=info",
                config.logging.level
            ))
        });

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
