//! # Mural
//!
//! Message board service - a small Rust backend for a static message board:
//! it loads a feed of user-submitted entries, derives a decorative color
//! palette from local images, deterministically features one entry per
//! calendar day, and exposes everything over a read-only REST API.
//!
//! ## Modules
//!
//! - [`feed`]: Message model, feed loading, and search filtering
//! - [`palette`]: Pixel sampling, color quantization, and palette assembly
//! - [`daily`]: Date-seeded daily featured selection
//! - [`stats`]: Board statistics (per-day counts, contributors, longest entry)
//! - [`board`]: The startup pipeline and frozen application state
//! - [`api`]: REST API server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mural::board::Board;
//! use mural::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!
//!     // Palette first, then the feed - card assembly needs both.
//!     let board = Board::load(&config).await?;
//!
//!     let today = chrono::Local::now().date_naive();
//!     if let Some(featured) = board.daily(today) {
//!         println!("Featured today: {} - {}", featured.message, featured.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod board;
pub mod config;
pub mod daily;
pub mod feed;
pub mod palette;
pub mod stats;

// Re-export top-level types for convenience
pub use board::{Board, BoardError, Card};

pub use feed::{FeedClient, FeedError, FeedResult, FeedSource, Message};

pub use palette::{build_palette, extract_colors, CardOverrides, Color, Palette, FALLBACK_PALETTE};

pub use daily::{daily_index, day_seed, select_daily};

pub use stats::{BoardStats, Contributor, DayCount, LongestMessage};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, LoggingConfig};
