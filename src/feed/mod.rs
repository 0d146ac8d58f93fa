//! Message feed
//!
//! The feed is the board's single source of truth: an ordered JSON array
//! of submitted entries, fetched once at startup and held immutable in
//! memory afterwards.

pub mod loader;
pub mod search;
pub mod types;

pub use loader::{FeedClient, FeedError, FeedResult, FeedSource};
pub use search::filter;
pub use types::Message;
