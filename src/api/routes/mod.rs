//! API route handlers

pub mod daily;
pub mod health;
pub mod messages;
pub mod palette;
pub mod stats;
