//! Data Transfer Objects
//!
//! Response types for the API endpoints, serialized to JSON. Colors
//! travel as `#rrggbb` strings, dates in calendar form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::board::Card;
use crate::feed::Message;
use crate::palette::Palette;
use crate::stats::BoardStats;

// ============================================
// MESSAGE DTOs
// ============================================

/// One card in display order
#[derive(Debug, Serialize, Deserialize)]
pub struct CardResponse {
    /// Feed id or positional fallback
    pub id: String,
    /// Author name
    pub name: String,
    /// Entry body
    pub message: String,
    /// Raw submission date string
    pub date: String,
    /// Display position (0 = newest)
    pub position: usize,
    /// Assigned color as `#rrggbb`
    pub color: String,
}

impl From<Card> for CardResponse {
    fn from(card: Card) -> Self {
        Self {
            id: card.id,
            name: card.name,
            message: card.message,
            date: card.date,
            position: card.position,
            color: card.color.to_hex(),
        }
    }
}

/// Card listing response
#[derive(Debug, Serialize, Deserialize)]
pub struct CardListResponse {
    /// Number of cards after filtering
    pub total: usize,
    /// Cards in display order (newest first)
    pub cards: Vec<CardResponse>,
}

// ============================================
// DAILY DTOs
// ============================================

/// Featured entry for one calendar day
#[derive(Debug, Serialize, Deserialize)]
pub struct DailyResponse {
    /// The date the selection was computed for
    pub date: NaiveDate,
    /// The featured entry, or null when the board is empty
    pub daily: Option<FeaturedMessage>,
}

/// The featured entry itself
#[derive(Debug, Serialize, Deserialize)]
pub struct FeaturedMessage {
    pub name: String,
    pub message: String,
    pub date: String,
}

impl From<&Message> for FeaturedMessage {
    fn from(message: &Message) -> Self {
        Self {
            name: message.name.clone(),
            message: message.message.clone(),
            date: message.date.clone(),
        }
    }
}

// ============================================
// PALETTE DTOs
// ============================================

/// The session palette
#[derive(Debug, Serialize, Deserialize)]
pub struct PaletteResponse {
    /// Colors in assignment order, as `#rrggbb` strings
    pub colors: Vec<String>,
    /// Whether the hard-coded fallback set was substituted
    pub fallback: bool,
}

impl From<&Palette> for PaletteResponse {
    fn from(palette: &Palette) -> Self {
        Self {
            colors: palette.colors().iter().map(|c| c.to_hex()).collect(),
            fallback: palette.is_fallback(),
        }
    }
}

// ============================================
// STATS DTOs
// ============================================

/// Board statistics
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Total number of entries
    pub total: usize,
    /// Entries per calendar day, ascending
    pub by_day: Vec<DayCountDto>,
    /// Most active contributors, descending
    pub contributors: Vec<ContributorDto>,
    /// Longest entry summary, if any entry exists
    pub longest: Option<LongestDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayCountDto {
    pub date: NaiveDate,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContributorDto {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LongestDto {
    pub author: String,
    pub length: usize,
    pub snippet: String,
}

impl From<BoardStats> for StatsResponse {
    fn from(stats: BoardStats) -> Self {
        Self {
            total: stats.total,
            by_day: stats
                .by_day
                .into_iter()
                .map(|row| DayCountDto {
                    date: row.date,
                    count: row.count,
                })
                .collect(),
            contributors: stats
                .contributors
                .into_iter()
                .map(|c| ContributorDto {
                    name: c.name,
                    count: c.count,
                })
                .collect(),
            longest: stats.longest.map(|l| LongestDto {
                author: l.author,
                length: l.length,
                snippet: l.snippet,
            }),
        }
    }
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: "healthy"
    pub status: String,
    /// Number of loaded entries
    pub messages: usize,
    /// Palette source: "extracted" or "fallback"
    pub palette: String,
    /// Seconds since startup
    pub uptime_seconds: u64,
    /// Crate version
    pub version: String,
}
