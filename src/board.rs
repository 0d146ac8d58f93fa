//! Board assembly.
//!
//! `Board::load` is the explicit startup pipeline: build the palette
//! (image decode on the blocking pool), then load the feed, then freeze
//! both into an immutable value. Card assembly, daily selection, search,
//! and statistics are all pure reads over that frozen state - there are
//! no ambient globals and nothing mutates after load.

use chrono::NaiveDate;
use thiserror::Error;

use crate::config::Config;
use crate::daily;
use crate::feed::{self, FeedClient, FeedError, FeedSource, Message};
use crate::palette::{self, CardOverrides, Color, Palette};
use crate::stats::{self, BoardStats};

/// Board construction errors.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Feed could not be loaded
    #[error(transparent)]
    Feed(#[from] FeedError),

    /// Palette extraction task failed to run
    #[error("palette task failed: {0}")]
    Palette(String),
}

/// The frozen application state: the session palette plus the loaded
/// collection, in feed order.
#[derive(Debug, Clone)]
pub struct Board {
    palette: Palette,
    messages: Vec<Message>,
}

/// One renderable card: a message at a display position with its
/// assigned color.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// Feed id, or the positional fallback `msg-{position}`
    pub id: String,
    /// Author name as submitted
    pub name: String,
    /// Entry body
    pub message: String,
    /// Raw submission date string
    pub date: String,
    /// Display position (0 = newest)
    pub position: usize,
    /// Assigned color (override or round-robin default)
    pub color: Color,
}

impl Board {
    /// Run the startup pipeline: palette first, then the feed.
    ///
    /// Image decode happens on the blocking pool; the feed is fetched
    /// afterwards so card assembly never observes a missing palette.
    pub async fn load(config: &Config) -> Result<Self, BoardError> {
        let images = config.palette.images.clone();
        let palette = tokio::task::spawn_blocking(move || palette::build_palette(&images))
            .await
            .map_err(|e| BoardError::Palette(e.to_string()))?;

        tracing::info!(
            colors = palette.len(),
            fallback = palette.is_fallback(),
            "palette ready"
        );

        let client = FeedClient::new(config.feed.request_timeout_ms);
        let source = FeedSource::parse(&config.feed.source);
        let messages = client.load(&source).await?;

        Ok(Self::new(palette, messages))
    }

    /// Assemble a board from already-loaded parts.
    pub fn new(palette: Palette, messages: Vec<Message>) -> Self {
        Self { palette, messages }
    }

    /// The session palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The collection in feed order (oldest first).
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of entries on the board.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the board has no entries.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// All cards in display order (newest first).
    pub fn cards(&self) -> Vec<Card> {
        self.cards_filtered("")
    }

    /// Cards matching a search query, in display order.
    ///
    /// Filtering happens over feed order; positions (and therefore colors
    /// and fallback ids) are assigned against the filtered, reversed list.
    pub fn cards_filtered(&self, query: &str) -> Vec<Card> {
        self.cards_with_overrides(query, &CardOverrides::default())
    }

    /// Cards matching a search query, honoring per-card color overrides.
    pub fn cards_with_overrides(&self, query: &str, overrides: &CardOverrides) -> Vec<Card> {
        feed::filter(&self.messages, query)
            .into_iter()
            .rev()
            .enumerate()
            .map(|(position, message)| Card {
                id: message.card_id(position),
                name: message.name.clone(),
                message: message.message.clone(),
                date: message.date.clone(),
                position,
                color: self.palette.color_for_card(position, overrides),
            })
            .collect()
    }

    /// Find a card by its id (feed id or positional fallback).
    pub fn find_card(&self, id: &str) -> Option<Card> {
        self.cards().into_iter().find(|card| card.id == id)
    }

    /// The featured entry for a calendar date, or `None` when the board
    /// is empty (callers suppress the featured presentation).
    pub fn daily(&self, date: NaiveDate) -> Option<&Message> {
        daily::select_daily(date, &self.messages)
    }

    /// Statistics over the full collection.
    pub fn stats(&self) -> BoardStats {
        stats::build(&self.messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::FALLBACK_PALETTE;

    fn msg(name: &str, body: &str, date: &str) -> Message {
        Message {
            id: None,
            name: name.to_string(),
            message: body.to_string(),
            date: date.to_string(),
        }
    }

    fn board(count: usize) -> Board {
        let messages = (0..count)
            .map(|i| msg(&format!("author-{i}"), &format!("body-{i}"), "2025-01-01"))
            .collect();
        Board::new(Palette::fallback(), messages)
    }

    #[test]
    fn test_cards_reverse_feed_order() {
        let b = board(3);
        let cards = b.cards();

        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].name, "author-2");
        assert_eq!(cards[2].name, "author-0");
        assert_eq!(cards[0].position, 0);
        assert_eq!(cards[0].id, "msg-0");
        assert_eq!(cards[2].id, "msg-2");
    }

    #[test]
    fn test_cards_cycle_palette_by_display_position() {
        let b = board(8);
        let cards = b.cards();
        let p = FALLBACK_PALETTE.len();

        for card in &cards {
            assert_eq!(card.color, FALLBACK_PALETTE[card.position % p]);
        }
        assert_eq!(cards[6].color, cards[0].color);
    }

    #[test]
    fn test_filtered_cards_reindex_positions() {
        let b = Board::new(
            Palette::fallback(),
            vec![
                msg("Ana", "duct tape", "2025-01-01"),
                msg("Bia", "reboot", "2025-01-02"),
                msg("Pat", "more duct tape", "2025-01-03"),
            ],
        );

        let cards = b.cards_filtered("duct");
        assert_eq!(cards.len(), 2);
        // Newest match first, and positions restart at 0 for the filtered view.
        assert_eq!(cards[0].name, "Pat");
        assert_eq!(cards[0].position, 0);
        assert_eq!(cards[1].name, "Ana");
        assert_eq!(cards[1].position, 1);
    }

    #[test]
    fn test_overrides_apply_to_display_position() {
        let b = board(3);
        let custom = Color::new(0x12, 0x34, 0x56);
        let mut overrides = CardOverrides::new();
        overrides.set(1, custom);

        let cards = b.cards_with_overrides("", &overrides);
        assert_eq!(cards[1].color, custom);
        assert_eq!(cards[0].color, FALLBACK_PALETTE[0]);
    }

    #[test]
    fn test_find_card_by_feed_id_and_fallback() {
        let b = Board::new(
            Palette::fallback(),
            vec![
                msg("Ana", "a", "2025-01-01"),
                Message {
                    id: Some("feed-id".to_string()),
                    ..msg("Bia", "b", "2025-01-02")
                },
            ],
        );

        assert_eq!(b.find_card("feed-id").unwrap().name, "Bia");
        // Ana is oldest, so she renders last: position 1.
        assert_eq!(b.find_card("msg-1").unwrap().name, "Ana");
        assert!(b.find_card("missing").is_none());
    }

    #[test]
    fn test_daily_none_on_empty_board() {
        let b = board(0);
        let date = NaiveDate::from_ymd_opt(2025, 11, 30).unwrap();
        assert!(b.daily(date).is_none());
        assert!(b.cards().is_empty());
    }

    #[tokio::test]
    async fn test_load_pipeline_with_missing_assets() {
        let dir = tempfile::tempdir().unwrap();
        let feed_path = dir.path().join("messages.json");
        std::fs::write(
            &feed_path,
            r#"[{"name": "Ana", "message": "hello", "date": "2025-01-01"}]"#,
        )
        .unwrap();

        let mut config = Config::default();
        config.feed.source = feed_path.to_string_lossy().to_string();
        config.palette.images = vec![dir.path().join("missing.png").to_string_lossy().to_string()];

        let b = Board::load(&config).await.unwrap();
        assert_eq!(b.len(), 1);
        // Both images missing: the fallback palette decorates the cards.
        assert!(b.palette().is_fallback());
        assert_eq!(b.cards()[0].color, FALLBACK_PALETTE[0]);
    }
}
