//! Core feed types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One submitted board entry.
///
/// Immutable once loaded. Feed order is insertion order (oldest first);
/// the board reverses it for display. `id` carries no uniqueness
/// guarantee and may be absent, in which case a positional fallback is
/// derived at card-assembly time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Optional entry identifier from the feed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Author name as submitted (may be blank).
    #[serde(default)]
    pub name: String,
    /// Free-text body.
    #[serde(default)]
    pub message: String,
    /// Submission date as it appears in the feed.
    #[serde(default)]
    pub date: String,
}

impl Message {
    /// Identifier for the card at display position `index`: the feed id
    /// when present, otherwise the positional fallback `msg-{index}`.
    pub fn card_id(&self, index: usize) -> String {
        self.id
            .clone()
            .unwrap_or_else(|| format!("msg-{index}"))
    }

    /// The submission date as a calendar date, when parseable.
    ///
    /// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates;
    /// anything else is `None` and skipped by date-based statistics.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        chrono::DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .ok()
            .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id_prefers_feed_id() {
        let with_id = Message {
            id: Some("abc".to_string()),
            name: "Ana".to_string(),
            message: "hello".to_string(),
            date: "2025-01-01".to_string(),
        };
        assert_eq!(with_id.card_id(3), "abc");

        let without_id = Message { id: None, ..with_id };
        assert_eq!(without_id.card_id(3), "msg-3");
        assert_eq!(without_id.card_id(0), "msg-0");
    }

    #[test]
    fn test_parsed_date_formats() {
        let mut m = Message {
            id: None,
            name: String::new(),
            message: String::new(),
            date: "2025-11-30".to_string(),
        };
        assert_eq!(m.parsed_date(), NaiveDate::from_ymd_opt(2025, 11, 30));

        m.date = "2025-11-30T14:22:01-03:00".to_string();
        assert_eq!(m.parsed_date(), NaiveDate::from_ymd_opt(2025, 11, 30));

        m.date = "last tuesday".to_string();
        assert_eq!(m.parsed_date(), None);

        m.date = String::new();
        assert_eq!(m.parsed_date(), None);
    }

    #[test]
    fn test_deserializes_with_missing_fields() {
        let m: Message = serde_json::from_str(r#"{"message": "just a body"}"#).unwrap();
        assert_eq!(m.id, None);
        assert_eq!(m.name, "");
        assert_eq!(m.message, "just a body");
        assert_eq!(m.date, "");
    }
}
