//! Color values for card decoration.
//!
//! Colors serialize as lowercase `#rrggbb` strings so API payloads and
//! config files carry the same literal form the presentation layer consumes.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Substituted when extraction yields no colors at all.
/// Order is fixed; round-robin assignment depends on it.
pub const FALLBACK_PALETTE: [Color; 6] = [
    Color::new(0xff, 0x7b, 0x72),
    Color::new(0xd2, 0xa8, 0xff),
    Color::new(0x79, 0xc0, 0xff),
    Color::new(0xff, 0xa6, 0x57),
    Color::new(0x2d, 0xba, 0x4e),
    Color::new(0x6e, 0x54, 0x94),
];

impl Color {
    /// Create a color from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string (case-insensitive).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Format as a lowercase `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s)
            .ok_or_else(|| de::Error::custom(format!("invalid color literal: {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let color = Color::new(0xff, 0x7b, 0x72);
        assert_eq!(color.to_hex(), "#ff7b72");
        assert_eq!(Color::from_hex("#ff7b72"), Some(color));
        assert_eq!(Color::from_hex("#FF7B72"), Some(color));
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        assert_eq!(Color::from_hex("ff7b72"), None);
        assert_eq!(Color::from_hex("#ff7b7"), None);
        assert_eq!(Color::from_hex("#ff7b7zz"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
    }

    #[test]
    fn test_fallback_palette_literal_order() {
        let hex: Vec<String> = FALLBACK_PALETTE.iter().map(|c| c.to_hex()).collect();
        assert_eq!(
            hex,
            vec!["#ff7b72", "#d2a8ff", "#79c0ff", "#ffa657", "#2dba4e", "#6e5494"]
        );
    }

    #[test]
    fn test_serde_as_hex_string() {
        let color = Color::new(0x2d, 0xba, 0x4e);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#2dba4e\"");

        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);

        assert!(serde_json::from_str::<Color>("\"green\"").is_err());
    }
}
