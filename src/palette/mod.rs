//! Card color palette
//!
//! The palette is built once per process, before any card is assembled:
//! representative colors are sampled from the configured images, merged,
//! and deduplicated; when nothing survives extraction a fixed fallback
//! palette takes over. Cards receive colors round-robin by display
//! position, unless the presentation layer supplies a per-card override.

pub mod color;
pub mod extract;

pub use color::{Color, FALLBACK_PALETTE};
pub use extract::{build_palette, extract_colors};

use std::collections::HashMap;

/// A non-empty, ordered list of card colors.
///
/// Produced once per session and reused for the lifetime of the process;
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
    fallback: bool,
}

impl Palette {
    /// Assemble a palette from extracted colors: deduplicate preserving
    /// first occurrence, substituting the fallback set when empty.
    pub fn from_colors(colors: Vec<Color>) -> Self {
        let mut unique: Vec<Color> = Vec::new();
        for color in colors {
            if !unique.contains(&color) {
                unique.push(color);
            }
        }

        if unique.is_empty() {
            tracing::info!("no colors extracted, using fallback palette");
            Self::fallback()
        } else {
            Self {
                colors: unique,
                fallback: false,
            }
        }
    }

    /// The hard-coded fallback palette.
    pub fn fallback() -> Self {
        Self {
            colors: FALLBACK_PALETTE.to_vec(),
            fallback: true,
        }
    }

    /// Colors in assignment order. Never empty.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of colors in the palette.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false: an empty extraction result becomes the fallback set.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Whether the fallback set was substituted.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Default color for the card at display position `index`
    /// (round-robin: `index mod len`).
    pub fn color_for(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    /// Color for a card, consulting per-card overrides before the
    /// round-robin default.
    pub fn color_for_card(&self, index: usize, overrides: &CardOverrides) -> Color {
        overrides.get(index).unwrap_or_else(|| self.color_for(index))
    }
}

/// Per-card color overrides.
///
/// The browser's key-value store owns these; the core only ever reads
/// them when assembling a card.
#[derive(Debug, Clone, Default)]
pub struct CardOverrides(HashMap<usize, Color>);

impl CardOverrides {
    /// Empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an override for a card position.
    pub fn set(&mut self, index: usize, color: Color) {
        self.0.insert(index, color);
    }

    /// Clear an override, restoring the computed default.
    pub fn reset(&mut self, index: usize) {
        self.0.remove(&index);
    }

    /// Look up the override for a card position.
    pub fn get(&self, index: usize) -> Option<Color> {
        self.0.get(&index).copied()
    }
}
