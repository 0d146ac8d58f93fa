//! Board statistics.
//!
//! Pure aggregation over the loaded collection: entries per calendar day,
//! contributor ranking, and the longest entry. Everything here feeds the
//! statistics panel; chart drawing itself belongs to the presentation
//! layer.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::feed::Message;

/// Label used for entries submitted without an author name.
pub const ANONYMOUS: &str = "Anônimo";

/// Longest-entry snippets are cut at this many characters.
const SNIPPET_LIMIT: usize = 180;

/// Leader plus up to three runners-up.
const CONTRIBUTOR_LIMIT: usize = 4;

/// Aggregated statistics for one collection.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardStats {
    /// Total number of entries
    pub total: usize,
    /// Entries per calendar day, ascending by date
    pub by_day: Vec<DayCount>,
    /// Most active contributors, descending by count
    pub contributors: Vec<Contributor>,
    /// The entry with the longest body, if any entry exists
    pub longest: Option<LongestMessage>,
}

/// Number of entries submitted on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// One contributor and how many entries they submitted.
///
/// Grouping is case-insensitive on the trimmed name; the display name
/// keeps the first-seen raw spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contributor {
    pub name: String,
    pub count: usize,
}

/// Summary of the entry with the longest body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongestMessage {
    pub author: String,
    pub length: usize,
    pub snippet: String,
}

/// Compute all statistics for a collection.
pub fn build(messages: &[Message]) -> BoardStats {
    BoardStats {
        total: messages.len(),
        by_day: counts_by_day(messages),
        contributors: top_contributors(messages, CONTRIBUTOR_LIMIT),
        longest: longest_message(messages),
    }
}

/// Group entries by parsed submission date, ascending.
///
/// Entries whose date does not parse are skipped.
pub fn counts_by_day(messages: &[Message]) -> Vec<DayCount> {
    let mut counts: HashMap<NaiveDate, usize> = HashMap::new();
    for message in messages {
        if let Some(date) = message.parsed_date() {
            *counts.entry(date).or_default() += 1;
        }
    }

    let mut rows: Vec<DayCount> = counts
        .into_iter()
        .map(|(date, count)| DayCount { date, count })
        .collect();
    rows.sort_by_key(|row| row.date);
    rows
}

/// Rank contributors by entry count, descending, keeping at most `limit`.
///
/// Ties keep first-seen order.
pub fn top_contributors(messages: &[Message], limit: usize) -> Vec<Contributor> {
    let mut ranking: Vec<Contributor> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for message in messages {
        let raw = message.name.trim();
        let display = if raw.is_empty() { ANONYMOUS } else { raw };
        let key = display.to_lowercase();

        match slots.get(&key) {
            Some(&slot) => ranking[slot].count += 1,
            None => {
                slots.insert(key, ranking.len());
                ranking.push(Contributor {
                    name: display.to_string(),
                    count: 1,
                });
            }
        }
    }

    ranking.sort_by(|a, b| b.count.cmp(&a.count));
    ranking.truncate(limit);
    ranking
}

/// The entry with the longest body. First entry wins ties.
pub fn longest_message(messages: &[Message]) -> Option<LongestMessage> {
    let mut longest: Option<&Message> = None;
    for message in messages {
        if longest.map_or(true, |current| message.message.len() > current.message.len()) {
            longest = Some(message);
        }
    }

    longest.map(|message| {
        let author = message.name.trim();
        LongestMessage {
            author: if author.is_empty() {
                ANONYMOUS.to_string()
            } else {
                author.to_string()
            },
            length: message.message.chars().count(),
            snippet: snippet(&message.message),
        }
    })
}

fn snippet(body: &str) -> String {
    let mut out: String = body.chars().take(SNIPPET_LIMIT).collect();
    if body.chars().count() > SNIPPET_LIMIT {
        out.push('…');
    }
    out
}
