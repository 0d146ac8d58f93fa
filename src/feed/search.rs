//! Search filtering over the in-memory collection.

use super::Message;

/// Filter messages by a case-insensitive substring match against the
/// body, the author name, and the raw date string.
///
/// A blank or whitespace-only query returns the whole collection.
/// Feed order is preserved; display-order reversal happens at card
/// assembly, after filtering.
pub fn filter<'a>(messages: &'a [Message], query: &str) -> Vec<&'a Message> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return messages.iter().collect();
    }

    messages
        .iter()
        .filter(|m| {
            m.message.to_lowercase().contains(&q)
                || m.name.to_lowercase().contains(&q)
                || m.date.to_lowercase().contains(&q)
        })
        .collect()
}
