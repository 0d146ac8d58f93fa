//! Daily featured-message selection.
//!
//! All viewers on the same calendar day see the same featured entry: the
//! date is folded into a base-10 `YYYYMMDD` integer and taken modulo the
//! collection size. The encoding is a digit concatenation, not a mixed
//! seed - low-order collisions and uneven index coverage across days are
//! accepted behavior, and downstream consumers rely on the literal
//! mapping, so the formula must not be "improved".

use chrono::{Datelike, NaiveDate};

use crate::feed::Message;

/// Fold a calendar date into its `YYYYMMDD` integer form.
///
/// `2025-11-30` becomes `20251130`.
pub fn day_seed(date: NaiveDate) -> u32 {
    date.year() as u32 * 10_000 + date.month() * 100 + date.day()
}

/// Deterministic index of the featured entry for `date` in a collection
/// of `count` messages, or `None` when the collection is empty.
///
/// For a fixed date and count the result never changes, and always lies
/// in `[0, count)`.
pub fn daily_index(date: NaiveDate, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some(day_seed(date) as usize % count)
}

/// The featured message for `date`, selected over feed order.
///
/// `None` means the collection is empty and the featured presentation
/// must be suppressed entirely.
pub fn select_daily(date: NaiveDate, messages: &[Message]) -> Option<&Message> {
    daily_index(date, messages.len()).map(|index| &messages[index])
}
