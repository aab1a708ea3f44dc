//! Case-insensitive substring search over day events.
//!
//! An empty query means "no filter" and yields no results at all; the results
//! panel stays hidden in that case rather than listing every day.

use std::rc::Rc;

use time::Date;

use super::data::DayRecord;

/// A matching day together with only the events that matched, in event order.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub date: Date,
    pub events: Vec<String>,
}

/// Lowercased needle; `None` for the empty query.
fn needle(query: &str) -> Option<String> {
    if query.is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    }
}

fn contains_folded(event: &str, needle: &str) -> bool {
    event.to_lowercase().contains(needle)
}

/// Whether `event` matches `query`. The empty query matches nothing.
pub fn event_matches(event: &str, query: &str) -> bool {
    needle(query).is_some_and(|needle| contains_folded(event, &needle))
}

/// Days with at least one matching event, in day order.
pub fn filtered_days(days: &[Rc<DayRecord>], query: &str) -> Vec<Rc<DayRecord>> {
    let Some(needle) = needle(query) else {
        return Vec::new();
    };

    days.iter()
        .filter(|day| day.events.iter().any(|event| contains_folded(event, &needle)))
        .cloned()
        .collect()
}

/// Matching days paired with their matching events only.
pub fn search_results(days: &[Rc<DayRecord>], query: &str) -> Vec<SearchHit> {
    let Some(needle) = needle(query) else {
        return Vec::new();
    };

    days.iter()
        .filter_map(|day| {
            let events: Vec<String> = day
                .events
                .iter()
                .filter(|event| contains_folded(event, &needle))
                .cloned()
                .collect();
            (!events.is_empty()).then(|| SearchHit {
                date: day.date,
                events,
            })
        })
        .collect()
}
