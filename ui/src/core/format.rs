//! Formatting helpers for presenting days and chart values.

use time::{macros::format_description, Date};

/// Long day label such as `Mon Jan 01 2024`.
pub fn format_day(date: Date) -> String {
    date.format(&format_description!(
        "[weekday repr:short] [month repr:short] [day] [year]"
    ))
    .unwrap_or_else(|_| date.to_string())
}

/// Stable key for a day (`2024-01-01`), used for list keys and element ids.
pub fn day_key(date: Date) -> String {
    date.format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

pub fn format_number(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}
