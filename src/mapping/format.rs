//! Date-range and location display formatting

use crate::model::cv::{DateRange, Location};

/// Format a date range as `"<start> — <end>"`. A missing end date becomes
/// `"Present"` when the range is flagged current; a range with both ends
/// missing formats as an empty string; a lone endpoint passes through as-is.
pub fn format_date_range(range: Option<&DateRange>) -> String {
    let Some(range) = range else {
        return String::new();
    };

    let start = range.start_date.as_deref().unwrap_or("").trim();
    let end = match range.end_date.as_deref().map(str::trim) {
        Some(end) if !end.is_empty() => end,
        _ if range.is_current.unwrap_or(false) => "Present",
        _ => "",
    };

    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (false, true) => start.to_string(),
        (true, false) => end.to_string(),
        (false, false) => format!("{} — {}", start, end),
    }
}

/// Join the non-empty parts of a location with `", "`. Null or blank fields
/// are skipped, so there are never dangling separators.
pub fn format_location(location: Option<&Location>) -> String {
    let Some(location) = location else {
        return String::new();
    };

    [
        location.city.as_deref(),
        location.state.as_deref(),
        location.country.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(", ")
}

/// Join non-empty string parts with `", "`, same policy as `format_location`.
pub fn join_non_empty(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
