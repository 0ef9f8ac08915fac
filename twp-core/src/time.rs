//! Formatting of backend timestamps for display.
//!
//! The backend sends ISO-8601 strings, usually with an offset
//! (`2025-06-01T14:00:00-06:00`), sometimes naive (`2025-06-01T14:00`).
//! Anything unparsable is shown verbatim.

use chrono::{DateTime, NaiveDateTime};

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// Parse a backend timestamp as wall-clock time at the location.
pub fn parse_local(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// "Sun Jun 1, 14:00"
pub fn format_instant(s: &str) -> String {
    match parse_local(s) {
        Some(dt) => dt.format("%a %b %-d, %H:%M").to_string(),
        None => s.to_string(),
    }
}

/// Hour label for the detail table, "Jun 1 14:00".
pub fn format_hour(s: &str) -> String {
    match parse_local(s) {
        Some(dt) => dt.format("%b %-d %H:%M").to_string(),
        None => s.to_string(),
    }
}

/// "Sun Jun 1, 14:00 → 17:00", repeating the date only when it changes.
pub fn format_range(start: &str, end: &str) -> String {
    match (parse_local(start), parse_local(end)) {
        (Some(a), Some(b)) if a.date() == b.date() => {
            format!("{} → {}", a.format("%a %b %-d, %H:%M"), b.format("%H:%M"))
        }
        _ => format!("{} → {}", format_instant(start), format_instant(end)),
    }
}
