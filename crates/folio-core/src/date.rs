//! Display formatting for publication timestamps.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Display string used when a timestamp cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Format a publication timestamp for display.
///
/// Accepts RFC 3339 (`2024-01-05T00:00:00Z`), naive datetime and
/// date-only (`2024-01-05`) inputs and renders them as
/// `Jan 05, 2024`. Unparseable input degrades to [`INVALID_DATE`]
/// instead of failing the render.
pub fn format_published(published_at: &str) -> String {
    parse_date(published_at)
        .map(|date| date.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// Build the secondary line shown under an article title.
pub fn meta_line(formatted_date: &str, views: u64) -> String {
    format!("{formatted_date} • {views} views")
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rfc3339() {
        assert_eq!(format_published("2024-01-05T00:00:00Z"), "Jan 05, 2024");
    }

    #[test]
    fn test_format_with_offset() {
        assert_eq!(format_published("2025-11-02T18:45:00+02:00"), "Nov 02, 2025");
    }

    #[test]
    fn test_format_naive_datetime() {
        assert_eq!(format_published("2024-12-31T23:59:59"), "Dec 31, 2024");
    }

    #[test]
    fn test_format_date_only() {
        assert_eq!(format_published("2024-01-05"), "Jan 05, 2024");
    }

    #[test]
    fn test_format_invalid_input() {
        assert_eq!(format_published("not a date"), INVALID_DATE);
        assert_eq!(format_published(""), INVALID_DATE);
    }

    #[test]
    fn test_format_is_deterministic() {
        let first = format_published("2026-08-06T12:00:00Z");
        let second = format_published("2026-08-06T12:00:00Z");
        assert_eq!(first, second);
    }

    #[test]
    fn test_meta_line_zero_views() {
        assert_eq!(meta_line("Jan 05, 2024", 0), "Jan 05, 2024 • 0 views");
    }

    #[test]
    fn test_meta_line_large_views() {
        assert_eq!(
            meta_line("Jan 05, 2024", 123_456),
            "Jan 05, 2024 • 123456 views"
        );
    }

    #[test]
    fn test_meta_line_keeps_invalid_date() {
        assert_eq!(
            meta_line(&format_published("garbage"), 7),
            "Invalid Date • 7 views"
        );
    }
}
