//! Datetime display helpers.
//!
//! Renders machine-readable timestamps into the short human form used by
//! the dashboard: abbreviated month, numeric day, numeric year,
//! hour:minute (e.g. "Aug 7, 2026 14:03").

use chrono::{DateTime, Utc};

/// Parses an RFC3339 timestamp string.
pub fn parse_rfc3339(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

/// Formats a timestamp for table display.
pub fn format_display(dt: &DateTime<Utc>) -> String {
    dt.format("%b %-d, %Y %H:%M").to_string()
}

/// Parses and formats in one step.
///
/// Returns the input unchanged when it is not a valid timestamp, so a bad
/// value degrades to raw text instead of an error.
pub fn format_rfc3339(s: &str) -> String {
    match parse_rfc3339(s) {
        Some(dt) => format_display(&dt),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_short_display() {
        let dt = parse_rfc3339("2026-08-07T14:03:00Z").unwrap();
        assert_eq!(format_display(&dt), "Aug 7, 2026 14:03");
    }

    #[test]
    fn single_digit_day_is_unpadded() {
        let dt = parse_rfc3339("2025-12-03T09:05:00Z").unwrap();
        assert_eq!(format_display(&dt), "Dec 3, 2025 09:05");
    }

    #[test]
    fn normalizes_offsets_to_utc() {
        let dt = parse_rfc3339("2026-08-07T16:03:00+02:00").unwrap();
        assert_eq!(format_display(&dt), "Aug 7, 2026 14:03");
    }

    #[test]
    fn invalid_input_passes_through() {
        assert_eq!(format_rfc3339("not a date"), "not a date");
    }
}
