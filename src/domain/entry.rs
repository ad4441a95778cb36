//! Logbook entry and its date/time value type

use crate::error::{LogbookError, Result};
use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use std::fmt;

/// The fixed display/input format for entry timestamps
pub const DATE_TIME_FORMAT: &str = "%d-%m-%Y %H:%M";

/// The fixed display format for calendar dates
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Entry timestamp with minute precision, shown as `DD-MM-YYYY HH:MM`.
///
/// Parsed into a real `NaiveDateTime` so that ordering is chronological
/// rather than lexicographic on the formatted string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EntryDateTime(NaiveDateTime);

impl EntryDateTime {
    /// Parse a `DD-MM-YYYY HH:MM` string
    pub fn parse(input: &str) -> Result<Self> {
        NaiveDateTime::parse_from_str(input, DATE_TIME_FORMAT)
            .map(EntryDateTime)
            .map_err(|_| LogbookError::InvalidDateTime(input.to_string()))
    }

    /// The current local time, truncated to the minute
    pub fn now() -> Self {
        let now = Local::now().naive_local();
        let truncated = now
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(now);
        EntryDateTime(truncated)
    }

    /// The calendar date, for per-day aggregation
    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }
}

impl fmt::Display for EntryDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_TIME_FORMAT))
    }
}

/// One logbook record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub date_time: EntryDateTime,
    pub title: String,
    pub content: String,
    pub tag: String,
}

impl Entry {
    pub fn new(date_time: EntryDateTime, title: &str, content: &str, tag: &str) -> Self {
        Entry {
            date_time,
            title: title.to_string(),
            content: content.to_string(),
            tag: tag.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_valid() {
        let dt = EntryDateTime::parse("01-03-2024 10:00").unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(dt.to_string(), "01-03-2024 10:00");
    }

    #[test]
    fn test_parse_rejects_iso_order() {
        assert!(EntryDateTime::parse("2024-03-01 10:00").is_err());
    }

    #[test]
    fn test_parse_rejects_missing_time() {
        assert!(EntryDateTime::parse("01-03-2024").is_err());
    }

    #[test]
    fn test_parse_rejects_trailing_seconds() {
        assert!(EntryDateTime::parse("01-03-2024 10:00:00").is_err());
    }

    #[test]
    fn test_parse_error_carries_input() {
        let err = EntryDateTime::parse("notadate").unwrap_err();
        assert!(err.to_string().contains("notadate"));
    }

    #[test]
    fn test_ordering_is_chronological_across_months() {
        // Lexicographic string order would reverse these
        let feb = EntryDateTime::parse("28-02-2024 12:00").unwrap();
        let mar = EntryDateTime::parse("01-03-2024 09:00").unwrap();
        assert!(feb < mar);
    }

    #[test]
    fn test_ordering_is_chronological_across_years() {
        let dec = EntryDateTime::parse("31-12-2023 23:59").unwrap();
        let jan = EntryDateTime::parse("01-01-2024 00:00").unwrap();
        assert!(dec < jan);
    }

    #[test]
    fn test_now_round_trips_through_format() {
        let now = EntryDateTime::now();
        let reparsed = EntryDateTime::parse(&now.to_string()).unwrap();
        assert_eq!(now, reparsed);
    }

    #[test]
    fn test_now_is_current_year() {
        let now = EntryDateTime::now();
        assert_eq!(now.date().year(), Local::now().year());
    }
}
