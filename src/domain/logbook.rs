//! In-memory entry table

use crate::domain::{Entry, EntryDateTime};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Snapshot of the full entry table, kept sorted by date/time.
///
/// Entry identity is the exact `(date_time, title)` pair; duplicates are
/// allowed and mutations act on every matching row.
#[derive(Debug, Clone, Default)]
pub struct Logbook {
    entries: Vec<Entry>,
}

impl Logbook {
    pub fn new() -> Self {
        Logbook::default()
    }

    /// Build a logbook from loaded rows, sorting them by date/time
    pub fn from_entries(mut entries: Vec<Entry>) -> Self {
        entries.sort_by_key(|e| e.date_time);
        Logbook { entries }
    }

    /// All entries in date/time order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry, keeping the table sorted
    pub fn add(&mut self, entry: Entry) {
        self.entries.push(entry);
        // Stable sort keeps insertion order for equal timestamps
        self.entries.sort_by_key(|e| e.date_time);
    }

    /// Set the content of every row matching `(date_time, title)` exactly.
    /// Returns the number of rows affected; 0 is not an error.
    pub fn update(&mut self, date_time: EntryDateTime, title: &str, new_content: &str) -> usize {
        let mut affected = 0;
        for entry in &mut self.entries {
            if entry.date_time == date_time && entry.title == title {
                entry.content = new_content.to_string();
                affected += 1;
            }
        }
        affected
    }

    /// Remove every row matching `(date_time, title)` exactly.
    /// Returns the number of rows removed; 0 is not an error.
    pub fn delete(&mut self, date_time: EntryDateTime, title: &str) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|e| !(e.date_time == date_time && e.title == title));
        before - self.entries.len()
    }

    /// Rows whose title or content contains `keyword` as a case-insensitive
    /// substring, in table order. The tag column is not searched.
    pub fn search(&self, keyword: &str) -> Vec<&Entry> {
        let needle = keyword.to_lowercase();
        self.entries
            .iter()
            .filter(|e| {
                e.title.to_lowercase().contains(&needle)
                    || e.content.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Entry count per calendar day, in ascending date order
    pub fn daily_counts(&self) -> BTreeMap<NaiveDate, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.date_time.date()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date_time: &str, title: &str, content: &str, tag: &str) -> Entry {
        Entry::new(EntryDateTime::parse(date_time).unwrap(), title, content, tag)
    }

    fn timestamps(logbook: &Logbook) -> Vec<String> {
        logbook
            .entries()
            .iter()
            .map(|e| e.date_time.to_string())
            .collect()
    }

    #[test]
    fn test_add_keeps_chronological_order() {
        let mut logbook = Logbook::new();
        logbook.add(entry("01-03-2024 10:00", "March", "c", "t"));
        logbook.add(entry("28-02-2024 09:00", "February", "c", "t"));
        logbook.add(entry("15-01-2024 12:00", "January", "c", "t"));

        assert_eq!(
            timestamps(&logbook),
            vec![
                "15-01-2024 12:00",
                "28-02-2024 09:00",
                "01-03-2024 10:00"
            ]
        );
    }

    #[test]
    fn test_add_orders_across_years() {
        let mut logbook = Logbook::new();
        logbook.add(entry("01-01-2024 00:00", "New year", "c", "t"));
        logbook.add(entry("31-12-2023 23:59", "Old year", "c", "t"));

        assert_eq!(logbook.entries()[0].title, "Old year");
        assert_eq!(logbook.entries()[1].title, "New year");
    }

    #[test]
    fn test_from_entries_sorts() {
        let logbook = Logbook::from_entries(vec![
            entry("02-03-2024 08:00", "b", "c", "t"),
            entry("01-03-2024 09:00", "a", "c", "t"),
        ]);
        assert_eq!(logbook.entries()[0].title, "a");
    }

    #[test]
    fn test_update_no_match_is_noop() {
        let mut logbook = Logbook::new();
        logbook.add(entry("01-03-2024 10:00", "T", "C", "work"));

        let dt = EntryDateTime::parse("01-03-2024 10:00").unwrap();
        let affected = logbook.update(dt, "Other", "new");

        assert_eq!(affected, 0);
        assert_eq!(logbook.len(), 1);
        assert_eq!(logbook.entries()[0].content, "C");
    }

    #[test]
    fn test_update_affects_all_matches() {
        let mut logbook = Logbook::new();
        logbook.add(entry("01-03-2024 10:00", "T", "first", "work"));
        logbook.add(entry("01-03-2024 10:00", "T", "second", "work"));

        let dt = EntryDateTime::parse("01-03-2024 10:00").unwrap();
        let affected = logbook.update(dt, "T", "changed");

        assert_eq!(affected, 2);
        assert!(logbook.entries().iter().all(|e| e.content == "changed"));
    }

    #[test]
    fn test_update_title_match_is_case_sensitive() {
        let mut logbook = Logbook::new();
        logbook.add(entry("01-03-2024 10:00", "Title", "C", "work"));

        let dt = EntryDateTime::parse("01-03-2024 10:00").unwrap();
        assert_eq!(logbook.update(dt, "title", "new"), 0);
    }

    #[test]
    fn test_delete_exact_matches_only() {
        let mut logbook = Logbook::new();
        logbook.add(entry("01-03-2024 10:00", "T", "C", "work"));
        logbook.add(entry("01-03-2024 10:00", "Other", "C", "work"));
        logbook.add(entry("01-03-2024 11:00", "T", "C", "work"));

        let dt = EntryDateTime::parse("01-03-2024 10:00").unwrap();
        let removed = logbook.delete(dt, "T");

        assert_eq!(removed, 1);
        assert_eq!(logbook.len(), 2);
        assert!(logbook
            .entries()
            .iter()
            .all(|e| !(e.title == "T" && e.date_time == dt)));
    }

    #[test]
    fn test_delete_no_match_is_noop() {
        let mut logbook = Logbook::new();
        logbook.add(entry("01-03-2024 10:00", "T", "C", "work"));

        let dt = EntryDateTime::parse("02-03-2024 10:00").unwrap();
        assert_eq!(logbook.delete(dt, "T"), 0);
        assert_eq!(logbook.len(), 1);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut logbook = Logbook::new();
        logbook.add(entry("01-03-2024 10:00", "Working late", "shipping", "x"));
        logbook.add(entry("01-03-2024 11:00", "Lunch", "NETWORK outage", "x"));
        logbook.add(entry("01-03-2024 12:00", "Gym", "leg day", "x"));

        let results = logbook.search("wor");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Working late");
        assert_eq!(results[1].title, "Lunch");
    }

    #[test]
    fn test_search_does_not_match_tag() {
        let mut logbook = Logbook::new();
        logbook.add(entry("01-03-2024 10:00", "Standup", "daily sync", "work"));

        assert!(logbook.search("wor").is_empty());
    }

    #[test]
    fn test_search_empty_keyword_matches_everything() {
        let mut logbook = Logbook::new();
        logbook.add(entry("01-03-2024 10:00", "a", "b", "c"));
        logbook.add(entry("01-03-2024 11:00", "d", "e", "f"));

        assert_eq!(logbook.search("").len(), 2);
    }

    #[test]
    fn test_daily_counts_ascending() {
        let mut logbook = Logbook::new();
        logbook.add(entry("01-03-2024 09:00", "a", "c", "t"));
        logbook.add(entry("01-03-2024 14:00", "b", "c", "t"));
        logbook.add(entry("02-03-2024 08:00", "c", "c", "t"));

        let counts: Vec<(NaiveDate, usize)> = logbook.daily_counts().into_iter().collect();
        assert_eq!(
            counts,
            vec![
                (NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), 2),
                (NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(), 1),
            ]
        );
    }

    #[test]
    fn test_daily_counts_empty() {
        assert!(Logbook::new().daily_counts().is_empty());
    }
}
