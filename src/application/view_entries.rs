//! View entries use case

use crate::domain::Entry;
use crate::error::Result;
use crate::infrastructure::WorkbookRepository;

/// All entries in date/time order. Read-only.
pub fn view_entries(repository: &WorkbookRepository) -> Result<Vec<Entry>> {
    Ok(repository.load()?.entries().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{add_entry, init};
    use crate::domain::EntryDateTime;
    use tempfile::TempDir;

    #[test]
    fn test_view_empty() {
        let temp = TempDir::new().unwrap();
        let repo = WorkbookRepository::new(temp.path().join("logbook.xlsx"));
        init(&repo).unwrap();

        assert!(view_entries(&repo).unwrap().is_empty());
    }

    #[test]
    fn test_view_returns_sorted_entries() {
        let temp = TempDir::new().unwrap();
        let repo = WorkbookRepository::new(temp.path().join("logbook.xlsx"));
        init(&repo).unwrap();

        add_entry(
            &repo,
            EntryDateTime::parse("02-03-2024 08:00").unwrap(),
            "second",
            "c",
            "t",
        )
        .unwrap();
        add_entry(
            &repo,
            EntryDateTime::parse("01-03-2024 09:00").unwrap(),
            "first",
            "c",
            "t",
        )
        .unwrap();

        let entries = view_entries(&repo).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "first");
        assert_eq!(entries[1].title, "second");
    }
}
