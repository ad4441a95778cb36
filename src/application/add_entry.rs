//! Add entry use case

use crate::domain::{Entry, EntryDateTime};
use crate::error::Result;
use crate::infrastructure::WorkbookRepository;

/// Append one entry and persist the re-sorted table
pub fn add_entry(
    repository: &WorkbookRepository,
    date_time: EntryDateTime,
    title: &str,
    content: &str,
    tag: &str,
) -> Result<()> {
    let mut logbook = repository.load()?;
    logbook.add(Entry::new(date_time, title, content, tag));
    repository.save(&logbook)
}
