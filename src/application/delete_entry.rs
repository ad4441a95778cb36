//! Delete entry use case

use crate::domain::EntryDateTime;
use crate::error::Result;
use crate::infrastructure::WorkbookRepository;

/// Remove every entry matching `(date_time, title)` exactly and persist the
/// table. Returns the number of rows removed; a miss is a successful no-op
/// with 0.
pub fn delete_entry(
    repository: &WorkbookRepository,
    date_time: EntryDateTime,
    title: &str,
) -> Result<usize> {
    let mut logbook = repository.load()?;
    let removed = logbook.delete(date_time, title);
    repository.save(&logbook)?;
    Ok(removed)
}
