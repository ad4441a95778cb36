//! Update entry use case

use crate::domain::EntryDateTime;
use crate::error::Result;
use crate::infrastructure::WorkbookRepository;

/// Set the content of every entry matching `(date_time, title)` exactly and
/// persist the table. Returns the number of rows affected; a miss is a
/// successful no-op with 0.
pub fn update_entry(
    repository: &WorkbookRepository,
    date_time: EntryDateTime,
    title: &str,
    new_content: &str,
) -> Result<usize> {
    let mut logbook = repository.load()?;
    let affected = logbook.update(date_time, title, new_content);
    repository.save(&logbook)?;
    Ok(affected)
}
