//! Search entries use case

use crate::domain::Entry;
use crate::error::Result;
use crate::infrastructure::WorkbookRepository;

/// Entries whose title or content contains `keyword` as a case-insensitive
/// substring, in table order.
pub fn search_entries(repository: &WorkbookRepository, keyword: &str) -> Result<Vec<Entry>> {
    let logbook = repository.load()?;
    Ok(logbook.search(keyword).into_iter().cloned().collect())
}
