//! Initialize logbook use case

use crate::error::Result;
use crate::infrastructure::WorkbookRepository;

/// Create the workbook with an empty entry table if it does not exist yet.
/// Idempotent; an existing file is left untouched.
pub fn init(repository: &WorkbookRepository) -> Result<()> {
    repository.initialize()
}
