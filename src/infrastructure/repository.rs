//! Workbook repository
//!
//! All access to the storage file goes through [`WorkbookRepository`]:
//! callers load a full [`Logbook`] snapshot, mutate it in memory, and save
//! it back. Every save rewrites the whole workbook; there is no locking or
//! atomic replace (the tool is single-user by design).

use crate::domain::{Entry, EntryDateTime, Logbook, DATE_FORMAT};
use crate::error::{LogbookError, Result};
use calamine::{open_workbook, Data, Reader, Xlsx};
use chrono::NaiveDate;
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

/// Name of the primary entry sheet
pub const ENTRY_SHEET: &str = "Entries";

/// Column headers of the entry sheet, in order
pub const ENTRY_COLUMNS: [&str; 4] = ["Date", "Title", "Content", "Tag"];

/// Name of the derived daily-count sheet
pub const COUNTS_SHEET: &str = "Daily Entry Counts";

/// Column headers of the daily-count sheet, in order
pub const COUNTS_COLUMNS: [&str; 2] = ["Date", "Entry Count"];

/// Repository owning the workbook path
#[derive(Debug, Clone)]
pub struct WorkbookRepository {
    path: PathBuf,
}

impl WorkbookRepository {
    pub fn new(path: PathBuf) -> Self {
        WorkbookRepository { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create the workbook with a header-only entry sheet if it is absent.
    /// Idempotent; existing files are left untouched and not validated.
    pub fn initialize(&self) -> Result<()> {
        if self.exists() {
            return Ok(());
        }
        self.write(&Logbook::new(), None)
    }

    /// Load the full entry table from the first sheet of the workbook.
    ///
    /// Fails on a missing or unreadable file, on unexpected columns, and on
    /// any date cell that does not match `DD-MM-YYYY HH:MM`.
    pub fn load(&self) -> Result<Logbook> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path)?;
        let range = match workbook.worksheet_range_at(0) {
            Some(range) => range?,
            None => {
                return Err(LogbookError::Storage(format!(
                    "workbook {} has no sheets",
                    self.path.display()
                )))
            }
        };

        let mut rows = range.rows();
        let header: Vec<String> = rows
            .next()
            .map(|row| row.iter().map(cell_text).collect())
            .unwrap_or_default();
        if header.len() != ENTRY_COLUMNS.len()
            || !header.iter().map(String::as_str).eq(ENTRY_COLUMNS.iter().copied())
        {
            return Err(LogbookError::Storage(format!(
                "unexpected entry sheet columns {:?}, expected {:?}",
                header, ENTRY_COLUMNS
            )));
        }

        let mut entries = Vec::new();
        for row in rows {
            if row.iter().all(is_blank_cell) {
                continue;
            }
            let date_time = EntryDateTime::parse(&cell_at(row, 0))?;
            entries.push(Entry {
                date_time,
                title: cell_at(row, 1),
                content: cell_at(row, 2),
                tag: cell_at(row, 3),
            });
        }

        Ok(Logbook::from_entries(entries))
    }

    /// Persist the entry table, rewriting the whole workbook.
    ///
    /// Only the entry sheet is written, so a previously exported
    /// daily-count sheet is dropped until the next visualize run.
    pub fn save(&self, logbook: &Logbook) -> Result<()> {
        self.write(logbook, None)
    }

    /// Persist the entry table together with the daily-count sheet
    pub fn save_with_counts(
        &self,
        logbook: &Logbook,
        counts: &[(NaiveDate, usize)],
    ) -> Result<()> {
        self.write(logbook, Some(counts))
    }

    fn write(&self, logbook: &Logbook, counts: Option<&[(NaiveDate, usize)]>) -> Result<()> {
        let mut workbook = Workbook::new();

        let sheet = workbook.add_worksheet();
        sheet.set_name(ENTRY_SHEET)?;
        for (col, name) in ENTRY_COLUMNS.iter().enumerate() {
            sheet.write_string(0, col as u16, *name)?;
        }
        for (row, entry) in logbook.entries().iter().enumerate() {
            let row = row as u32 + 1;
            sheet.write_string(row, 0, entry.date_time.to_string())?;
            sheet.write_string(row, 1, entry.title.as_str())?;
            sheet.write_string(row, 2, entry.content.as_str())?;
            sheet.write_string(row, 3, entry.tag.as_str())?;
        }

        if let Some(counts) = counts {
            let sheet = workbook.add_worksheet();
            sheet.set_name(COUNTS_SHEET)?;
            for (col, name) in COUNTS_COLUMNS.iter().enumerate() {
                sheet.write_string(0, col as u16, *name)?;
            }
            for (row, (date, count)) in counts.iter().enumerate() {
                let row = row as u32 + 1;
                sheet.write_string(row, 0, date.format(DATE_FORMAT).to_string())?;
                sheet.write_number(row, 1, *count as f64)?;
            }
        }

        workbook.save(&self.path)?;
        Ok(())
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn is_blank_cell(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn cell_at(row: &[Data], col: usize) -> String {
    row.get(col).map(cell_text).unwrap_or_default()
}
