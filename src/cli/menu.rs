//! Interactive menu loop
//!
//! The whole surface is a numbered stdin/stdout menu; generic over
//! `BufRead`/`Write` so tests can drive it with buffers. EOF on the input
//! ends the loop cleanly.

use crate::application::{
    add_entry, delete_entry, search_entries, update_entry, view_entries, visualize,
};
use crate::cli::output::{format_daily_counts, format_entry_table};
use crate::domain::EntryDateTime;
use crate::error::Result;
use crate::infrastructure::{ChartRenderer, WorkbookRepository};
use std::io::{BufRead, Write};

const MENU: &str = "\n--- LogBook Menu ---\n\
1. Add Entry\n\
2. View Entries\n\
3. Update Entry\n\
4. Delete Entry\n\
5. Search Entries\n\
6. Visualize Entries per Day\n\
7. Exit\n";

const INVALID_DATE_MSG: &str = "Invalid date and time format. Please use DD-MM-YYYY HH:MM.";

/// Run the menu loop until the user exits or the input ends
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    repository: &WorkbookRepository,
    chart: &ChartRenderer,
) -> Result<()> {
    loop {
        write!(out, "{}", MENU)?;
        let Some(choice) = prompt(input, out, "Select an option (1-7): ")? else {
            break;
        };

        match choice.trim() {
            "1" => {
                if add_flow(input, out, repository)?.is_none() {
                    break;
                }
            }
            "2" => {
                let entries = view_entries(repository)?;
                writeln!(out, "Log Entries:")?;
                write!(out, "{}", ensure_newline(format_entry_table(&entries)))?;
            }
            "3" => {
                if update_flow(input, out, repository)?.is_none() {
                    break;
                }
            }
            "4" => {
                if delete_flow(input, out, repository)?.is_none() {
                    break;
                }
            }
            "5" => {
                if search_flow(input, out, repository)?.is_none() {
                    break;
                }
            }
            "6" => {
                let counts = visualize(repository, chart)?;
                write!(out, "{}", ensure_newline(format_daily_counts(&counts)))?;
                writeln!(
                    out,
                    "Visualization saved as '{}' and daily counts written to '{}'.",
                    chart.path().display(),
                    repository.path().display()
                )?;
            }
            "7" => {
                writeln!(out, "Exiting the LogBook application.")?;
                break;
            }
            _ => {
                writeln!(out, "Invalid choice. Please select a valid option.")?;
            }
        }
    }

    Ok(())
}

/// Returns `Ok(None)` when the input ends mid-flow
fn add_flow<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    repository: &WorkbookRepository,
) -> Result<Option<()>> {
    let Some(raw) = prompt(
        input,
        out,
        "Enter date and time (DD-MM-YYYY HH:MM) or press Enter for current time: ",
    )?
    else {
        return Ok(None);
    };

    let date_time = if raw.trim().is_empty() {
        EntryDateTime::now()
    } else {
        match EntryDateTime::parse(raw.trim()) {
            Ok(date_time) => date_time,
            Err(_) => {
                writeln!(out, "{}", INVALID_DATE_MSG)?;
                return Ok(Some(()));
            }
        }
    };

    let Some(title) = prompt(input, out, "Enter title: ")? else {
        return Ok(None);
    };
    let Some(content) = prompt(input, out, "Enter content: ")? else {
        return Ok(None);
    };
    let Some(tag) = prompt(input, out, "Enter tag (e.g., work, personal, idea): ")? else {
        return Ok(None);
    };

    add_entry(repository, date_time, &title, &content, &tag)?;
    writeln!(
        out,
        "Entry added successfully for date and time: {}.",
        date_time
    )?;
    Ok(Some(()))
}

fn update_flow<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    repository: &WorkbookRepository,
) -> Result<Option<()>> {
    let Some(raw) = prompt(
        input,
        out,
        "Enter date and time of the entry to update (DD-MM-YYYY HH:MM): ",
    )?
    else {
        return Ok(None);
    };
    let date_time = match EntryDateTime::parse(raw.trim()) {
        Ok(date_time) => date_time,
        Err(_) => {
            writeln!(out, "{}", INVALID_DATE_MSG)?;
            return Ok(Some(()));
        }
    };

    let Some(title) = prompt(input, out, "Enter title of the entry to update: ")? else {
        return Ok(None);
    };
    let Some(new_content) = prompt(input, out, "Enter new content: ")? else {
        return Ok(None);
    };

    let affected = update_entry(repository, date_time, &title, &new_content)?;
    writeln!(out, "Updated {} matching entry(ies).", affected)?;
    Ok(Some(()))
}

fn delete_flow<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    repository: &WorkbookRepository,
) -> Result<Option<()>> {
    let Some(raw) = prompt(
        input,
        out,
        "Enter date and time of the entry to delete (DD-MM-YYYY HH:MM): ",
    )?
    else {
        return Ok(None);
    };
    let date_time = match EntryDateTime::parse(raw.trim()) {
        Ok(date_time) => date_time,
        Err(_) => {
            writeln!(out, "{}", INVALID_DATE_MSG)?;
            return Ok(Some(()));
        }
    };

    let Some(title) = prompt(input, out, "Enter title of the entry to delete: ")? else {
        return Ok(None);
    };

    let removed = delete_entry(repository, date_time, &title)?;
    writeln!(out, "Deleted {} matching entry(ies).", removed)?;
    Ok(Some(()))
}

fn search_flow<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    repository: &WorkbookRepository,
) -> Result<Option<()>> {
    let Some(keyword) = prompt(input, out, "Enter keyword to search: ")? else {
        return Ok(None);
    };

    let results = search_entries(repository, &keyword)?;
    writeln!(out, "Search Results:")?;
    write!(out, "{}", ensure_newline(format_entry_table(&results)))?;
    Ok(Some(()))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> Result<Option<String>> {
    write!(out, "{}", message)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn ensure_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
