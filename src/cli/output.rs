//! Output formatting utilities

use crate::domain::{Entry, DATE_FORMAT};
use chrono::NaiveDate;

/// Shown in place of an empty field
const PLACEHOLDER: &str = "-";

/// Format entries as an aligned table with Date, Title, Content and Tag
/// columns
pub fn format_entry_table(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let headers = ["Date", "Title", "Content", "Tag"];
    let rows: Vec<[String; 4]> = entries
        .iter()
        .map(|entry| {
            [
                entry.date_time.to_string(),
                display_field(&entry.title),
                display_field(&entry.content),
                display_field(&entry.tag),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut output = String::new();
    output.push_str(&format_row(&headers.map(String::from), &widths));
    output.push('\n');
    for row in &rows {
        output.push_str(&format_row(row, &widths));
        output.push('\n');
    }
    output
}

/// Format daily counts as `DD-MM-YYYY  count` lines in ascending date order
pub fn format_daily_counts(counts: &[(NaiveDate, usize)]) -> String {
    if counts.is_empty() {
        return "No entries to count".to_string();
    }

    let mut output = String::new();
    for (date, count) in counts {
        output.push_str(&format!("{}  {}\n", date.format(DATE_FORMAT), count));
    }
    output
}

fn display_field(value: &str) -> String {
    if value.trim().is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(&format!("{:<width$}", cell, width = widths[i]));
    }
    line.trim_end().to_string()
}
