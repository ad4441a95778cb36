//! CLI layer - Interactive surface

pub mod menu;
pub mod output;

pub use output::{format_daily_counts, format_entry_table};
