//! logbook - Interactive personal logbook
//!
//! A menu-driven journal application that keeps dated entries
//! (date/time, title, content, tag) in a spreadsheet workbook and
//! exports a per-day entry-count bar chart.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::LogbookError;
