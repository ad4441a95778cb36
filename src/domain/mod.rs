//! Domain layer - Business logic and domain models

pub mod entry;
pub mod logbook;

pub use entry::{Entry, EntryDateTime, DATE_FORMAT, DATE_TIME_FORMAT};
pub use logbook::Logbook;
