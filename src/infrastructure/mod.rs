//! Infrastructure layer - External I/O and persistence

pub mod chart;
pub mod config;
pub mod repository;

pub use chart::ChartRenderer;
pub use config::{resolve_root, Config};
pub use repository::WorkbookRepository;
