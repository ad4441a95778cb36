//! Error types for logbook

use thiserror::Error;

/// Main error type for the logbook application
#[derive(Debug, Error)]
pub enum LogbookError {
    #[error("Invalid date/time: '{0}'")]
    InvalidDateTime(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Failed to read workbook: {0}")]
    WorkbookRead(#[from] calamine::XlsxError),

    #[error("Failed to write workbook: {0}")]
    WorkbookWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("Chart error: {0}")]
    Chart(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl LogbookError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            LogbookError::Storage(_)
            | LogbookError::WorkbookRead(_)
            | LogbookError::WorkbookWrite(_) => 2,
            LogbookError::InvalidDateTime(_) => 3,
            LogbookError::Chart(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            LogbookError::InvalidDateTime(input) => {
                format!(
                    "Invalid date/time: '{}'\n\n\
                    Expected format: DD-MM-YYYY HH:MM\n\
                    Example: 17-01-2025 09:30",
                    input
                )
            }
            LogbookError::Storage(msg) => {
                format!(
                    "Storage error: {}\n\n\
                    Suggestions:\n\
                    • The workbook may have been edited outside logbook\n\
                    • The entry sheet must have the columns Date, Title, Content, Tag\n\
                    • Move the file aside and restart to create a fresh logbook",
                    msg
                )
            }
            LogbookError::WorkbookRead(e) => {
                format!(
                    "Failed to read workbook: {}\n\n\
                    Suggestions:\n\
                    • Check that the file is a valid .xlsx workbook\n\
                    • Move the file aside and restart to create a fresh logbook",
                    e
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using LogbookError
pub type Result<T> = std::result::Result<T, LogbookError>;
