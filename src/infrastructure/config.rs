//! Configuration management

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Optional per-directory config file name
pub const CONFIG_FILE: &str = "logbook.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Workbook file name, relative to the data directory
    pub storage_file: String,
    /// Chart output file name, relative to the data directory
    pub chart_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_file: "logbook.xlsx".to_string(),
            chart_file: "log.svg".to_string(),
        }
    }
}

impl Config {
    /// Load config from `logbook.toml` in the given directory.
    /// Falls back to defaults when the file is absent.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&config_path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Save config to `logbook.toml` in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path.join(CONFIG_FILE), contents)?;
        Ok(())
    }

    pub fn storage_path(&self, root: &Path) -> PathBuf {
        root.join(&self.storage_file)
    }

    pub fn chart_path(&self, root: &Path) -> PathBuf {
        root.join(&self.chart_file)
    }
}

/// Resolve the data directory: `LOGBOOK_DIR` if set, else the current directory
pub fn resolve_root() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("LOGBOOK_DIR") {
        return Ok(PathBuf::from(dir));
    }
    Ok(std::env::current_dir()?)
}
