//! # Configuration
//!
//! Settings live in `config.json` inside the config directory: `$STATDEX_HOME`
//! when set, otherwise the OS config directory. Missing files and missing
//! keys fall back to compiled defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data-file` | `pokemon.json` | JSON array of records to load at startup |
//! | `page-size` | `5` | Rows per page, or `all` |

use crate::commands::paginate::PageSize;
use crate::error::{Result, StatdexError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_DATA_FILE: &str = "pokemon.json";

/// Keys understood by [`TableConfig::get`] and [`TableConfig::set`].
pub const CONFIG_KEYS: [&str; 2] = ["data-file", "page-size"];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    /// Record collection to load. Relative paths resolve against the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    #[serde(default)]
    pub page_size: PageSize,
}

impl TableConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: TableConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn data_file(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file().display().to_string()),
            "page-size" => Some(self.page_size.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(StatdexError::Config("data-file cannot be empty".into()));
                }
                self.data_file = Some(PathBuf::from(value));
            }
            "page-size" => {
                self.page_size = value.parse().map_err(StatdexError::Config)?;
            }
            _ => return Err(StatdexError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }
}
