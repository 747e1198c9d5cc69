use crate::error::{Result, TickoffError};
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for tickoff, stored as `config.json` in the data directory.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TickoffConfig {
    /// File name (or path relative to the data directory) of the todo list
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Whether the CLI colors its output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_color() -> bool {
    true
}

impl Default for TickoffConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            color: default_color(),
        }
    }
}

impl TickoffConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TickoffError::Io)?;
        let config: TickoffConfig =
            serde_json::from_str(&content).map_err(TickoffError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.data_file.trim().is_empty() {
            return Err(TickoffError::Config("data_file cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Where the todo list lives for a given data directory.
    pub fn data_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.data_file)
    }
}
