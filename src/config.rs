//! User configuration stored in the platform config directory.

use crate::index::{RecordOrder, DEFAULT_RECORDS_PER_LINE};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "invidx";
const CONFIG_FILE: &str = "config.json";

/// Settings shared by the `index` and `search` commands. Command-line flags
/// take precedence over these values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Record ordering used when building (`"ranked"` or `"legacy"`)
    #[serde(default)]
    pub record_order: RecordOrder,

    /// Record pairs per data line in written index files
    #[serde(default = "default_records_per_line")]
    pub records_per_line: usize,

    /// Follow symbolic links while walking a directory
    #[serde(default)]
    pub follow_links: bool,

    /// Lowercase query lines so they match folded document text
    #[serde(default = "default_true")]
    pub fold_query_case: bool,

    /// Highlight result paths on a terminal
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_records_per_line() -> usize {
    DEFAULT_RECORDS_PER_LINE
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            record_order: RecordOrder::default(),
            records_per_line: default_records_per_line(),
            follow_links: false,
            fold_query_case: default_true(),
            color: default_true(),
        }
    }
}

impl AppConfig {
    /// Load from `path`, or from the default location when `path` is `None`.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => match default_config_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse config file {}", config_path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(content)?;
        anyhow::ensure!(config.records_per_line > 0, "records_per_line must be at least 1");
        Ok(config)
    }
}

/// `<config dir>/invidx/config.json`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
}
