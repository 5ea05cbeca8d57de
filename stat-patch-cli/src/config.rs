//! Configuration loading and parsing

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use stat_patch::{EntryTable, GeneratorConfig, ReplacementEntry};
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration (loaded from a TOML file)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub output: OutputConfig,
    /// Replaces the built-in table when non-empty
    #[serde(default)]
    pub entries: Vec<ReplacementEntry>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Entry table to generate from
    pub fn entry_table(&self) -> Result<EntryTable> {
        if self.entries.is_empty() {
            return Ok(EntryTable::builtin());
        }
        EntryTable::from_entries(self.entries.clone()).context("Invalid [[entries]] in config")
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}
