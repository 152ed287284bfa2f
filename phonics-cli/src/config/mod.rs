//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CliError;
use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Lookup table configuration
    #[serde(default)]
    pub tables: TablesSource,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Where the lookup tables come from
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct TablesSource {
    /// Tables file replacing the built-in English tables
    pub path: Option<PathBuf>,
}

impl CliConfig {
    /// Load a config file, or the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        log::debug!("Loaded CLI config from {}", path.display());
        Ok(config)
    }

    /// The configured default output format
    pub fn default_format(&self) -> Result<OutputFormat> {
        OutputFormat::parse(&self.output.default_format).ok_or_else(|| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                self.output.default_format
            ))
            .into()
        })
    }
}
