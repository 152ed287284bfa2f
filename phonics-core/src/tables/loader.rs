//! Tables loader
//!
//! The built-in English tables are built on first access and shared;
//! external tables files are parsed and validated on every call.

use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use super::{Tables, TablesConfig};
use crate::error::{PhonicsError, Result};

/// Built-in tables
static ENGLISH: OnceLock<Arc<Tables>> = OnceLock::new();

/// Shared built-in English tables
pub fn english() -> Arc<Tables> {
    ENGLISH
        .get_or_init(|| Arc::new(Tables::build(&TablesConfig::english())))
        .clone()
}

impl TablesConfig {
    /// Parse a configuration from TOML text without validating it
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Read a configuration file without validating it
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| PhonicsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Tables {
    /// Parse and validate tables from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Self::from_config(&TablesConfig::from_toml_str(toml_str)?)
    }

    /// Load and validate tables from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let tables = Self::from_config(&TablesConfig::from_file(path)?)?;
        tracing::debug!(path = %path.display(), code = tables.code(), "loaded tables file");
        Ok(tables)
    }
}
