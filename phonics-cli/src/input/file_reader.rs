//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::CliError;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(CliError::FileNotFound(path.display().to_string()).into())
            }
            Err(e) => {
                Err(e).with_context(|| format!("Failed to read file: {}", path.display()))
            }
        }
    }
}
