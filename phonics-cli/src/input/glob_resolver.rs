//! Word file resolution from glob patterns

use anyhow::{Context, Result};
use glob::glob;
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::error::CliError;

/// Expand patterns to word files, sorted and deduplicated.
///
/// A pattern matching nothing is logged and skipped; it is an error only
/// when no pattern matches any file.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = BTreeSet::new();

    for pattern in patterns {
        let paths =
            glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern} ({e})")))?;

        let before = files.len();
        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() {
                files.insert(path);
            }
        }

        match files.len() - before {
            0 => log::warn!("Pattern '{pattern}' matched no new files"),
            n => log::debug!("Pattern '{pattern}' matched {n} files"),
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    Ok(files.into_iter().collect())
}
