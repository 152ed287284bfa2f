//! Error types for table loading and speech delivery
//!
//! Text analysis itself is total and never fails; only the edges that touch
//! files or an external speech engine return errors.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for phonics operations
#[derive(Debug, Error)]
pub enum PhonicsError {
    /// Table configuration failed validation
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A tables file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A tables file is not valid TOML for the schema
    #[error("Failed to parse tables: {0}")]
    Parse(#[from] toml::de::Error),

    /// Tables could not be rendered as TOML
    #[error("Failed to render tables: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The injected speaker reported a failure
    #[error("Speech error: {0}")]
    Speech(String),
}

/// Result type for phonics operations
pub type Result<T> = std::result::Result<T, PhonicsError>;
