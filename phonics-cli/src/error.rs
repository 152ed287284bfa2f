//! Error handling for the CLI application

use std::fmt;

/// User-facing CLI errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Neither words nor input files produced anything to analyze
    NoWords,
    /// Letter index past the end of the word
    IndexOutOfRange { word: String, index: usize },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::NoWords => write!(f, "No words to analyze"),
            CliError::IndexOutOfRange { word, index } => {
                write!(f, "Letter index {index} is out of range for \"{word}\"")
            }
        }
    }
}

impl std::error::Error for CliError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("words.txt".to_string());
        assert_eq!(error.to_string(), "File not found: words.txt");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("unknown format".to_string());
        assert_eq!(error.to_string(), "Configuration error: unknown format");
    }

    #[test]
    fn test_index_out_of_range_display() {
        let error = CliError::IndexOutOfRange {
            word: "cat".to_string(),
            index: 5,
        };
        assert_eq!(
            error.to_string(),
            "Letter index 5 is out of range for \"cat\""
        );
    }

    #[test]
    fn test_error_converts_to_anyhow() {
        let result: anyhow::Result<()> = Err(CliError::NoWords.into());
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "No words to analyze");
        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
