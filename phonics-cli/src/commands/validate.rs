//! Validate command implementation

use anyhow::Result;
use clap::Args;
use phonics_core::Tables;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to lookup tables file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub tables_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating tables configuration: {}",
            self.tables_config.display()
        );

        match Tables::from_file(&self.tables_config) {
            Ok(tables) => {
                println!("✓ Configuration is valid!");
                println!("  Tables code: {}", tables.code());
                println!("  Tables name: {}", tables.name());
                println!("  Prefixes: {}", tables.prefixes().len());
                println!("  Suffixes: {}", tables.suffixes().len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_valid_config() {
        let toml_content = r#"
[metadata]
code = "test"
name = "Test Tables"

[affixes]
prefixes = ["un", "re"]
suffixes = ["ness"]

[patterns]
vowel_teams = ["ai", "ee"]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            tables_config: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_config() {
        let toml_content = r#"
[metadata]
code = "test"
name = "Test"

[patterns]
vowel_teams = ["aie"]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            tables_config: temp_file.path().to_path_buf(),
        };

        let err = args.execute().unwrap_err();
        assert!(err.to_string().starts_with("Validation failed"));
    }
}
