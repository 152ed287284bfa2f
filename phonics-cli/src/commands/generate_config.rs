//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use phonics_core::TablesConfig;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Tables code for the new configuration
    #[arg(short = 'l', long, value_name = "CODE", default_value = "custom")]
    pub code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating tables configuration template...");
        println!("  Tables code: {}", self.code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the tables to add affixes, blends or pronunciations");
        println!("2. Validate your configuration:");
        println!("   phonics validate -c {}", self.output.display());
        println!("3. Use it for analysis:");
        println!(
            "   phonics analyze -w happy --tables {}",
            self.output.display()
        );

        Ok(())
    }

    /// Built-in English tables under the requested code
    fn generate_template(&self) -> Result<String> {
        let mut config = TablesConfig::english();
        config.metadata.code = self.code.clone();
        config.metadata.name = format!("{} (from built-in English)", self.code);

        let body = config.to_toml_string()?;
        Ok(format!(
            "# Phonics lookup tables \"{}\"\n\
             # Entries are lowercase ASCII. Blends, digraphs and vowel teams are\n\
             # two letters; sound patterns are three.\n\n{body}",
            self.code
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonics_core::Tables;
    use tempfile::TempDir;

    #[test]
    fn test_generate_template() {
        let args = GenerateConfigArgs {
            code: "test".to_string(),
            output: PathBuf::from("test.toml"),
        };

        let template = args.generate_template().unwrap();
        assert!(template.contains("code = \"test\""));
        assert!(template.contains("[metadata]"));
        assert!(template.contains("[affixes]"));
        assert!(template.contains("[speech]"));
    }

    #[test]
    fn test_generated_file_validates() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("tables.toml");

        let args = GenerateConfigArgs {
            code: "en-custom".to_string(),
            output: output_path.clone(),
        };
        args.execute().unwrap();

        let tables = Tables::from_file(&output_path).unwrap();
        assert_eq!(tables.code(), "en-custom");
        assert_eq!(
            tables.prefixes().len(),
            Tables::from_config(&TablesConfig::english())
                .unwrap()
                .prefixes()
                .len()
        );
    }
}
