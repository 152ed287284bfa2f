//! Guide command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::CommonArgs;
use crate::output::{create_formatter, open_sink, OutputFormat};

/// Arguments for the guide command
#[derive(Debug, Args)]
pub struct GuideArgs {
    /// Words to guide
    #[arg(short, long, value_name = "WORD", required = true)]
    pub word: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl GuideArgs {
    /// Execute the guide command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();

        let config = self.common.load_config()?;
        let analyzer = self.common.load_analyzer(&config)?;
        let format = self.common.resolve_format(self.format, &config)?;

        let sink = open_sink(self.output.as_deref())?;
        let mut formatter = create_formatter(format, sink, config.output.pretty_json);
        for word in &self.word {
            let word = word.to_lowercase();
            formatter.format_guide(&word, &analyzer.pronunciation_guide(&word))?;
        }
        formatter.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_guide_markdown_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("guide.md");

        let args = GuideArgs {
            word: vec!["Cake".to_string()],
            output: Some(output.clone()),
            format: Some(OutputFormat::Markdown),
            common: CommonArgs {
                quiet: true,
                ..Default::default()
            },
        };
        args.execute().unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("## cake"));
        assert!(content.contains("| c | consonant | kuh |"));
        assert!(content.contains("| e | silent |  |"));
    }
}
