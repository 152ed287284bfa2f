//! Analyze command implementation

use anyhow::Result;
use clap::{ArgGroup, Args};
use std::path::PathBuf;

use super::CommonArgs;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader, WordExtractor};
use crate::output::{create_formatter, open_sink, OutputFormat};
use crate::progress::ProgressReporter;

/// Arguments for the analyze command
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("source").required(true).multiple(true).args(["word", "input"])))]
pub struct AnalyzeArgs {
    /// Words to analyze
    #[arg(short, long, value_name = "WORD")]
    pub word: Vec<String>,

    /// Text files or patterns to take words from (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();

        log::info!("Starting word analysis");
        log::debug!("Arguments: {:?}", self);

        let config = self.common.load_config()?;
        let analyzer = self.common.load_analyzer(&config)?;
        let format = self.common.resolve_format(self.format, &config)?;

        let words = self.collect_words()?;
        if words.is_empty() {
            return Err(CliError::NoWords.into());
        }
        log::info!("Analyzing {} words", words.len());

        let sink = open_sink(self.output.as_deref())?;
        let mut formatter = create_formatter(format, sink, config.output.pretty_json);
        for word in &words {
            formatter.format_breakdown(&analyzer.breakdown(word))?;
        }
        formatter.finish()?;

        if let Some(path) = &self.output {
            log::info!("Wrote {} breakdowns to {}", words.len(), path.display());
        }
        Ok(())
    }

    /// Command-line words first, then words from files, each once
    fn collect_words(&self) -> Result<Vec<String>> {
        let mut extractor = WordExtractor::new()?;
        let mut words: Vec<String> = self
            .word
            .iter()
            .filter_map(|word| extractor.add(word))
            .collect();

        if self.input.is_empty() {
            return Ok(words);
        }

        let files = resolve_patterns(&self.input)?;
        let mut progress = ProgressReporter::new(self.common.quiet);
        progress.init_files(files.len() as u64);

        for path in &files {
            let text = FileReader::read_text(path)?;
            let found = extractor.extract(&text);
            log::debug!("{}: {} new words", path.display(), found.len());
            progress.file_completed(&path.display().to_string(), found.len());
            words.extend(found);
        }
        progress.finish();

        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(words: &[&str], input: Vec<String>) -> AnalyzeArgs {
        AnalyzeArgs {
            word: words.iter().map(|w| w.to_string()).collect(),
            input,
            output: None,
            format: None,
            common: CommonArgs {
                quiet: true,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_collect_words_dedups() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("words.txt");
        fs::write(&file, "The happy rabbit. The little rabbit!").unwrap();

        let words = args(&["Happy", "cat"], vec![file.display().to_string()])
            .collect_words()
            .unwrap();
        assert_eq!(words, vec!["happy", "cat", "the", "rabbit", "little"]);
    }

    #[test]
    fn test_execute_writes_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.json");

        let mut analyze = args(&["fairies"], Vec::new());
        analyze.output = Some(output.clone());
        analyze.format = Some(OutputFormat::Json);
        analyze.execute().unwrap();

        let content = fs::read_to_string(&output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed[0]["syllables"], serde_json::json!(["fair", "ies"]));
    }

    #[test]
    fn test_empty_file_has_no_words() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("empty.txt");
        fs::write(&file, "123 456").unwrap();

        let err = args(&[], vec![file.display().to_string()])
            .execute()
            .unwrap_err();
        assert!(err.to_string().contains("No words"));
    }
}
