//! Output formatting module

use anyhow::{Context, Result};
use phonics_core::{GuideEntry, PhonicsBreakdown};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one word's breakdown
    fn format_breakdown(&mut self, breakdown: &PhonicsBreakdown) -> Result<()>;

    /// Format and output one word's pronunciation guide
    fn format_guide(&mut self, word: &str, guide: &[GuideEntry]) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One block per word
    Text,
    /// JSON array of records
    Json,
    /// Markdown tables
    Markdown,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Markdown,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Plain text, one block per word",
            OutputFormat::Json => "JSON array with one record per word",
            OutputFormat::Markdown => "Markdown tables",
        }
    }

    /// Parse a format name as written in a config file
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Destination for formatted output
pub type Sink = Box<dyn Write + Send + Sync>;

/// Open the output file, or stdout when no path is given
pub fn open_sink(path: Option<&Path>) -> Result<Sink> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Build the formatter for `format`
pub fn create_formatter(
    format: OutputFormat,
    sink: Sink,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(sink)),
        OutputFormat::Json => Box::new(JsonFormatter::new(sink, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(sink)),
    }
}

/// "-" for an empty list, else the items joined by `sep`
pub(crate) fn join_or_dash(items: &[String], sep: &str) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(sep)
    }
}
