//! Markdown output formatter

use super::{join_or_dash, OutputFormatter};
use anyhow::Result;
use phonics_core::{GuideEntry, PhonicsBreakdown};
use std::io::Write;

/// Markdown formatter - breakdowns as one table, guides as one table per word
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    word_count: usize,
    table_open: bool,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            word_count: 0,
            table_open: false,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_breakdown(&mut self, breakdown: &PhonicsBreakdown) -> Result<()> {
        if !self.table_open {
            writeln!(self.writer, "| Word | Syllables | Sounds | Blends | Pattern |")?;
            writeln!(self.writer, "|------|-----------|--------|--------|---------|")?;
            self.table_open = true;
        }
        self.word_count += 1;
        writeln!(
            self.writer,
            "| {} | {} | {} | {} | {} |",
            breakdown.word,
            join_or_dash(&breakdown.syllables, "-"),
            join_or_dash(&breakdown.sounds, " "),
            join_or_dash(&breakdown.blends, ", "),
            breakdown.pattern
        )?;
        Ok(())
    }

    fn format_guide(&mut self, word: &str, guide: &[GuideEntry]) -> Result<()> {
        self.word_count += 1;
        writeln!(self.writer, "## {word}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Letter | Type | Sound |")?;
        writeln!(self.writer, "|--------|------|-------|")?;
        for entry in guide {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                entry.letter, entry.kind, entry.sound
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total words: {}*", self.word_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
