//! Plain text output formatter

use super::{join_or_dash, OutputFormatter};
use anyhow::Result;
use phonics_core::{GuideEntry, PhonicsBreakdown};
use std::io::Write;

/// Plain text formatter - one indented block per word
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_breakdown(&mut self, breakdown: &PhonicsBreakdown) -> Result<()> {
        writeln!(self.writer, "{}", breakdown.word)?;
        writeln!(
            self.writer,
            "  syllables: {}",
            join_or_dash(&breakdown.syllables, "-")
        )?;
        writeln!(
            self.writer,
            "  sounds:    {}",
            join_or_dash(&breakdown.sounds, " ")
        )?;
        writeln!(
            self.writer,
            "  blends:    {}",
            join_or_dash(&breakdown.blends, ", ")
        )?;
        writeln!(self.writer, "  pattern:   {}", breakdown.pattern)?;
        Ok(())
    }

    fn format_guide(&mut self, word: &str, guide: &[GuideEntry]) -> Result<()> {
        writeln!(self.writer, "{word}")?;
        for entry in guide {
            let line = format!(
                "  {:<4} {:<10} {}",
                entry.letter,
                entry.kind.to_string(),
                entry.sound
            );
            writeln!(self.writer, "{}", line.trim_end())?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
