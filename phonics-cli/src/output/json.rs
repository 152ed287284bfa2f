//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use phonics_core::{GuideEntry, PhonicsBreakdown};
use serde::Serialize;
use serde_json::Value;
use std::io::Write;

/// JSON formatter - collects records and writes one array on finish
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    records: Vec<Value>,
}

/// Pronunciation guide record
#[derive(Debug, Serialize)]
struct GuideRecord<'a> {
    word: &'a str,
    guide: &'a [GuideEntry],
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            records: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_breakdown(&mut self, breakdown: &PhonicsBreakdown) -> Result<()> {
        self.records.push(serde_json::to_value(breakdown)?);
        Ok(())
    }

    fn format_guide(&mut self, word: &str, guide: &[GuideEntry]) -> Result<()> {
        self.records
            .push(serde_json::to_value(GuideRecord { word, guide })?);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonics_core::PhonicsAnalyzer;

    #[test]
    fn test_breakdown_array() {
        let analyzer = PhonicsAnalyzer::english();
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter.format_breakdown(&analyzer.breakdown("cat")).unwrap();
        formatter.format_breakdown(&analyzer.breakdown("cake")).unwrap();
        formatter.finish().unwrap();

        let parsed: Value = serde_json::from_slice(&formatter.writer).unwrap();
        let records = parsed.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["syllables"], serde_json::json!(["cat"]));
        assert_eq!(records[0]["pattern"], "CVC (short vowel)");
        assert_eq!(records[1]["pattern"], "CVCe (magic e)");
    }

    #[test]
    fn test_guide_record_uses_type_key() {
        let analyzer = PhonicsAnalyzer::english();
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter
            .format_guide("ship", &analyzer.pronunciation_guide("ship"))
            .unwrap();
        formatter.finish().unwrap();

        let parsed: Value = serde_json::from_slice(&formatter.writer).unwrap();
        assert_eq!(parsed[0]["word"], "ship");
        assert_eq!(parsed[0]["guide"][0]["letter"], "sh");
        assert_eq!(parsed[0]["guide"][0]["type"], "blend");
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter.finish().unwrap();
        assert_eq!(String::from_utf8(formatter.writer).unwrap(), "[]\n");
    }
}
