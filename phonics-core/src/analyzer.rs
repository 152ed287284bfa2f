//! Analyzer facade over one set of tables

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use crate::affix::{strip_affixes, AffixSplit};
use crate::error::Result;
use crate::pattern::{classify_pattern, PatternLabel};
use crate::sounds::{pronunciation_guide, tokenize_sounds, GuideEntry};
use crate::speech::{
    deliver, phonics_hint, plan_phonics, plan_phonics_hint, plan_syllables, rewrite_for_speech,
    PhonicsHint, Speaker, Utterance,
};
use crate::syllable::{locate_syllable_at_letter_index, syllabify_root, syllables, SyllablePosition};
use crate::tables::{self, Tables};

/// Everything the display needs to know about a word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhonicsBreakdown {
    /// Lowercased input
    pub word: String,
    pub syllables: Vec<String>,
    pub sounds: Vec<String>,
    /// Blends, digraphs and vowel teams found in the word, sorted
    pub blends: Vec<String>,
    pub pattern: PatternLabel,
}

/// Phonics analyzer
///
/// Holds shared, read-only tables; cloning is cheap and every method is a
/// pure function of its arguments.
#[derive(Debug, Clone)]
pub struct PhonicsAnalyzer {
    tables: Arc<Tables>,
}

impl Default for PhonicsAnalyzer {
    fn default() -> Self {
        Self::english()
    }
}

impl PhonicsAnalyzer {
    /// Create an analyzer over the given tables
    pub fn new(tables: Arc<Tables>) -> Self {
        Self { tables }
    }

    /// Analyzer over the built-in English tables
    pub fn english() -> Self {
        Self::new(tables::english())
    }

    /// Analyzer over a validated tables file
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::new(Arc::new(Tables::from_file(path)?)))
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    pub fn breakdown(&self, word: &str) -> PhonicsBreakdown {
        let lower = word.to_lowercase();
        PhonicsBreakdown {
            syllables: self.syllables(&lower),
            sounds: self.tokenize_sounds(&lower),
            blends: self.tables.reported_groups.found_in(&lower),
            pattern: self.classify_pattern(&lower),
            word: lower,
        }
    }

    pub fn pronunciation_guide(&self, word: &str) -> Vec<GuideEntry> {
        pronunciation_guide(&self.tables, word)
    }

    pub fn syllables(&self, word: &str) -> Vec<String> {
        syllables(&self.tables, word)
    }

    pub fn syllable_at_index(&self, word: &str, letter_index: usize) -> Option<SyllablePosition> {
        locate_syllable_at_letter_index(&self.syllables(word), letter_index)
    }

    pub fn phonics_hint(&self, word: &str, letter_index: usize) -> Option<PhonicsHint> {
        phonics_hint(&self.tables, word, letter_index)
    }

    pub fn strip_affixes(&self, word: &str) -> AffixSplit {
        strip_affixes(&self.tables, word)
    }

    pub fn syllabify_root(&self, stem: &str) -> Vec<String> {
        syllabify_root(&self.tables, stem)
    }

    pub fn classify_pattern(&self, word: &str) -> PatternLabel {
        classify_pattern(&self.tables, word)
    }

    pub fn tokenize_sounds(&self, word: &str) -> Vec<String> {
        tokenize_sounds(&self.tables, word)
    }

    pub fn rewrite_for_speech(&self, syllable: &str) -> String {
        rewrite_for_speech(&self.tables, syllable)
    }

    pub fn plan_phonics(&self, word: &str) -> Vec<Utterance> {
        plan_phonics(&self.tables, word)
    }

    pub fn plan_syllables(&self, word: &str) -> Vec<Utterance> {
        plan_syllables(&self.tables, word)
    }

    pub fn plan_phonics_hint(&self, word: &str, letter_index: usize) -> Option<Utterance> {
        plan_phonics_hint(&self.tables, word, letter_index)
    }

    /// Sound out each syllable, then say the word
    pub fn speak_phonics<S: Speaker + ?Sized>(&self, word: &str, speaker: &mut S) -> Result<()> {
        deliver(speaker, &self.plan_phonics(word))
    }

    /// Sound out each syllable
    pub fn speak_syllables<S: Speaker + ?Sized>(&self, word: &str, speaker: &mut S) -> Result<()> {
        deliver(speaker, &self.plan_syllables(word))
    }

    /// Say the syllable holding `letter_index`. Returns `Ok(false)` and says
    /// nothing when the index is out of range.
    pub fn speak_phonics_hint<S: Speaker + ?Sized>(
        &self,
        word: &str,
        letter_index: usize,
        speaker: &mut S,
    ) -> Result<bool> {
        match self.plan_phonics_hint(word, letter_index) {
            Some(utterance) => {
                deliver(speaker, std::slice::from_ref(&utterance))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown() {
        let analyzer = PhonicsAnalyzer::english();
        let breakdown = analyzer.breakdown("Rain");
        assert_eq!(breakdown.word, "rain");
        assert_eq!(breakdown.syllables, vec!["rain"]);
        assert_eq!(breakdown.sounds, vec!["r", "ai", "n"]);
        assert_eq!(breakdown.blends, vec!["ai"]);
        assert_eq!(breakdown.pattern, PatternLabel::Cvvc);
    }

    #[test]
    fn test_custom_tables() {
        let tables = Tables::from_toml_str(
            r#"
[metadata]
code = "bare"
name = "No tables"
"#,
        )
        .unwrap();
        let analyzer = PhonicsAnalyzer::new(Arc::new(tables));
        // Empty tables: nothing is rewritten and no affix is stripped
        assert_eq!(analyzer.rewrite_for_speech("tle"), "tle");
        assert_eq!(analyzer.syllables("hopelessness").concat(), "hopelessness");
        assert!(analyzer.strip_affixes("hopelessness").suffixes.is_empty());
    }

    #[test]
    fn test_speak_hint_out_of_range() {
        struct Mute;
        impl Speaker for Mute {
            fn speak(&mut self, _text: &str, _rate: f32) -> Result<()> {
                panic!("nothing should be spoken");
            }
        }
        let analyzer = PhonicsAnalyzer::english();
        assert!(!analyzer.speak_phonics_hint("cat", 3, &mut Mute).unwrap());
    }
}
