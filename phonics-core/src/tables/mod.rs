//! Runtime lookup tables
//!
//! A [`Tables`] value is built once from a [`TablesConfig`] and never
//! mutated afterwards; analyzers share it through `Arc`.

pub mod affix;
pub mod config;
pub mod defaults;
pub mod loader;
pub mod patterns;
pub mod pronunciation;

pub use affix::{AffixSide, AffixTable};
pub use config::{SpeechSettings, TablesConfig};
pub use loader::english;
pub use patterns::PatternSet;
pub use pronunciation::PronunciationMap;

use std::collections::HashMap;

use crate::error::Result;

/// All tables the analyzers consult
#[derive(Debug, Clone)]
pub struct Tables {
    code: String,
    name: String,

    pub(crate) prefixes: AffixTable,
    pub(crate) suffixes: AffixTable,

    pub(crate) consonant_blends: PatternSet,
    pub(crate) ending_blends: PatternSet,
    pub(crate) vowel_teams: PatternSet,
    /// Union of every two-letter group the tokenizer keeps together
    pub(crate) two_letter_sounds: PatternSet,
    pub(crate) three_letter_sounds: PatternSet,
    /// Blends, digraphs and vowel teams reported in a breakdown
    pub(crate) reported_groups: PatternSet,

    pub(crate) pronunciation: PronunciationMap,
    pub(crate) letter_sounds: HashMap<String, String>,
    pub(crate) speech: SpeechSettings,
}

impl Tables {
    /// Create from configuration
    pub fn from_config(config: &TablesConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Build without validation; callers guarantee `config` is valid
    pub(crate) fn build(config: &TablesConfig) -> Self {
        let patterns = &config.patterns;

        let consonant_blends = PatternSet::new(patterns.consonant_blends.iter().cloned());
        let ending_blends = PatternSet::new(patterns.ending_blends.iter().cloned());
        let digraphs = PatternSet::new(patterns.digraphs.iter().cloned());
        let vowel_teams = PatternSet::new(patterns.vowel_teams.iter().cloned());
        let r_controlled = PatternSet::new(patterns.r_controlled.iter().cloned());
        let three_letter_sounds = PatternSet::new(patterns.sound_patterns.iter().cloned());

        let two_letter_sounds = PatternSet::union([
            &digraphs,
            &consonant_blends,
            &vowel_teams,
            &ending_blends,
            &r_controlled,
        ]);
        let reported_groups = PatternSet::union([
            &consonant_blends,
            &ending_blends,
            &digraphs,
            &vowel_teams,
            &three_letter_sounds,
        ]);

        tracing::debug!(
            code = %config.metadata.code,
            prefixes = config.affixes.prefixes.len(),
            suffixes = config.affixes.suffixes.len(),
            two_letter_sounds = two_letter_sounds.len(),
            "built phonics tables"
        );

        Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            prefixes: AffixTable::new(config.affixes.prefixes.clone(), AffixSide::Prefix),
            suffixes: AffixTable::new(config.affixes.suffixes.clone(), AffixSide::Suffix),
            consonant_blends,
            ending_blends,
            vowel_teams,
            two_letter_sounds,
            three_letter_sounds,
            reported_groups,
            pronunciation: PronunciationMap::new(&config.pronunciation),
            letter_sounds: config
                .pronunciation
                .letter_sounds
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            speech: config.speech.clone(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn speech(&self) -> &SpeechSettings {
        &self.speech
    }

    pub fn prefixes(&self) -> &AffixTable {
        &self.prefixes
    }

    pub fn suffixes(&self) -> &AffixTable {
        &self.suffixes
    }

    pub fn pronunciation(&self) -> &PronunciationMap {
        &self.pronunciation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_validates() {
        let mut config = TablesConfig::english();
        config.patterns.vowel_teams.push("eau".into());
        assert!(Tables::from_config(&config).is_err());
    }

    #[test]
    fn test_english_tables_built() {
        let tables = Tables::from_config(&TablesConfig::english()).unwrap();
        assert_eq!(tables.code(), "en");
        assert!(tables.two_letter_sounds.contains("sh"));
        assert!(tables.two_letter_sounds.contains("ar"));
        assert!(tables.three_letter_sounds.contains("igh"));
        assert!(!tables.prefixes().is_empty());
        assert_eq!(tables.pronunciation().exact("tle"), Some("tul"));
    }
}
