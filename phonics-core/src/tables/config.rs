//! Configuration structures and validation
//!
//! This module defines the TOML schema for phonics lookup tables. Every
//! section is optional so a tables file can start from a small skeleton.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{PhonicsError, Result};

/// Root tables configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TablesConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub affixes: Affixes,
    #[serde(default)]
    pub patterns: Patterns,
    #[serde(default)]
    pub pronunciation: Pronunciation,
    #[serde(default)]
    pub speech: SpeechSettings,
}

/// Tables metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Morpheme tables; matching order is by length, not by listing order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Affixes {
    #[serde(default)]
    pub prefixes: Vec<String>,
    #[serde(default)]
    pub suffixes: Vec<String>,
}

/// Letter-group tables used for splitting, classification and tokenizing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Patterns {
    /// Two consonants that stay together at the start of a syllable
    #[serde(default)]
    pub consonant_blends: Vec<String>,
    /// Two consonants that stay together at the end of a syllable
    #[serde(default)]
    pub ending_blends: Vec<String>,
    /// Two letters spelling one sound
    #[serde(default)]
    pub digraphs: Vec<String>,
    /// Two vowels spelling one vowel sound; never split
    #[serde(default)]
    pub vowel_teams: Vec<String>,
    /// Vowel followed by `r`
    #[serde(default)]
    pub r_controlled: Vec<String>,
    /// Three-letter chunks tried first by the sound tokenizer
    #[serde(default)]
    pub sound_patterns: Vec<String>,
}

/// Speech-safe spellings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pronunciation {
    /// Consonant-le endings ("tle" -> "tul")
    #[serde(default)]
    pub consonant_le: BTreeMap<String, String>,
    /// Word endings, including plural endings
    #[serde(default)]
    pub suffixes: BTreeMap<String, String>,
    /// Word beginnings
    #[serde(default)]
    pub prefixes: BTreeMap<String, String>,
    /// Vowelless two-letter fragments; matched exactly, never as a suffix
    #[serde(default)]
    pub clusters: BTreeMap<String, String>,
    /// Sounds shown for single tokens in a pronunciation guide
    #[serde(default)]
    pub letter_sounds: BTreeMap<String, String>,
}

/// Speech pacing handed to the caller's speech engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechSettings {
    #[serde(default = "default_syllable_rate")]
    pub syllable_rate: f32,
    #[serde(default = "default_word_rate")]
    pub word_rate: f32,
    #[serde(default = "default_hint_rate")]
    pub hint_rate: f32,
    /// Silence after each syllable, in milliseconds
    #[serde(default = "default_syllable_pause_ms")]
    pub syllable_pause_ms: u64,
    /// Silence before the whole word is spoken, in milliseconds
    #[serde(default = "default_word_pause_ms")]
    pub word_pause_ms: u64,
}

fn default_syllable_rate() -> f32 {
    0.6
}

fn default_word_rate() -> f32 {
    0.8
}

fn default_hint_rate() -> f32 {
    0.7
}

fn default_syllable_pause_ms() -> u64 {
    300
}

fn default_word_pause_ms() -> u64 {
    500
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            syllable_rate: default_syllable_rate(),
            word_rate: default_word_rate(),
            hint_rate: default_hint_rate(),
            syllable_pause_ms: default_syllable_pause_ms(),
            word_pause_ms: default_word_pause_ms(),
        }
    }
}

impl TablesConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(PhonicsError::Configuration(
                "metadata.code must not be empty".into(),
            ));
        }

        check_words("affixes.prefixes", &self.affixes.prefixes, None)?;
        check_words("affixes.suffixes", &self.affixes.suffixes, None)?;

        let patterns = &self.patterns;
        check_words("patterns.consonant_blends", &patterns.consonant_blends, Some(2))?;
        check_words("patterns.ending_blends", &patterns.ending_blends, Some(2))?;
        check_words("patterns.digraphs", &patterns.digraphs, Some(2))?;
        check_words("patterns.vowel_teams", &patterns.vowel_teams, Some(2))?;
        check_words("patterns.r_controlled", &patterns.r_controlled, Some(2))?;
        check_words("patterns.sound_patterns", &patterns.sound_patterns, Some(3))?;

        let pron = &self.pronunciation;
        check_map("pronunciation.consonant_le", &pron.consonant_le)?;
        check_map("pronunciation.suffixes", &pron.suffixes)?;
        check_map("pronunciation.prefixes", &pron.prefixes)?;
        check_map("pronunciation.clusters", &pron.clusters)?;
        check_map("pronunciation.letter_sounds", &pron.letter_sounds)?;

        let speech = &self.speech;
        for (name, rate) in [
            ("syllable_rate", speech.syllable_rate),
            ("word_rate", speech.word_rate),
            ("hint_rate", speech.hint_rate),
        ] {
            if !(rate > 0.0 && rate <= 10.0) {
                return Err(PhonicsError::Configuration(format!(
                    "speech.{name} must be in (0, 10], got {rate}"
                )));
            }
        }

        Ok(())
    }
}

fn is_lower_word(entry: &str) -> bool {
    !entry.is_empty() && entry.chars().all(|c| c.is_ascii_lowercase())
}

fn check_words(section: &str, entries: &[String], width: Option<usize>) -> Result<()> {
    for entry in entries {
        if !is_lower_word(entry) {
            return Err(PhonicsError::Configuration(format!(
                "{section}: entry {entry:?} must be non-empty lowercase ASCII letters"
            )));
        }
        if let Some(width) = width {
            if entry.len() != width {
                return Err(PhonicsError::Configuration(format!(
                    "{section}: entry {entry:?} must be {width} letters long"
                )));
            }
        }
    }
    Ok(())
}

fn check_map(section: &str, map: &BTreeMap<String, String>) -> Result<()> {
    for (key, value) in map {
        if !is_lower_word(key) {
            return Err(PhonicsError::Configuration(format!(
                "{section}: key {key:?} must be non-empty lowercase ASCII letters"
            )));
        }
        if value.trim().is_empty() {
            return Err(PhonicsError::Configuration(format!(
                "{section}: value for {key:?} must not be empty"
            )));
        }
    }
    Ok(())
}
