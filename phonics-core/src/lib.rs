//! English phonics decomposition for spelling practice
//!
//! Given a word, this crate produces its syllables, its sound tokens, a
//! phonics pattern label, and speech-safe pronunciation text for each
//! syllable. Everything is a pure function over strings and read-only
//! lookup tables.
//!
//! # Architecture
//!
//! - **Tables**: prefixes, suffixes, blends, vowel teams and pronunciation
//!   overrides, described by a TOML schema and built once
//! - **Analysis**: affix stripping, root syllabification, pattern
//!   classification, sound tokenizing, pronunciation rewriting
//! - **Speech planning**: what to say and at which pace; audio playback is
//!   left to an injected [`Speaker`]
//!
//! # Example
//!
//! ```rust
//! use phonics_core::{rewrite_for_speech, syllables};
//!
//! assert_eq!(syllables("happy"), vec!["hap", "py"]);
//! assert_eq!(syllables("fairies"), vec!["fair", "ies"]);
//! assert_eq!(rewrite_for_speech("tle"), "tul");
//! ```
//!
//! Custom tables go through a [`PhonicsAnalyzer`]:
//!
//! ```rust
//! use phonics_core::{PhonicsAnalyzer, Tables, TablesConfig};
//! use std::sync::Arc;
//!
//! let mut config = TablesConfig::english();
//! config.affixes.suffixes.push("y".into());
//! let analyzer = PhonicsAnalyzer::new(Arc::new(Tables::from_config(&config).unwrap()));
//! assert_eq!(analyzer.strip_affixes("happy").suffixes, vec!["y"]);
//! ```

pub mod affix;
pub mod analyzer;
pub mod error;
pub mod letters;
pub mod pattern;
pub mod sounds;
pub mod speech;
pub mod syllable;
pub mod tables;

pub use affix::AffixSplit;
pub use analyzer::{PhonicsAnalyzer, PhonicsBreakdown};
pub use error::{PhonicsError, Result};
pub use pattern::PatternLabel;
pub use sounds::{classify_token, GuideEntry, SoundType};
pub use speech::{PhonicsHint, Speaker, Utterance};
pub use syllable::{locate_syllable_at_letter_index, SyllablePosition};
pub use tables::{SpeechSettings, Tables, TablesConfig};

use std::sync::OnceLock;

static SHARED: OnceLock<PhonicsAnalyzer> = OnceLock::new();

/// Analyzer over the built-in English tables
fn shared() -> &'static PhonicsAnalyzer {
    SHARED.get_or_init(PhonicsAnalyzer::english)
}

/// Syllables, sounds, blends and pattern of `word`
pub fn phonics_breakdown(word: &str) -> PhonicsBreakdown {
    shared().breakdown(word)
}

/// Per-token letter, sound type and sound
pub fn pronunciation_guide(word: &str) -> Vec<GuideEntry> {
    shared().pronunciation_guide(word)
}

/// Syllables of `word`, lowercased
pub fn syllables(word: &str) -> Vec<String> {
    shared().syllables(word)
}

/// Syllable holding the letter at `letter_index`
pub fn syllable_at_index(word: &str, letter_index: usize) -> Option<SyllablePosition> {
    shared().syllable_at_index(word, letter_index)
}

/// Hint for the letter at `letter_index`
pub fn phonics_hint_for_position(word: &str, letter_index: usize) -> Option<PhonicsHint> {
    shared().phonics_hint(word, letter_index)
}

pub fn strip_affixes(word: &str) -> AffixSplit {
    shared().strip_affixes(word)
}

pub fn syllabify_root(stem: &str) -> Vec<String> {
    shared().syllabify_root(stem)
}

pub fn classify_pattern(word: &str) -> PatternLabel {
    shared().classify_pattern(word)
}

pub fn tokenize_sounds(word: &str) -> Vec<String> {
    shared().tokenize_sounds(word)
}

/// Speech-safe text for one syllable
pub fn rewrite_for_speech(syllable: &str) -> String {
    shared().rewrite_for_speech(syllable)
}

/// Sound out `word` syllable by syllable, then say it whole
pub fn speak_phonics<S: Speaker + ?Sized>(word: &str, speaker: &mut S) -> Result<()> {
    shared().speak_phonics(word, speaker)
}

/// Sound out `word` syllable by syllable
pub fn speak_syllables<S: Speaker + ?Sized>(word: &str, speaker: &mut S) -> Result<()> {
    shared().speak_syllables(word, speaker)
}

/// Say the syllable holding `letter_index`; `Ok(false)` if out of range
pub fn speak_phonics_hint<S: Speaker + ?Sized>(
    word: &str,
    letter_index: usize,
    speaker: &mut S,
) -> Result<bool> {
    shared().speak_phonics_hint(word, letter_index, speaker)
}
