//! Sound tokenizing and per-token classification
//!
//! Greedy left to right: a three-letter chunk beats a two-letter group,
//! which beats a single letter. No backtracking.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::letters::{is_consonant, is_vowel};
use crate::speech::rewrite_for_speech;
use crate::syllable::syllabify_root;
use crate::tables::Tables;

/// Kind of sound a token makes
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundType {
    Vowel,
    Consonant,
    Blend,
    Silent,
}

impl fmt::Display for SoundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SoundType::Vowel => "vowel",
            SoundType::Consonant => "consonant",
            SoundType::Blend => "blend",
            SoundType::Silent => "silent",
        };
        f.write_str(name)
    }
}

/// One entry of a pronunciation guide, for colored letter blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideEntry {
    pub letter: String,
    #[serde(rename = "type")]
    pub kind: SoundType,
    /// Speech text for the token; empty when silent
    pub sound: String,
}

/// Split `word` into sound tokens
pub fn tokenize_sounds(tables: &Tables, word: &str) -> Vec<String> {
    let chars: Vec<char> = word.to_lowercase().chars().collect();
    let at = |i: usize| chars.get(i).copied();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let width = if tables
            .three_letter_sounds
            .contains_chars(&[at(i), at(i + 1), at(i + 2)])
        {
            3
        } else if tables.two_letter_sounds.contains_pair(at(i), at(i + 1)) {
            2
        } else {
            1
        };

        tokens.push(chars[i..i + width].iter().collect());
        i += width;
    }

    tokens
}

/// Classify a token without word context
pub fn classify_token(token: &str) -> SoundType {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(_), Some(_)) => SoundType::Blend,
        (Some(ch), None) if is_vowel(ch) => SoundType::Vowel,
        _ => SoundType::Consonant,
    }
}

/// Tokenize `word` and classify each token, marking a final silent e
pub fn classify_sounds(tables: &Tables, word: &str) -> Vec<(String, SoundType)> {
    let lower = word.to_lowercase();
    let tokens = tokenize_sounds(tables, &lower);
    let silent_final_e = has_silent_final_e(tables, &lower, &tokens);
    let last = tokens.len().saturating_sub(1);

    tokens
        .into_iter()
        .enumerate()
        .map(|(idx, token)| {
            let kind = if silent_final_e && idx == last {
                SoundType::Silent
            } else {
                classify_token(&token)
            };
            (token, kind)
        })
        .collect()
}

/// Final "e" token after a consonant in a word of more than one syllable
fn has_silent_final_e(tables: &Tables, word: &str, tokens: &[String]) -> bool {
    if tokens.last().map(String::as_str) != Some("e") {
        return false;
    }
    let chars: Vec<char> = word.chars().collect();
    let preceded_by_consonant = chars.len() >= 2 && is_consonant(chars[chars.len() - 2]);
    preceded_by_consonant && syllabify_root(tables, word).len() > 1
}

/// Per-token guide: letter, sound type and speech text
pub fn pronunciation_guide(tables: &Tables, word: &str) -> Vec<GuideEntry> {
    classify_sounds(tables, word)
        .into_iter()
        .map(|(letter, kind)| {
            let sound = match kind {
                SoundType::Silent => String::new(),
                _ => tables
                    .letter_sounds
                    .get(&letter)
                    .cloned()
                    .unwrap_or_else(|| rewrite_for_speech(tables, &letter)),
            };
            GuideEntry {
                letter,
                kind,
                sound,
            }
        })
        .collect()
}
