//! Whole-word phonics pattern labels for display

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::letters::{is_consonant, is_vowel};
use crate::tables::Tables;

/// Phonics pattern of a word, checked in declaration order
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PatternLabel {
    /// Three letters, consonant-vowel-consonant
    #[serde(rename = "CVC (short vowel)")]
    Cvc,
    /// Vowel, consonant, final silent e
    #[serde(rename = "CVCe (magic e)")]
    CvcE,
    /// Contains a vowel team
    #[serde(rename = "CVVC (vowel team)")]
    Cvvc,
    /// Starts with a consonant blend
    #[serde(rename = "CCVC (consonant blend)")]
    Ccvc,
    #[serde(rename = "basic pattern")]
    Basic,
}

impl PatternLabel {
    pub const ALL: [PatternLabel; 5] = [
        PatternLabel::Cvc,
        PatternLabel::CvcE,
        PatternLabel::Cvvc,
        PatternLabel::Ccvc,
        PatternLabel::Basic,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            PatternLabel::Cvc => "CVC (short vowel)",
            PatternLabel::CvcE => "CVCe (magic e)",
            PatternLabel::Cvvc => "CVVC (vowel team)",
            PatternLabel::Ccvc => "CCVC (consonant blend)",
            PatternLabel::Basic => "basic pattern",
        }
    }
}

impl fmt::Display for PatternLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label `word` with the first matching pattern
pub fn classify_pattern(tables: &Tables, word: &str) -> PatternLabel {
    let word = word.to_lowercase();
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();

    if n == 3 && is_consonant(chars[0]) && is_vowel(chars[1]) && is_consonant(chars[2]) {
        return PatternLabel::Cvc;
    }

    if n >= 4 && chars[n - 1] == 'e' && is_consonant(chars[n - 2]) && is_vowel(chars[n - 3]) {
        return PatternLabel::CvcE;
    }

    if tables.vowel_teams.occurs_in(&word) {
        return PatternLabel::Cvvc;
    }

    if tables.consonant_blends.starts(&word) {
        return PatternLabel::Ccvc;
    }

    PatternLabel::Basic
}
