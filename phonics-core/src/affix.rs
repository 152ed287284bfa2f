//! Affix stripping
//!
//! Peels known suffixes, then prefixes, off a word while the remaining stem
//! still has at least two letters and a written vowel. Suffixes chain
//! ("hope" + "less" + "ness"); so do prefixes.

use serde::{Deserialize, Serialize};

use crate::letters::has_vowel;
use crate::tables::Tables;

/// Plural ending handled before generic suffix stripping
const PLURAL_IES: &str = "ies";

/// A word split into prefixes, stem and suffixes
///
/// Concatenating `prefixes`, `stem` and `suffixes` in order gives back the
/// lowercased input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffixSplit {
    pub prefixes: Vec<String>,
    pub stem: String,
    pub suffixes: Vec<String>,
}

impl AffixSplit {
    /// Reassemble the word
    pub fn join(&self) -> String {
        let mut word = self.prefixes.concat();
        word.push_str(&self.stem);
        word.push_str(&self.suffixes.concat());
        word
    }
}

/// A stem must keep at least two letters and a vowel
fn is_valid_stem(stem: &str) -> bool {
    stem.chars().count() >= 2 && has_vowel(stem)
}

/// Split `word` into prefixes, stem and suffixes
pub fn strip_affixes(tables: &Tables, word: &str) -> AffixSplit {
    let word = word.to_lowercase();

    // "fairies" -> "fair" + "ies", not a vowel-pattern split of "fairi".
    // The whole front is the stem; no prefix is taken off it.
    if let Some(before) = word.strip_suffix(PLURAL_IES) {
        if before.chars().count() >= 2 {
            return AffixSplit {
                prefixes: Vec::new(),
                stem: before.to_string(),
                suffixes: vec![PLURAL_IES.to_string()],
            };
        }
    }

    let (rest, suffixes) = strip_suffixes(tables, &word);
    let (prefixes, stem) = strip_prefixes(tables, rest);

    AffixSplit {
        prefixes,
        stem: stem.to_string(),
        suffixes,
    }
}

/// Repeatedly remove suffixes; returns the remainder and suffixes in word order
fn strip_suffixes<'w>(tables: &Tables, word: &'w str) -> (&'w str, Vec<String>) {
    let mut remaining = word;
    let mut suffixes: Vec<String> = Vec::new();

    loop {
        let remaining_len = remaining.chars().count();
        let found = tables.suffixes.find(remaining, |suffix| {
            remaining_len > suffix.len() + 1
                && is_valid_stem(&remaining[..remaining.len() - suffix.len()])
        });

        match found {
            Some(suffix) => {
                tracing::trace!(suffix, remaining, "stripped suffix");
                suffixes.insert(0, suffix.to_string());
                remaining = &remaining[..remaining.len() - suffix.len()];
            }
            None => break,
        }
    }

    (remaining, suffixes)
}

/// Repeatedly remove prefixes; returns prefixes in word order and the stem
fn strip_prefixes<'w>(tables: &Tables, word: &'w str) -> (Vec<String>, &'w str) {
    let mut remaining = word;
    let mut prefixes = Vec::new();

    loop {
        let remaining_len = remaining.chars().count();
        let found = tables.prefixes.find(remaining, |prefix| {
            remaining_len > prefix.len() + 1 && is_valid_stem(&remaining[prefix.len()..])
        });

        match found {
            Some(prefix) => {
                tracing::trace!(prefix, remaining, "stripped prefix");
                prefixes.push(prefix.to_string());
                remaining = &remaining[prefix.len()..];
            }
            None => break,
        }
    }

    (prefixes, remaining)
}
