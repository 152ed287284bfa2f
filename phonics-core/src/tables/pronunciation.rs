//! Speech-safe spelling lookups
//!
//! Lookup order: exact key, then the longest key the syllable ends with.
//! Cluster entries answer exact lookups only; as suffixes they would split
//! ordinary syllables like "fish" into "fi-shh".

use std::collections::HashMap;

use super::config::Pronunciation;
use crate::letters::has_spoken_vowel;

/// Immutable pronunciation table
#[derive(Debug, Clone, Default)]
pub struct PronunciationMap {
    overrides: HashMap<String, String>,
    /// Override keys sorted by descending length
    suffix_keys: Vec<String>,
    clusters: HashMap<String, String>,
}

impl PronunciationMap {
    /// Build from configuration sections
    pub fn new(config: &Pronunciation) -> Self {
        let mut overrides = HashMap::new();
        for section in [&config.prefixes, &config.suffixes, &config.consonant_le] {
            for (key, value) in section {
                overrides.insert(key.clone(), value.clone());
            }
        }

        let mut suffix_keys: Vec<String> = overrides.keys().cloned().collect();
        // Ties broken alphabetically so the scan order is deterministic
        suffix_keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let clusters = config
            .clusters
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Self {
            overrides,
            suffix_keys,
            clusters,
        }
    }

    /// Exact match against overrides or clusters
    pub fn exact(&self, syllable: &str) -> Option<&str> {
        self.overrides
            .get(syllable)
            .or_else(|| self.clusters.get(syllable))
            .map(String::as_str)
    }

    /// Longest override key that ends `syllable` and leaves a usable front.
    /// Returns the untouched front and the replacement for the ending.
    pub fn longest_suffix<'s>(&self, syllable: &'s str) -> Option<(&'s str, &str)> {
        self.suffix_keys
            .iter()
            .filter(|key| key.len() < syllable.len() && syllable.ends_with(key.as_str()))
            .find_map(|key| {
                let front = &syllable[..syllable.len() - key.len()];
                if has_spoken_vowel(front) || front.len() >= 2 {
                    self.overrides
                        .get(key.as_str())
                        .map(|value| (front, value.as_str()))
                } else {
                    None
                }
            })
    }

    pub fn len(&self) -> usize {
        self.overrides.len() + self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty() && self.clusters.is_empty()
    }
}
