//! Affix table with longest-first matching
//!
//! Declaration order in the configuration is irrelevant; entries are tried
//! from longest to shortest so "fully" wins over "ly".

use std::collections::HashSet;

/// Which end of a word an affix attaches to
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AffixSide {
    Prefix,
    Suffix,
}

/// Ordered affix set
#[derive(Debug, Clone)]
pub struct AffixTable {
    /// Entries sorted by descending length
    entries: Vec<String>,
    side: AffixSide,
}

impl AffixTable {
    /// Create from a list of affixes
    pub fn new(mut entries: Vec<String>, side: AffixSide) -> Self {
        let mut seen = HashSet::new();
        entries.retain(|entry| seen.insert(entry.clone()));
        // Stable sort keeps listing order among equal lengths
        entries.sort_by(|a, b| b.len().cmp(&a.len()));
        Self { entries, side }
    }

    /// Find the longest affix on the matching end of `text` that `accept`
    /// agrees to. Rejected candidates fall through to shorter ones.
    pub fn find<'a>(&'a self, text: &str, mut accept: impl FnMut(&str) -> bool) -> Option<&'a str> {
        self.entries
            .iter()
            .filter(|affix| match self.side {
                AffixSide::Prefix => text.starts_with(affix.as_str()),
                AffixSide::Suffix => text.ends_with(affix.as_str()),
            })
            .find(|affix| accept(affix.as_str()))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in matching order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
