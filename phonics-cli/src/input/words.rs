//! Word extraction from free text

use anyhow::Result;
use regex::Regex;
use std::collections::HashSet;

/// Pulls alphabetic words out of text, lowercased, each word once
pub struct WordExtractor {
    pattern: Regex,
    seen: HashSet<String>,
}

impl WordExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(r"[A-Za-z]+")?,
            seen: HashSet::new(),
        })
    }

    /// Words in `text` not seen before, in first-seen order
    pub fn extract(&mut self, text: &str) -> Vec<String> {
        let mut words = Vec::new();
        for found in self.pattern.find_iter(text) {
            let word = found.as_str().to_lowercase();
            if self.seen.insert(word.clone()) {
                words.push(word);
            }
        }
        words
    }

    /// Add one word as given on the command line; `None` if already seen
    pub fn add(&mut self, word: &str) -> Option<String> {
        let word = word.trim().to_lowercase();
        if word.is_empty() || !self.seen.insert(word.clone()) {
            return None;
        }
        Some(word)
    }
}
