//! Fixed-width letter-group sets
//!
//! Lookups take `char` pairs or triples so the scanners can probe without
//! building temporary strings.

use std::collections::HashSet;

/// Set of letter groups that all share one width
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    entries: HashSet<String>,
}

impl PatternSet {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Union of several sets
    pub fn union<'a>(sets: impl IntoIterator<Item = &'a PatternSet>) -> Self {
        let mut entries = HashSet::new();
        for set in sets {
            entries.extend(set.entries.iter().cloned());
        }
        Self { entries }
    }

    #[inline]
    pub fn contains(&self, group: &str) -> bool {
        self.entries.contains(group)
    }

    /// Check a run of characters; `None` entries (past the end) never match
    pub fn contains_chars(&self, chars: &[Option<char>]) -> bool {
        let mut buf = [0u8; 16];
        let mut len = 0;
        for ch in chars {
            match ch {
                Some(c) if c.is_ascii() && len < buf.len() => {
                    buf[len] = *c as u8;
                    len += 1;
                }
                _ => return false,
            }
        }
        std::str::from_utf8(&buf[..len])
            .map(|group| self.entries.contains(group))
            .unwrap_or(false)
    }

    #[inline]
    pub fn contains_pair(&self, first: Option<char>, second: Option<char>) -> bool {
        self.contains_chars(&[first, second])
    }

    /// True if `text` begins with any entry
    pub fn starts(&self, text: &str) -> bool {
        self.entries.iter().any(|group| text.starts_with(group.as_str()))
    }

    /// True if any entry occurs anywhere in `text`
    pub fn occurs_in(&self, text: &str) -> bool {
        self.entries.iter().any(|group| text.contains(group.as_str()))
    }

    /// Entries found in `text`, sorted for stable output
    pub fn found_in(&self, text: &str) -> Vec<String> {
        let mut found: Vec<String> = self
            .entries
            .iter()
            .filter(|group| text.contains(group.as_str()))
            .cloned()
            .collect();
        found.sort();
        found
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_pair() {
        let set = PatternSet::new(["bl", "st"]);
        assert!(set.contains_pair(Some('b'), Some('l')));
        assert!(!set.contains_pair(Some('l'), Some('b')));
        assert!(!set.contains_pair(Some('s'), None));
    }

    #[test]
    fn test_non_ascii_never_matches() {
        let set = PatternSet::new(["ee"]);
        assert!(!set.contains_pair(Some('é'), Some('e')));
    }

    #[test]
    fn test_starts_and_occurs() {
        let set = PatternSet::new(["ai", "ee"]);
        assert!(set.occurs_in("rain"));
        assert!(!set.starts("rain"));
        assert!(set.starts("eel"));
        assert_eq!(set.found_in("fairies"), vec!["ai".to_string()]);
    }

    #[test]
    fn test_union() {
        let a = PatternSet::new(["sh"]);
        let b = PatternSet::new(["sh", "ch"]);
        let both = PatternSet::union([&a, &b]);
        assert_eq!(both.len(), 2);
    }
}
