//! Orthographic syllabification
//!
//! A single greedy left-to-right pass over the stem. At each letter the
//! checks run in a fixed order: vowel team, then VCV, then VCCV. Changing the
//! order changes output for ambiguous words.

use serde::{Deserialize, Serialize};

use crate::affix::strip_affixes;
use crate::letters::{is_consonant, is_vowel};
use crate::tables::Tables;

/// Where a letter falls inside a word's syllables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllablePosition {
    pub syllable: String,
    pub syllable_index: usize,
    pub position_in_syllable: usize,
}

/// Split an affix-free stem into syllables
pub fn syllabify_root(tables: &Tables, stem: &str) -> Vec<String> {
    let chars: Vec<char> = stem.chars().collect();
    if chars.is_empty() {
        return Vec::new();
    }
    if chars.len() <= 3 {
        return vec![stem.to_string()];
    }

    let at = |i: usize| chars.get(i).copied();
    let mut syllables = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        let next = at(i + 1);
        let after = at(i + 2);

        // Vowel teams are consumed whole and never tested for a boundary
        if let Some(n) = next {
            if tables.vowel_teams.contains_pair(Some(ch), Some(n)) {
                current.push(ch);
                current.push(n);
                i += 2;
                continue;
            }
        }

        current.push(ch);

        if is_vowel(ch) {
            if let (Some(n), Some(a)) = (next, after) {
                if is_consonant(n) && is_vowel(a) {
                    // VCV: open syllable, break before the consonant ("o-pen")
                    if !tables.consonant_blends.contains_pair(next, after) {
                        syllables.push(std::mem::take(&mut current));
                    }
                } else if is_consonant(n)
                    && is_consonant(a)
                    && !tables.consonant_blends.contains_pair(next, after)
                    && !tables.ending_blends.contains_pair(next, after)
                {
                    // VCCV: break between the consonants ("hap-py")
                    current.push(n);
                    syllables.push(std::mem::take(&mut current));
                    i += 2;
                    continue;
                }
            }
        }

        i += 1;
    }

    if !current.is_empty() {
        syllables.push(current);
    }

    let syllables = merge_single_letters(syllables);
    if syllables.is_empty() {
        vec![stem.to_string()]
    } else {
        syllables
    }
}

/// A lone consonant cannot be sounded on its own; a lone vowel can ("o-pen")
fn is_lone_consonant(syllable: &str) -> bool {
    let mut chars = syllable.chars();
    matches!((chars.next(), chars.next()), (Some(ch), None) if !is_vowel(ch))
}

fn is_single_letter(syllable: &str) -> bool {
    syllable.chars().count() == 1
}

/// Fold single-consonant syllables into a neighbour, preferring a neighbour
/// that is itself a single letter, then the previous syllable.
pub fn merge_single_letters(syllables: Vec<String>) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(syllables.len());
    let mut carried: Option<String> = None;

    for (idx, syllable) in syllables.iter().enumerate() {
        let syllable = match carried.take() {
            Some(mut front) => {
                front.push_str(syllable);
                front
            }
            None => syllable.clone(),
        };

        if !is_lone_consonant(&syllable) {
            merged.push(syllable);
            continue;
        }

        let next = syllables.get(idx + 1);
        let prev_single = merged.last().is_some_and(|prev| is_single_letter(prev));
        let next_single = next.is_some_and(|n| is_single_letter(n));

        if next_single && !prev_single {
            carried = Some(syllable);
        } else if let Some(prev) = merged.last_mut() {
            prev.push_str(&syllable);
        } else if next.is_some() {
            carried = Some(syllable);
        } else {
            merged.push(syllable);
        }
    }

    merged
}

/// Full syllabification: prefixes, root syllables, then suffixes
pub fn syllables(tables: &Tables, word: &str) -> Vec<String> {
    let split = strip_affixes(tables, word);
    if split.stem.is_empty() && split.prefixes.is_empty() && split.suffixes.is_empty() {
        return Vec::new();
    }

    let mut all = split.prefixes;
    all.extend(syllabify_root(tables, &split.stem));
    all.extend(split.suffixes);
    merge_single_letters(all)
}

/// Find the syllable holding the letter at `letter_index` (counted in chars)
pub fn locate_syllable_at_letter_index(
    syllables: &[String],
    letter_index: usize,
) -> Option<SyllablePosition> {
    let mut start = 0;
    for (syllable_index, syllable) in syllables.iter().enumerate() {
        let len = syllable.chars().count();
        if letter_index < start + len {
            return Some(SyllablePosition {
                syllable: syllable.clone(),
                syllable_index,
                position_in_syllable: letter_index - start,
            });
        }
        start += len;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::english;

    fn root(stem: &str) -> Vec<String> {
        syllabify_root(&english(), stem)
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_short_stems_are_one_syllable() {
        assert_eq!(root("cat"), vec!["cat"]);
        assert_eq!(root("a"), vec!["a"]);
        assert!(root("").is_empty());
    }

    #[test]
    fn test_vccv_split() {
        assert_eq!(root("happy"), vec!["hap", "py"]);
        assert_eq!(root("rabbit"), vec!["rab", "bit"]);
    }

    #[test]
    fn test_vcv_split() {
        assert_eq!(root("open"), vec!["o", "pen"]);
        assert_eq!(root("tiger"), vec!["ti", "ger"]);
    }

    #[test]
    fn test_consonant_le_stays_together() {
        assert_eq!(root("little"), vec!["lit", "tle"]);
    }

    #[test]
    fn test_blend_suppresses_split() {
        // "bl" is a blend, so "table" is not split between b and l
        assert_eq!(root("table"), vec!["table"]);
        // "st" is an ending blend
        assert_eq!(root("fast"), vec!["fast"]);
    }

    #[test]
    fn test_vcv_blend_guard() {
        // "qu" is a blend, so "e-qual" is not split before the q
        assert_eq!(root("equal"), vec!["equal"]);
        // no blend between "e" and "v": open syllable split
        assert_eq!(root("even"), vec!["e", "ven"]);
    }

    #[test]
    fn test_vowel_team_never_split() {
        assert_eq!(root("fair"), vec!["fair"]);
        assert_eq!(root("rain"), vec!["rain"]);
    }

    #[test]
    fn test_trailing_consonant_merged() {
        // VCCV leaves "p" alone at the end; it joins the previous syllable
        assert_eq!(root("happ"), vec!["happ"]);
    }

    #[test]
    fn test_merge_prefers_single_letter_neighbour() {
        let merged = merge_single_letters(strings(&["ab", "c", "d", "ef"]));
        assert_eq!(merged, strings(&["ab", "cd", "ef"]));

        let merged = merge_single_letters(strings(&["x", "y", "oat"]));
        assert_eq!(merged, strings(&["xy", "oat"]));
    }

    #[test]
    fn test_merge_keeps_lone_vowels() {
        let merged = merge_single_letters(strings(&["o", "pen"]));
        assert_eq!(merged, strings(&["o", "pen"]));
    }

    #[test]
    fn test_merge_leading_consonant_joins_next() {
        let merged = merge_single_letters(strings(&["s", "ing"]));
        assert_eq!(merged, strings(&["sing"]));
    }

    #[test]
    fn test_single_letter_word_survives() {
        assert_eq!(merge_single_letters(strings(&["t"])), strings(&["t"]));
    }

    #[test]
    fn test_full_syllables() {
        let tables = english();
        assert_eq!(syllables(&tables, "fairies"), vec!["fair", "ies"]);
        assert_eq!(syllables(&tables, "unifies"), vec!["u", "nif", "ies"]);
        assert_eq!(
            syllables(&tables, "unifies"),
            [syllabify_root(&tables, "unif"), vec!["ies".to_string()]].concat()
        );
        assert_eq!(
            syllables(&tables, "hopelessness"),
            vec!["ho", "pe", "less", "ness"]
        );
        assert!(syllables(&tables, "").is_empty());
    }

    #[test]
    fn test_locate() {
        let syls = strings(&["hap", "py"]);
        let pos = locate_syllable_at_letter_index(&syls, 3).unwrap();
        assert_eq!(pos.syllable, "py");
        assert_eq!(pos.syllable_index, 1);
        assert_eq!(pos.position_in_syllable, 0);

        let pos = locate_syllable_at_letter_index(&syls, 2).unwrap();
        assert_eq!(pos.syllable_index, 0);
        assert_eq!(pos.position_in_syllable, 2);

        assert!(locate_syllable_at_letter_index(&syls, 5).is_none());
    }
}
