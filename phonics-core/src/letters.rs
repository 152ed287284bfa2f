//! Letter classification with O(1) lookup
//!
//! Only ASCII letters are vowels or consonants; anything else (digits,
//! apostrophes, accented letters) is neither and never triggers a split.

const fn build_table(letters: &[u8]) -> [bool; 128] {
    let mut table = [false; 128];
    let mut i = 0;
    while i < letters.len() {
        table[letters[i] as usize] = true;
        i += 1;
    }
    table
}

/// Written vowels used for splitting and stem validity
static VOWELS: [bool; 128] = build_table(b"aeiouAEIOU");

/// Vowels as heard by a speech engine: `y` carries a vowel sound in
/// fragments like "py" or "my"
static SPOKEN_VOWELS: [bool; 128] = build_table(b"aeiouyAEIOUY");

#[inline]
pub fn is_vowel(ch: char) -> bool {
    ch.is_ascii() && VOWELS[ch as usize]
}

#[inline]
pub fn is_consonant(ch: char) -> bool {
    ch.is_ascii_alphabetic() && !is_vowel(ch)
}

#[inline]
pub fn is_spoken_vowel(ch: char) -> bool {
    ch.is_ascii() && SPOKEN_VOWELS[ch as usize]
}

/// True if any written vowel appears in `text`
pub fn has_vowel(text: &str) -> bool {
    text.chars().any(is_vowel)
}

/// True if any vowel sound (including `y`) appears in `text`
pub fn has_spoken_vowel(text: &str) -> bool {
    text.chars().any(is_spoken_vowel)
}
