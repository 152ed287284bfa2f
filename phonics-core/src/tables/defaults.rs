//! Built-in English phonics tables
//!
//! These lists are tuned against the speech engine the pronunciations are
//! written for. Change them together with the tests that pin their output.

use std::collections::BTreeMap;

use super::config::{
    Affixes, Metadata, Patterns, Pronunciation, SpeechSettings, TablesConfig,
};

const PREFIXES: &[&str] = &[
    "un", "re", "in", "dis", "mis", "pre", "non", "sub", "out", "mid", "fore", "over", "under",
    "inter", "super", "trans", "anti", "semi", "multi",
];

const SUFFIXES: &[&str] = &[
    "ness", "less", "ful", "fully", "ment", "ments", "ing", "ings", "ed", "er", "ers", "est", "ly",
    "ily", "ally", "tion", "tions", "sion", "able", "ible", "ous", "ious", "ive", "ish", "ist",
    "ism", "ity", "al", "ship", "hood", "dom", "ward", "wards", "ance", "ence",
];

const CONSONANT_BLENDS: &[&str] = &[
    "bl", "br", "cl", "cr", "dr", "fl", "fr", "gl", "gr", "pl", "pr", "sc", "sk", "sl", "sm", "sn",
    "sp", "st", "sw", "tr", "tw", "wr", "qu", "ch", "sh", "th", "wh", "ph",
];

const ENDING_BLENDS: &[&str] = &[
    "ck", "ct", "ft", "ld", "lf", "lk", "lp", "lt", "mp", "nd", "ng", "nk", "nt", "pt", "sk", "sp",
    "st", "xt",
];

const DIGRAPHS: &[&str] = &[
    "sh", "ch", "th", "wh", "ph", "ck", "ng", "nk", "qu", "wr", "kn", "gh",
];

const VOWEL_TEAMS: &[&str] = &[
    "ai", "ay", "ea", "ee", "ei", "ey", "ie", "oa", "oe", "oi", "oo", "ou", "ow", "oy", "ue", "ui",
    "ew", "au", "aw",
];

const R_CONTROLLED: &[&str] = &["ar", "er", "ir", "or", "ur"];

const SOUND_PATTERNS: &[&str] = &[
    "igh", "tch", "dge", "sch", "scr", "shr", "spl", "spr", "squ", "str", "thr", "ing",
];

const CONSONANT_LE: &[(&str, &str)] = &[
    ("ble", "bul"),
    ("cle", "kul"),
    ("dle", "dul"),
    ("fle", "ful"),
    ("gle", "gul"),
    ("kle", "kul"),
    ("ple", "pul"),
    ("stle", "sul"),
    ("tle", "tul"),
    ("zle", "zul"),
];

const SUFFIX_SOUNDS: &[(&str, &str)] = &[
    ("able", "uh-bul"),
    ("cian", "shun"),
    ("cious", "shus"),
    ("ible", "ih-bul"),
    ("ies", "eez"),
    ("less", "les"),
    ("ness", "nes"),
    ("ous", "us"),
    ("sion", "zhun"),
    ("tion", "shun"),
    ("tious", "shus"),
    ("ture", "chur"),
];

const PREFIX_SOUNDS: &[(&str, &str)] = &[
    ("anti", "an-tee"),
    ("multi", "mul-tee"),
    ("semi", "sem-ee"),
    ("super", "soo-per"),
];

const CLUSTERS: &[(&str, &str)] = &[
    ("ch", "chuh"),
    ("ck", "kuh"),
    ("ng", "ng"),
    ("ph", "fuh"),
    ("sh", "shh"),
    ("th", "thuh"),
    ("wh", "wuh"),
];

const LETTER_SOUNDS: &[(&str, &str)] = &[
    ("a", "ah"),
    ("e", "eh"),
    ("i", "ih"),
    ("o", "aw"),
    ("u", "uh"),
    ("c", "kuh"),
    ("g", "guh"),
    ("h", "huh"),
    ("q", "kwuh"),
    ("w", "wuh"),
    ("x", "ks"),
    ("y", "yuh"),
    ("ai", "ay"),
    ("ar", "ar"),
    ("au", "aw"),
    ("aw", "aw"),
    ("ay", "ay"),
    ("ch", "chuh"),
    ("ck", "kuh"),
    ("dge", "juh"),
    ("ea", "ee"),
    ("ee", "ee"),
    ("er", "er"),
    ("ew", "oo"),
    ("ie", "eye"),
    ("igh", "eye"),
    ("ir", "er"),
    ("oa", "oh"),
    ("oi", "oy"),
    ("oo", "oo"),
    ("or", "or"),
    ("ou", "ow"),
    ("ow", "oh"),
    ("oy", "oy"),
    ("ph", "fuh"),
    ("qu", "kwuh"),
    ("sh", "shh"),
    ("tch", "chuh"),
    ("th", "thuh"),
    ("ue", "oo"),
    ("ur", "er"),
];

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

fn pairs(list: &[(&str, &str)]) -> BTreeMap<String, String> {
    list.iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

impl TablesConfig {
    /// The built-in English tables
    pub fn english() -> Self {
        Self {
            metadata: Metadata {
                code: "en".into(),
                name: "English".into(),
            },
            affixes: Affixes {
                prefixes: words(PREFIXES),
                suffixes: words(SUFFIXES),
            },
            patterns: Patterns {
                consonant_blends: words(CONSONANT_BLENDS),
                ending_blends: words(ENDING_BLENDS),
                digraphs: words(DIGRAPHS),
                vowel_teams: words(VOWEL_TEAMS),
                r_controlled: words(R_CONTROLLED),
                sound_patterns: words(SOUND_PATTERNS),
            },
            pronunciation: Pronunciation {
                consonant_le: pairs(CONSONANT_LE),
                suffixes: pairs(SUFFIX_SOUNDS),
                prefixes: pairs(PREFIX_SOUNDS),
                clusters: pairs(CLUSTERS),
                letter_sounds: pairs(LETTER_SOUNDS),
            },
            speech: SpeechSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_tables_are_valid() {
        assert!(TablesConfig::english().validate().is_ok());
    }

    #[test]
    fn test_english_tables_survive_toml() {
        let config = TablesConfig::english();
        let rendered = toml::to_string_pretty(&config).unwrap();
        let parsed: TablesConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_no_doubled_letters_in_blends() {
        // Doubled consonants ("pp", "tt") must always split
        for blend in CONSONANT_BLENDS.iter().chain(ENDING_BLENDS) {
            let bytes = blend.as_bytes();
            assert_ne!(bytes[0], bytes[1], "{blend}");
        }
    }
}
