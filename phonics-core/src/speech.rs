//! Speech-safe pronunciation text and speech planning
//!
//! General-purpose speech engines read "tle" as letters and skip the schwa
//! in bare consonant clusters. Syllables are rewritten before they reach the
//! engine. Playing audio is the caller's job: this module only decides what
//! to say, how fast, and how long to pause afterwards.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::letters::has_spoken_vowel;
use crate::syllable::{locate_syllable_at_letter_index, syllables};
use crate::tables::Tables;

/// Schwa appended to fragments with no vowel sound
const SCHWA: &str = "uh";

/// Longest vowelless fragment that still gets a schwa
const MAX_SCHWA_FRAGMENT: usize = 3;

/// Rewrite one syllable into text a speech engine will say correctly
pub fn rewrite_for_speech(tables: &Tables, syllable: &str) -> String {
    let syllable = syllable.to_lowercase();
    if syllable.is_empty() {
        return syllable;
    }

    if let Some(spoken) = tables.pronunciation.exact(&syllable) {
        return spoken.to_string();
    }

    if let Some((front, ending)) = tables.pronunciation.longest_suffix(&syllable) {
        return format!("{front}-{ending}");
    }

    let len = syllable.chars().count();
    if len <= MAX_SCHWA_FRAGMENT
        && !has_spoken_vowel(&syllable)
        && syllable.chars().all(|c| c.is_ascii_alphabetic())
    {
        return format!("{syllable}{SCHWA}");
    }

    syllable
}

/// Hint for the letter a learner is stuck on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhonicsHint {
    pub syllable: String,
    pub pronunciation: String,
    pub hint_text: String,
    pub syllable_index: usize,
}

/// Build a hint for `letter_index`; `None` when the index is out of range
pub fn phonics_hint(tables: &Tables, word: &str, letter_index: usize) -> Option<PhonicsHint> {
    let syls = syllables(tables, word);
    let position = locate_syllable_at_letter_index(&syls, letter_index)?;
    let pronunciation = rewrite_for_speech(tables, &position.syllable);

    let hint_text = if syls.len() > 1 {
        format!(
            "Listen to part {} of {}: \"{}\"",
            position.syllable_index + 1,
            syls.len(),
            pronunciation
        )
    } else {
        format!("Listen: \"{pronunciation}\"")
    };

    Some(PhonicsHint {
        syllable: position.syllable,
        pronunciation,
        hint_text,
        syllable_index: position.syllable_index,
    })
}

/// One piece of speech with its pacing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
    /// Silence after this utterance, in milliseconds
    pub pause_after_ms: u64,
}

/// Syllables one at a time, then the whole word
pub fn plan_phonics(tables: &Tables, word: &str) -> Vec<Utterance> {
    let mut plan = plan_syllables(tables, word);
    if plan.is_empty() {
        return plan;
    }

    let speech = tables.speech();
    if let Some(last) = plan.last_mut() {
        last.pause_after_ms = speech.word_pause_ms;
    }
    plan.push(Utterance {
        text: word.to_lowercase(),
        rate: speech.word_rate,
        pause_after_ms: 0,
    });
    plan
}

/// Syllables one at a time
pub fn plan_syllables(tables: &Tables, word: &str) -> Vec<Utterance> {
    let speech = tables.speech();
    syllables(tables, word)
        .iter()
        .map(|syllable| Utterance {
            text: rewrite_for_speech(tables, syllable),
            rate: speech.syllable_rate,
            pause_after_ms: speech.syllable_pause_ms,
        })
        .collect()
}

/// The syllable holding `letter_index`, spoken at hint rate
pub fn plan_phonics_hint(tables: &Tables, word: &str, letter_index: usize) -> Option<Utterance> {
    phonics_hint(tables, word, letter_index).map(|hint| Utterance {
        text: hint.pronunciation,
        rate: tables.speech().hint_rate,
        pause_after_ms: 0,
    })
}

/// External speech engine
///
/// Implementations own voices, audio devices and cancellation.
pub trait Speaker {
    /// Say `text` at `rate` (1.0 is the engine's normal speed)
    fn speak(&mut self, text: &str, rate: f32) -> Result<()>;

    /// Stay silent for `millis` milliseconds
    fn pause(&mut self, _millis: u64) -> Result<()> {
        Ok(())
    }
}

/// Play a plan on `speaker`, stopping at the first failure
pub fn deliver<S: Speaker + ?Sized>(speaker: &mut S, plan: &[Utterance]) -> Result<()> {
    for utterance in plan {
        speaker.speak(&utterance.text, utterance.rate)?;
        if utterance.pause_after_ms > 0 {
            speaker.pause(utterance.pause_after_ms)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhonicsError;
    use crate::tables::english;

    fn rewrite(syllable: &str) -> String {
        rewrite_for_speech(&english(), syllable)
    }

    #[derive(Default)]
    struct Recorder {
        spoken: Vec<(String, f32)>,
        pauses: Vec<u64>,
        fail_on: Option<String>,
    }

    impl Speaker for Recorder {
        fn speak(&mut self, text: &str, rate: f32) -> Result<()> {
            if self.fail_on.as_deref() == Some(text) {
                return Err(PhonicsError::Speech(format!("cannot say {text}")));
            }
            self.spoken.push((text.to_string(), rate));
            Ok(())
        }

        fn pause(&mut self, millis: u64) -> Result<()> {
            self.pauses.push(millis);
            Ok(())
        }
    }

    #[test]
    fn test_exact_overrides() {
        assert_eq!(rewrite("tle"), "tul");
        assert_eq!(rewrite("TLE"), "tul");
        assert_eq!(rewrite("tion"), "shun");
        assert_eq!(rewrite("ies"), "eez");
    }

    #[test]
    fn test_suffix_overrides() {
        assert_eq!(rewrite("table"), "ta-bul");
        assert_eq!(rewrite("nation"), "na-shun");
        assert_eq!(rewrite("ture"), "chur");
        assert_eq!(rewrite("picture"), "pic-chur");
    }

    #[test]
    fn test_schwa_fallbacks() {
        assert_eq!(rewrite("t"), "tuh");
        assert_eq!(rewrite("st"), "stuh");
        assert_eq!(rewrite("str"), "struh");
        // clusters with an entry use it
        assert_eq!(rewrite("sh"), "shh");
    }

    #[test]
    fn test_pronounceable_unchanged() {
        assert_eq!(rewrite("ing"), "ing");
        assert_eq!(rewrite("hap"), "hap");
        assert_eq!(rewrite("py"), "py");
        assert_eq!(rewrite("fish"), "fish");
        assert_eq!(rewrite("strngth"), "strngth");
        assert_eq!(rewrite(""), "");
    }

    #[test]
    fn test_hint() {
        let hint = phonics_hint(&english(), "little", 4).unwrap();
        assert_eq!(hint.syllable, "tle");
        assert_eq!(hint.pronunciation, "tul");
        assert_eq!(hint.syllable_index, 1);
        assert_eq!(hint.hint_text, "Listen to part 2 of 2: \"tul\"");

        let hint = phonics_hint(&english(), "cat", 0).unwrap();
        assert_eq!(hint.hint_text, "Listen: \"cat\"");

        assert!(phonics_hint(&english(), "cat", 5).is_none());
    }

    #[test]
    fn test_plan_phonics() {
        let tables = english();
        let plan = plan_phonics(&tables, "Little");
        let texts: Vec<&str> = plan.iter().map(|u| u.text.as_str()).collect();
        assert_eq!(texts, vec!["lit", "tul", "little"]);

        let speech = tables.speech();
        assert_eq!(plan[0].pause_after_ms, speech.syllable_pause_ms);
        assert_eq!(plan[1].pause_after_ms, speech.word_pause_ms);
        assert_eq!(plan[2].rate, speech.word_rate);
        assert_eq!(plan[2].pause_after_ms, 0);
    }

    #[test]
    fn test_plan_for_empty_word() {
        assert!(plan_phonics(&english(), "").is_empty());
    }

    #[test]
    fn test_plan_hint() {
        let tables = english();
        let utterance = plan_phonics_hint(&tables, "happy", 3).unwrap();
        assert_eq!(utterance.text, "py");
        assert_eq!(utterance.rate, tables.speech().hint_rate);
        assert!(plan_phonics_hint(&tables, "happy", 9).is_none());
    }

    #[test]
    fn test_deliver() {
        let tables = english();
        let mut recorder = Recorder::default();
        deliver(&mut recorder, &plan_phonics(&tables, "happy")).unwrap();

        let texts: Vec<&str> = recorder.spoken.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(texts, vec!["hap", "py", "happy"]);
        assert_eq!(recorder.pauses.len(), 2);
    }

    #[test]
    fn test_deliver_stops_on_error() {
        let tables = english();
        let mut recorder = Recorder {
            fail_on: Some("hap".to_string()),
            ..Default::default()
        };
        let result = deliver(&mut recorder, &plan_phonics(&tables, "happy"));
        assert!(matches!(result, Err(PhonicsError::Speech(_))));
        assert!(recorder.spoken.is_empty());
    }
}
