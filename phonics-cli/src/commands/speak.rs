//! Speak command implementation
//!
//! Audio playback belongs to the host application; this command drives the
//! same speech plans through a speaker that writes a transcript.

use anyhow::Result;
use clap::Args;
use phonics_core::{PhonicsError, Speaker, Utterance};
use std::io::{self, Write};

use super::CommonArgs;
use crate::error::CliError;

/// What to say
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SpeakMode {
    /// Syllables one at a time, then the whole word
    Phonics,
    /// Syllables only
    Syllables,
    /// The syllable under `--position`
    Hint,
}

/// Arguments for the speak command
#[derive(Debug, Args)]
pub struct SpeakArgs {
    /// Word to sound out
    #[arg(short, long, value_name = "WORD")]
    pub word: String,

    #[arg(short, long, value_enum, default_value = "phonics")]
    pub mode: SpeakMode,

    /// Letter index for hint mode
    #[arg(short, long, value_name = "INDEX", required_if_eq("mode", "hint"))]
    pub position: Option<usize>,

    /// Print the speech plan as JSON instead of a transcript
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Speaker that writes what it would say
pub struct TranscriptSpeaker<W: Write> {
    writer: W,
}

impl<W: Write> TranscriptSpeaker<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn speech_error(err: io::Error) -> PhonicsError {
    PhonicsError::Speech(err.to_string())
}

impl<W: Write> Speaker for TranscriptSpeaker<W> {
    fn speak(&mut self, text: &str, rate: f32) -> phonics_core::Result<()> {
        writeln!(self.writer, "say \"{text}\" at {rate:.2}").map_err(speech_error)
    }

    fn pause(&mut self, millis: u64) -> phonics_core::Result<()> {
        writeln!(self.writer, "pause {millis} ms").map_err(speech_error)
    }
}

impl SpeakArgs {
    /// Execute the speak command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();

        let config = self.common.load_config()?;
        let analyzer = self.common.load_analyzer(&config)?;

        if self.json {
            let plan: Vec<Utterance> = match self.mode {
                SpeakMode::Phonics => analyzer.plan_phonics(&self.word),
                SpeakMode::Syllables => analyzer.plan_syllables(&self.word),
                SpeakMode::Hint => vec![analyzer
                    .plan_phonics_hint(&self.word, self.position()?)
                    .ok_or_else(|| self.out_of_range())?],
            };
            println!("{}", serde_json::to_string_pretty(&plan)?);
            return Ok(());
        }

        let mut speaker = TranscriptSpeaker::new(io::stdout().lock());
        match self.mode {
            SpeakMode::Phonics => analyzer.speak_phonics(&self.word, &mut speaker)?,
            SpeakMode::Syllables => analyzer.speak_syllables(&self.word, &mut speaker)?,
            SpeakMode::Hint => {
                if !analyzer.speak_phonics_hint(&self.word, self.position()?, &mut speaker)? {
                    return Err(self.out_of_range().into());
                }
            }
        }
        Ok(())
    }

    fn position(&self) -> Result<usize> {
        self.position
            .ok_or_else(|| anyhow::anyhow!("--position is required with --mode hint"))
    }

    fn out_of_range(&self) -> CliError {
        CliError::IndexOutOfRange {
            word: self.word.clone(),
            index: self.position.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonics_core::PhonicsAnalyzer;

    #[test]
    fn test_transcript() {
        let analyzer = PhonicsAnalyzer::english();
        let mut speaker = TranscriptSpeaker::new(Vec::new());
        analyzer.speak_phonics("little", &mut speaker).unwrap();

        let transcript = String::from_utf8(speaker.into_inner()).unwrap();
        let lines: Vec<&str> = transcript.lines().collect();
        assert_eq!(
            lines,
            vec![
                "say \"lit\" at 0.60",
                "pause 300 ms",
                "say \"tul\" at 0.60",
                "pause 500 ms",
                "say \"little\" at 0.80",
            ]
        );
    }

    #[test]
    fn test_hint_transcript() {
        let analyzer = PhonicsAnalyzer::english();
        let mut speaker = TranscriptSpeaker::new(Vec::new());
        assert!(analyzer
            .speak_phonics_hint("happy", 0, &mut speaker)
            .unwrap());
        assert!(!analyzer
            .speak_phonics_hint("happy", 9, &mut speaker)
            .unwrap());

        let transcript = String::from_utf8(speaker.into_inner()).unwrap();
        assert_eq!(transcript, "say \"hap\" at 0.70\n");
    }

    #[test]
    fn test_hint_mode_out_of_range() {
        let args = SpeakArgs {
            word: "cat".to_string(),
            mode: SpeakMode::Hint,
            position: Some(7),
            json: true,
            common: CommonArgs {
                quiet: true,
                ..Default::default()
            },
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}
