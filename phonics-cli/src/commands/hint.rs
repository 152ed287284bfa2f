//! Hint command implementation

use anyhow::Result;
use clap::Args;

use super::CommonArgs;
use crate::error::CliError;

/// Arguments for the hint command
#[derive(Debug, Args)]
pub struct HintArgs {
    /// Word being spelled
    #[arg(short, long, value_name = "WORD")]
    pub word: String,

    /// Zero-based index of the letter the learner is on
    #[arg(short, long, value_name = "INDEX")]
    pub position: usize,

    /// Print the hint as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl HintArgs {
    /// Execute the hint command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();

        let config = self.common.load_config()?;
        let analyzer = self.common.load_analyzer(&config)?;

        let hint = analyzer
            .phonics_hint(&self.word, self.position)
            .ok_or_else(|| CliError::IndexOutOfRange {
                word: self.word.clone(),
                index: self.position,
            })?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&hint)?);
        } else {
            println!("syllable:      {}", hint.syllable);
            println!("pronunciation: {}", hint.pronunciation);
            println!("{}", hint.hint_text);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hint_args(word: &str, position: usize) -> HintArgs {
        HintArgs {
            word: word.to_string(),
            position,
            json: false,
            common: CommonArgs {
                quiet: true,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_hint_in_range() {
        assert!(hint_args("little", 4).execute().is_ok());
    }

    #[test]
    fn test_hint_out_of_range() {
        let err = hint_args("cat", 3).execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::IndexOutOfRange { index: 3, .. })
        ));
    }
}
