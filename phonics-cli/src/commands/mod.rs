//! CLI command implementations

use anyhow::Result;
use clap::{Args, Subcommand};
use phonics_core::PhonicsAnalyzer;
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::output::OutputFormat;

pub mod analyze;
pub mod generate_config;
pub mod guide;
pub mod hint;
pub mod speak;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Break words into syllables, sounds, blends and pattern
    Analyze(analyze::AnalyzeArgs),

    /// Show the sound of each letter group
    Guide(guide::GuideArgs),

    /// Show the hint for one letter of a word
    Hint(hint::HintArgs),

    /// Sound out a word as a speech transcript
    Speak(speak::SpeakArgs),

    /// Validate a lookup tables file
    Validate(validate::ValidateArgs),

    /// Write the built-in tables as an editable TOML file
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List phonics pattern labels
    Patterns,

    /// List available output formats
    Formats,
}

/// Options shared by the word commands
#[derive(Debug, Args, Default)]
pub struct CommonArgs {
    /// Lookup tables file (default: built-in English)
    #[arg(long, value_name = "FILE")]
    pub tables: Option<PathBuf>,

    /// CLI configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when commands run in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }

    pub fn load_config(&self) -> Result<CliConfig> {
        CliConfig::load(self.config.as_deref())
    }

    /// Analyzer over `--tables`, else the config's tables, else English
    pub fn load_analyzer(&self, config: &CliConfig) -> Result<PhonicsAnalyzer> {
        match self.tables.as_deref().or(config.tables.path.as_deref()) {
            Some(path) => {
                log::info!("Loading tables from {}", path.display());
                Ok(PhonicsAnalyzer::from_file(path)?)
            }
            None => Ok(PhonicsAnalyzer::english()),
        }
    }

    /// `--format` if given, else the config default
    pub fn resolve_format(
        &self,
        format: Option<OutputFormat>,
        config: &CliConfig,
    ) -> Result<OutputFormat> {
        match format {
            Some(format) => Ok(format),
            None => config.default_format(),
        }
    }
}
