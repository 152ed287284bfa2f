//! Command-line front end for the phonics engine

use anyhow::Result;
use clap::Parser;
use phonics_cli::commands::{Commands, ListCommands};
use phonics_cli::output::OutputFormat;
use phonics_core::PatternLabel;

#[derive(Debug, Parser)]
#[command(
    name = "phonics",
    author,
    version,
    about = "Phonics breakdown for spelling practice: syllables, sounds and pronunciation",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => args.execute(),
        Commands::Guide(args) => args.execute(),
        Commands::Hint(args) => args.execute(),
        Commands::Speak(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
        Commands::List { subcommand } => {
            list(subcommand);
            Ok(())
        }
    }
}

fn list(subcommand: ListCommands) {
    match subcommand {
        ListCommands::Patterns => {
            println!("Pattern labels (checked in this order):");
            for pattern in PatternLabel::ALL {
                println!("  {pattern}");
            }
        }
        ListCommands::Formats => {
            println!("Available output formats:");
            for format in OutputFormat::ALL {
                println!("  {:<10} {}", format.name(), format.description());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_hint() {
        let cli = Cli::try_parse_from(["phonics", "hint", "-w", "little", "-p", "4"]).unwrap();
        match cli.command {
            Commands::Hint(args) => {
                assert_eq!(args.word, "little");
                assert_eq!(args.position, 4);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_analyze_needs_a_source() {
        assert!(Cli::try_parse_from(["phonics", "analyze"]).is_err());
    }
}
