//! pragmaseg command-line interface

use anyhow::Result;
use clap::Parser;
use pragmaseg_cli::commands::Commands;

/// Rule-based multilingual sentence boundary detection
#[derive(Debug, Parser)]
#[command(
    name = "pragmaseg",
    version,
    about = "Rule-based multilingual sentence boundary detection",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_process_args() {
        let cli = Cli::try_parse_from(["pragmaseg", "process", "-i", "a.txt", "-l", "de"]).unwrap();
        match cli.command {
            Commands::Process(args) => {
                assert_eq!(args.input, vec!["a.txt"]);
                assert_eq!(args.language.as_deref(), Some("de"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
