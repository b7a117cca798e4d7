//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use pragmaseg_core::{DocType, LanguageRegistry};

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Process text files for sentence boundary detection
    Process(process::ProcessArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Generate a language configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Validate a language configuration file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available languages
    Languages,

    /// List available output formats
    Formats,

    /// List supported document types
    DocTypes,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing to stdout
    pub fn execute(&self) {
        for line in self.lines() {
            println!("{line}");
        }
    }

    fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Languages => {
                let mut lines = vec!["Available languages:".to_string()];
                lines.extend(
                    LanguageRegistry::global()
                        .languages()
                        .into_iter()
                        .map(|(code, name)| format!("  {code:<4} {name}")),
                );
                lines
            }
            ListCommands::Formats => {
                let mut lines = vec!["Available output formats:".to_string()];
                lines.extend(process::OutputFormat::value_variants().iter().map(|format| {
                    let help = format
                        .to_possible_value()
                        .and_then(|v| v.get_help().map(|h| h.to_string()))
                        .unwrap_or_default();
                    format!("  {:<9} {help}", format.as_str())
                }));
                lines
            }
            ListCommands::DocTypes => {
                let mut lines = vec!["Supported document types:".to_string()];
                lines.extend(DocType::all().iter().map(|t| format!("  {t}")));
                lines
            }
        }
    }
}
