//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use pragmaseg_core::rules::BASELINE_RULES;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new configuration
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating language configuration template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to customize language rules");
        println!("2. Validate your configuration:");
        println!("   pragmaseg validate -c {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   pragmaseg process -i input.txt --language-config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# Language configuration for {code}

[metadata]
code = "{code}"
name = "Custom Language"

# Characters that may end a sentence
[terminators]
chars = [".", "!", "?"]

# Abbreviations are listed without their trailing period
[abbreviations]
# Merge the English lists into this language
inherit_common = false
case_sensitive = false
# "contextual": a capitalized next word ends the sentence unless the
#               abbreviation is prepositive
# "always":     never split after a listed abbreviation
policy = "contextual"
general = ["etc", "vs"]
# Titles that precede a name (Dr. Smith)
prepositive = ["dr", "mr", "mrs"]
# Abbreviations that precede a number (No. 5)
number = ["no", "nr"]

# Words that usually begin a sentence
[sentence_starters]
inherit_common = false
words = ["The", "This"]

# Paired punctuation whose inner terminators are not boundaries.
# Listing pairs replaces the default set.
[enclosures]
pairs = [
    {{ open = "(", close = ")" }},
    {{ open = "[", close = "]" }},
    {{ open = '"', close = '"', leading_space = true }},
    {{ open = "“", close = "”" }},
    {{ open = "«", close = "»" }},
    {{ open = "‘", close = "’", leading_space = true }},
    {{ open = "'", close = "'", leading_space = true }},
    {{ open = "--", close = "--", leading_space = true }},
]

# Words containing ! or ? that never end a sentence (Yahoo!)
[suppression]
inherit_common = true
exclamation_words = []

[rules]
# Built-in rules that can be disabled:
# {rules}
disable = []

# Extension rules run at the end of their stage (lists, abbreviations,
# numbers, punctuation, ellipsis, enclosures, extensions). Capture group 1,
# when present, selects the part of the match to act on.
#
# [[rules.extensions]]
# name = "ordinal_number"
# stage = "numbers"
# pattern = '(?:^|\s)\d{{1,2}}(\.)\s'
# action = "mask"
# target = "."
"#,
            code = self.language_code,
            rules = BASELINE_RULES.join(", "),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pragmaseg_core::{LanguageConfig, LanguageProfile, Segmenter};
    use std::sync::Arc;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            language_code: "test".to_string(),
            output: PathBuf::from("test.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("test"));
        assert!(debug_str.contains("test.toml"));
    }

    #[test]
    fn test_generate_template_content() {
        let args = GenerateConfigArgs {
            language_code: "xx".to_string(),
            output: PathBuf::from("xx.toml"),
        };

        let template = args.generate_template();
        assert!(template.contains("code = \"xx\""));
        assert!(template.contains("[metadata]"));
        assert!(template.contains("[terminators]"));
        assert!(template.contains("[abbreviations]"));
        assert!(template.contains("numeric_period"));
    }

    #[test]
    fn test_generated_template_is_valid() {
        let args = GenerateConfigArgs {
            language_code: "xx".to_string(),
            output: PathBuf::from("xx.toml"),
        };

        let config = LanguageConfig::from_toml(&args.generate_template()).unwrap();
        config.validate().unwrap();
        assert_eq!(config.metadata.code, "xx");
        assert_eq!(config.enclosures.pairs.len(), 8);
        assert!(config.rules.extensions.is_empty());

        let profile = LanguageProfile::from_config(&config).unwrap();
        let segmenter = Segmenter::with_profile(Arc::new(profile), Default::default());
        assert_eq!(
            segmenter.segment("Dr. Smith arrived. The end."),
            vec!["Dr. Smith arrived.", "The end."]
        );
    }

    #[test]
    fn test_execute_writes_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("custom.toml");
        let args = GenerateConfigArgs {
            language_code: "custom".to_string(),
            output: output.clone(),
        };

        args.execute().unwrap();
        let profile = LanguageProfile::from_file(&output, None).unwrap();
        assert_eq!(profile.code(), "custom");
        assert_eq!(profile.name(), "Custom Language");
    }

    #[test]
    fn test_execute_fails_on_missing_directory() {
        let dir = TempDir::new().unwrap();
        let args = GenerateConfigArgs {
            language_code: "xx".to_string(),
            output: dir.path().join("missing").join("xx.toml"),
        };

        assert!(args.execute().is_err());
    }
}
