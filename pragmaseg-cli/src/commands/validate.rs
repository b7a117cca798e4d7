//! Validate command implementation

use anyhow::Result;
use clap::Args;
use pragmaseg_core::LanguageProfile;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to language configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub language_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating language configuration: {}",
            self.language_config.display()
        );

        // compiling the profile also compiles extension patterns
        match LanguageProfile::from_file(&self.language_config, None) {
            Ok(profile) => {
                println!("✓ Configuration is valid!");
                println!("  Language code: {}", profile.code());
                println!("  Language name: {}", profile.name());
                println!("  Terminators: {}", profile.terminators().iter().collect::<String>());
                println!("  Extension rules: {}", profile.extensions().len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            language_config: PathBuf::from("test.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("test.toml"));
    }

    #[test]
    fn test_validate_valid_config() {
        let temp_file = write_config(
            r#"
[metadata]
code = "test"
name = "Test Language"

[terminators]
chars = ["."]

[abbreviations]
general = ["approx"]
"#,
        );

        let args = ValidateArgs {
            language_config: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_config() {
        let temp_file = write_config(
            r#"
[metadata]
code = ""
name = "Test"

[terminators]
chars = ["."]
"#,
        );

        let args = ValidateArgs {
            language_config: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_err());
    }

    #[test]
    fn test_validate_bad_extension_pattern() {
        let temp_file = write_config(
            r#"
[metadata]
code = "test"
name = "Test"

[terminators]
chars = ["."]

[[rules.extensions]]
name = "broken"
pattern = "(unclosed"
action = "mask"
target = "."
"#,
        );

        let args = ValidateArgs {
            language_config: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_err());
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            language_config: PathBuf::from("/nonexistent/language.toml"),
        };

        assert!(args.execute().is_err());
    }
}
