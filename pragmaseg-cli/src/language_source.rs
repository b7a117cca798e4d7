//! Language source management for CLI

use crate::error::CliError;
use anyhow::{Context, Result};
use pragmaseg_core::{LanguageProfile, LanguageRegistry};
use std::path::PathBuf;
use std::sync::Arc;

/// Source of language rules
#[derive(Debug, Clone, PartialEq)]
pub enum LanguageSource {
    /// Embedded language, by code or English name
    BuiltIn(String),
    /// External configuration file
    External {
        /// Path to the configuration file
        path: PathBuf,
        /// Optional language code override
        language_code: Option<String>,
    },
}

impl LanguageSource {
    /// Get the display name for the language source
    pub fn display_name(&self) -> String {
        match self {
            LanguageSource::BuiltIn(code) => format!("Built-in: {code}"),
            LanguageSource::External {
                path,
                language_code,
            } => {
                if let Some(code) = language_code {
                    format!("External: {} (code: {})", path.display(), code)
                } else {
                    format!("External: {}", path.display())
                }
            }
        }
    }

    /// Load the profile. Unknown built-in codes are an error here, unlike
    /// in the library, which falls back to English.
    pub fn load(&self) -> Result<Arc<LanguageProfile>> {
        match self {
            LanguageSource::BuiltIn(code) => LanguageRegistry::global()
                .lookup(code)
                .map_err(|_| CliError::UnsupportedLanguage(code.clone()).into()),
            LanguageSource::External {
                path,
                language_code,
            } => {
                let profile = LanguageProfile::from_file(path, language_code.as_deref())
                    .with_context(|| {
                        format!("Failed to load language configuration: {}", path.display())
                    })?;
                Ok(Arc::new(profile))
            }
        }
    }
}
