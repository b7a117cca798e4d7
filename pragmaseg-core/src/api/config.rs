//! Configuration API for sentence segmentation

use crate::document::DocType;
use crate::error::{Result, SegmenterError};
use crate::language::COMMON_LANGUAGE;

/// Segmentation configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) language: String,
    pub(crate) doc_type: DocType,
    pub(crate) clean: bool,
    pub(crate) max_input_len: Option<usize>, // in chars
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: COMMON_LANGUAGE.to_string(),
            doc_type: DocType::Plain,
            clean: true,
            max_input_len: None,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Requested language code
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Document type used by [`crate::Segmenter::segment`]
    pub fn doc_type(&self) -> DocType {
        self.doc_type
    }

    /// Whether the cleaner runs before resolution
    pub fn clean(&self) -> bool {
        self.clean
    }

    /// Input cap in characters
    pub fn max_input_len(&self) -> Option<usize> {
        self.max_input_len
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            return Err(SegmenterError::Configuration(
                "language must not be empty".into(),
            ));
        }

        if self.max_input_len == Some(0) {
            return Err(SegmenterError::Configuration(
                "max_input_len must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    language: Option<String>,
    doc_type: Option<DocType>,
    clean: Option<bool>,
    max_input_len: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language by code or English name
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }

    /// Set the document type
    pub fn doc_type(mut self, doc_type: DocType) -> Self {
        self.doc_type = Some(doc_type);
        self
    }

    /// Set the document type by name (`plain`, `pdf`, `html`)
    pub fn doc_type_name(mut self, name: &str) -> Result<Self> {
        self.doc_type = Some(name.parse()?);
        Ok(self)
    }

    /// Enable or disable the cleaner
    pub fn clean(mut self, enabled: bool) -> Self {
        self.clean = Some(enabled);
        self
    }

    /// Cap the number of characters processed per call
    pub fn max_input_len(mut self, chars: usize) -> Self {
        self.max_input_len = Some(chars);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(language) = self.language {
            config.language = language;
        }

        if let Some(doc_type) = self.doc_type {
            config.doc_type = doc_type;
        }

        if let Some(clean) = self.clean {
            config.clean = clean;
        }

        if self.max_input_len.is_some() {
            config.max_input_len = self.max_input_len;
        }

        config.validate()?;
        Ok(config)
    }
}
