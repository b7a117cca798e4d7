//! Segmenter: profile resolution, cleaning, rule catalog, scanner

use std::sync::Arc;

use crate::api::Config;
use crate::cleaner::Cleaner;
use crate::document::{DocType, Document};
use crate::error::Result;
use crate::language::{LanguageProfile, LanguageRegistry};
use crate::rules::RuleCatalog;
use crate::scanner::BoundaryScanner;
use crate::sentinel;

/// Sentence segmenter bound to one language profile
///
/// Holds no per-call state; one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Segmenter {
    profile: Arc<LanguageProfile>,
    catalog: Arc<RuleCatalog>,
    config: Config,
}

impl Segmenter {
    /// Segmenter for the default language with default settings
    pub fn new() -> Self {
        Self::build(Config::default())
    }

    /// Segmenter for a language code or English name. Unknown languages
    /// fall back to the default profile with a warning.
    pub fn with_language(code: &str) -> Self {
        let config = Config {
            language: code.to_string(),
            ..Config::default()
        };
        Self::build(config)
    }

    /// Segmenter from a validated configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Segmenter for an externally loaded profile
    pub fn with_profile(profile: Arc<LanguageProfile>, doc_type: DocType) -> Self {
        let catalog = Arc::new(RuleCatalog::for_profile(&profile));
        let config = Config {
            language: profile.code().to_string(),
            doc_type,
            ..Config::default()
        };
        Self {
            profile,
            catalog,
            config,
        }
    }

    /// Segmenter for an externally loaded profile with full settings. The
    /// language named in `config` is ignored in favor of the profile.
    pub fn with_profile_config(profile: Arc<LanguageProfile>, config: Config) -> Result<Self> {
        config.validate()?;
        let catalog = Arc::new(RuleCatalog::for_profile(&profile));
        let config = Config {
            language: profile.code().to_string(),
            ..config
        };
        Ok(Self {
            profile,
            catalog,
            config,
        })
    }

    fn build(config: Config) -> Self {
        let profile = LanguageRegistry::global().resolve(&config.language);
        let catalog = Arc::new(RuleCatalog::for_profile(&profile));
        Self {
            profile,
            catalog,
            config,
        }
    }

    /// Split `text` into sentences using the configured document type
    pub fn segment(&self, text: &str) -> Vec<String> {
        self.run(text, self.config.doc_type)
    }

    /// Split a document into sentences using its own document type
    pub fn segment_document(&self, document: &Document) -> Vec<String> {
        self.run(&document.text, document.doc_type)
    }

    /// Segment several texts; output order follows input order
    pub fn segment_batch(&self, texts: &[&str]) -> Vec<Vec<String>> {
        texts.iter().map(|text| self.segment(text)).collect()
    }

    /// Language profile in use
    pub fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn run(&self, text: &str, doc_type: DocType) -> Vec<String> {
        let text = sentinel::strip_reserved(text);
        if text.trim().is_empty() {
            return Vec::new();
        }

        let text = match self.config.max_input_len {
            Some(cap) => truncate_chars(&text, cap),
            None => &text,
        };

        let cleaned = if self.config.clean {
            Cleaner::new(doc_type).clean(text)
        } else {
            text.to_string()
        };
        let resolved = self.catalog.resolve(&cleaned, &self.profile);
        let sentences = BoundaryScanner::split(&resolved, &self.profile);

        log::debug!(
            "segmented {} chars into {} sentences ({}, {})",
            text.len(),
            sentences.len(),
            self.profile.code(),
            doc_type
        );
        sentences
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

fn truncate_chars(text: &str, cap: usize) -> &str {
    match text.char_indices().nth(cap) {
        Some((byte, _)) => {
            log::warn!("input longer than {cap} characters; only the first {cap} are segmented");
            &text[..byte]
        }
        None => text,
    }
}

/// Segment `text` in one call. `language` defaults to the common profile,
/// `doc_type` to plain text.
pub fn segment(text: &str, language: Option<&str>, doc_type: Option<DocType>) -> Vec<String> {
    let registry = LanguageRegistry::global();
    let profile = match language {
        Some(code) => registry.resolve(code),
        None => registry.default_profile(),
    };
    Segmenter::with_profile(profile, doc_type.unwrap_or_default()).segment(text)
}
