//! TOML schema for language configuration
//!
//! One file describes one language. Sections other than `[metadata]` and
//! `[terminators]` are optional.

use crate::error::{Result, SegmenterError};
use crate::rules::{RuleStage, BASELINE_RULES};
use serde::{Deserialize, Serialize};

/// Root language configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: Metadata,
    pub terminators: Terminators,
    #[serde(default)]
    pub abbreviations: Abbreviations,
    #[serde(default)]
    pub sentence_starters: SentenceStarters,
    #[serde(default)]
    pub enclosures: Enclosures,
    #[serde(default)]
    pub suppression: Suppression,
    #[serde(default)]
    pub rules: Rules,
}

/// Language metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Boundary punctuation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Terminators {
    pub chars: Vec<char>,
}

/// How listed abbreviations decide whether their period is masked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbbreviationPolicy {
    /// Look at the next word: capitals end the sentence unless the
    /// abbreviation is prepositive
    #[default]
    Contextual,
    /// Mask whenever the abbreviation is followed by more text
    Always,
}

/// Abbreviation lists, stored without their trailing period
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Abbreviations {
    #[serde(default)]
    pub inherit_common: bool,
    #[serde(default)]
    pub case_sensitive: bool,
    #[serde(default)]
    pub policy: AbbreviationPolicy,
    #[serde(default)]
    pub general: Vec<String>,
    #[serde(default)]
    pub prepositive: Vec<String>,
    #[serde(default)]
    pub number: Vec<String>,
}

/// Sentence starter words
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SentenceStarters {
    #[serde(default)]
    pub inherit_common: bool,
    #[serde(default)]
    pub words: Vec<String>,
}

/// Enclosure pairs. A missing section means the default pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enclosures {
    #[serde(default = "default_pairs")]
    pub pairs: Vec<EnclosurePair>,
}

impl Default for Enclosures {
    fn default() -> Self {
        Self {
            pairs: default_pairs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnclosurePair {
    pub open: String,
    pub close: String,
    /// Opener must be at text start or after whitespace
    #[serde(default)]
    pub leading_space: bool,
}

impl EnclosurePair {
    fn new(open: &str, close: &str, leading_space: bool) -> Self {
        Self {
            open: open.to_string(),
            close: close.to_string(),
            leading_space,
        }
    }
}

/// Words whose internal punctuation never ends a sentence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suppression {
    #[serde(default = "default_true")]
    pub inherit_common: bool,
    #[serde(default)]
    pub exclamation_words: Vec<String>,
}

impl Default for Suppression {
    fn default() -> Self {
        Self {
            inherit_common: true,
            exclamation_words: Vec::new(),
        }
    }
}

/// Rule catalog adjustments
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Rules {
    /// Baseline rule names to switch off
    #[serde(default)]
    pub disable: Vec<String>,
    /// Extra regex-driven rules
    #[serde(default)]
    pub extensions: Vec<ExtensionRule>,
}

/// What an extension rule does with its matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionAction {
    Mask,
    Delete,
    Rewrite,
}

/// `[[rules.extensions]]` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionRule {
    pub name: String,
    #[serde(default)]
    pub stage: RuleStage,
    pub pattern: String,
    pub action: ExtensionAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_pairs() -> Vec<EnclosurePair> {
    vec![
        EnclosurePair::new("(", ")", false),
        EnclosurePair::new("[", "]", false),
        EnclosurePair::new("\"", "\"", true),
        EnclosurePair::new("“", "”", false),
        EnclosurePair::new("«", "»", false),
        EnclosurePair::new("‘", "’", true),
        EnclosurePair::new("'", "'", true),
        EnclosurePair::new("--", "--", true),
    ]
}

/// Highest code point a terminator may have (it must be maskable)
const MAX_TERMINATOR: u32 = 0xFFFD;

impl LanguageConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| SegmenterError::Configuration(e.to_string()))
    }

    /// Serialize to TOML text
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| SegmenterError::Configuration(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(SegmenterError::InvalidLanguageRules(msg));

        if self.metadata.code.trim().is_empty() {
            return invalid("language code must not be empty".into());
        }

        if self.terminators.chars.is_empty() {
            return invalid(format!(
                "{}: no terminator characters defined",
                self.metadata.code
            ));
        }

        if let Some(ch) = self
            .terminators
            .chars
            .iter()
            .find(|&&c| c as u32 > MAX_TERMINATOR || c.is_whitespace())
        {
            return invalid(format!(
                "{}: terminator {ch:?} cannot be used as boundary punctuation",
                self.metadata.code
            ));
        }

        if self.enclosures.pairs.len() > 255 {
            return invalid(format!(
                "{}: too many enclosure pairs (max 255)",
                self.metadata.code
            ));
        }

        if let Some(pair) = self
            .enclosures
            .pairs
            .iter()
            .find(|p| p.open.is_empty() || p.close.is_empty())
        {
            return invalid(format!(
                "{}: enclosure pair {:?}/{:?} has an empty side",
                self.metadata.code, pair.open, pair.close
            ));
        }

        for name in &self.rules.disable {
            if !BASELINE_RULES.contains(&name.as_str()) {
                return invalid(format!(
                    "{}: cannot disable unknown rule '{name}'",
                    self.metadata.code
                ));
            }
        }

        for ext in &self.rules.extensions {
            if ext.name.trim().is_empty() {
                return invalid(format!(
                    "{}: extension rule without a name",
                    self.metadata.code
                ));
            }
            if ext.action == ExtensionAction::Rewrite && ext.replacement.is_none() {
                return invalid(format!(
                    "{}: rewrite rule '{}' needs a replacement",
                    self.metadata.code, ext.name
                ));
            }
        }

        Ok(())
    }
}
