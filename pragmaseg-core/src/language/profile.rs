//! Compiled, read-only language profile

use crate::error::{Result, SegmenterError};
use crate::language::config::{AbbreviationPolicy, LanguageConfig};
use crate::language::loader;
use crate::language::tables::{AbbreviationKind, EncTable, SentenceStarterTable, TermTable, Trie};
use crate::rules::PatternRule;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// Everything the rule catalog and the scanner need to know about one
/// language
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    code: String,
    name: String,
    terminators: TermTable,
    abbreviations: Trie,
    policy: AbbreviationPolicy,
    starters: SentenceStarterTable,
    enclosures: EncTable,
    exclamation_words: Vec<Vec<char>>,
    disabled_rules: HashSet<String>,
    extensions: Vec<Arc<PatternRule>>,
}

impl LanguageProfile {
    /// Compile a profile from configuration
    pub fn from_config(config: &LanguageConfig) -> Result<Self> {
        config.validate()?;

        let is_common = config
            .metadata
            .code
            .eq_ignore_ascii_case(loader::COMMON_LANGUAGE);
        let needs_common = !is_common
            && (config.abbreviations.inherit_common
                || config.sentence_starters.inherit_common
                || config.suppression.inherit_common);
        let common = if needs_common {
            Some(loader::common_config()?)
        } else {
            None
        };

        let abbr = &config.abbreviations;
        let (mut general, mut number, mut prepositive) = (
            abbr.general.clone(),
            abbr.number.clone(),
            abbr.prepositive.clone(),
        );
        let mut starter_words = config.sentence_starters.words.clone();
        let mut exclamations = config.suppression.exclamation_words.clone();

        if let Some(common) = common {
            if abbr.inherit_common {
                general.extend(common.abbreviations.general.iter().cloned());
                number.extend(common.abbreviations.number.iter().cloned());
                prepositive.extend(common.abbreviations.prepositive.iter().cloned());
            }
            if config.sentence_starters.inherit_common {
                starter_words.extend(common.sentence_starters.words.iter().cloned());
            }
            if config.suppression.inherit_common {
                exclamations.extend(common.suppression.exclamation_words.iter().cloned());
            }
        }

        let extensions = config
            .rules
            .extensions
            .iter()
            .map(|ext| PatternRule::compile(ext).map(Arc::new))
            .collect::<Result<Vec<_>>>()?;

        let mut exclamation_words: Vec<Vec<char>> = exclamations
            .iter()
            .map(|w| w.trim().chars().collect::<Vec<_>>())
            .filter(|w| !w.is_empty())
            .collect();
        exclamation_words.dedup();

        let profile = Self {
            code: config.metadata.code.trim().to_string(),
            name: config.metadata.name.clone(),
            terminators: TermTable::new(&config.terminators.chars),
            abbreviations: Trie::from_lists(
                &general,
                &number,
                &prepositive,
                abbr.case_sensitive,
            ),
            policy: abbr.policy,
            starters: SentenceStarterTable::new(&starter_words),
            enclosures: EncTable::new(
                config
                    .enclosures
                    .pairs
                    .iter()
                    .map(|p| (p.open.as_str(), p.close.as_str(), p.leading_space)),
            ),
            exclamation_words,
            disabled_rules: config.rules.disable.iter().cloned().collect(),
            extensions,
        };

        log::debug!(
            "compiled language profile '{}': {} abbreviations, {} starters, {} extension rules",
            profile.code,
            profile.abbreviations.len(),
            profile.starters.len(),
            profile.extensions.len()
        );
        Ok(profile)
    }

    /// Load a profile from an external TOML file. `code_override`
    /// replaces the code declared in the file.
    pub fn from_file(path: impl AsRef<Path>, code_override: Option<&str>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            SegmenterError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        let mut config: LanguageConfig = toml::from_str(&text).map_err(|e| {
            SegmenterError::Configuration(format!("cannot parse {}: {e}", path.display()))
        })?;
        if let Some(code) = code_override {
            config.metadata.code = code.to_string();
        }
        Self::from_config(&config)
    }

    /// Minimal profile with `.`, `!` and `?` as terminators and no
    /// language data. Used when no embedded profile could be loaded.
    pub fn fallback() -> Self {
        Self {
            code: loader::COMMON_LANGUAGE.to_string(),
            name: "Fallback".to_string(),
            terminators: TermTable::new(&['.', '!', '?']),
            abbreviations: Trie::new(false),
            policy: AbbreviationPolicy::Contextual,
            starters: SentenceStarterTable::default(),
            enclosures: EncTable::new([("(", ")", false), ("\"", "\"", true)]),
            exclamation_words: Vec::new(),
            disabled_rules: HashSet::new(),
            extensions: Vec::new(),
        }
    }

    /// Language code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `ch` is boundary punctuation for this language
    #[inline]
    pub fn is_terminator(&self, ch: char) -> bool {
        self.terminators.is_terminator(ch)
    }

    /// Boundary punctuation
    pub fn terminators(&self) -> &[char] {
        self.terminators.chars()
    }

    /// Kind of the abbreviation spelled by `token`
    pub fn abbreviation_kind<I>(&self, token: I) -> Option<AbbreviationKind>
    where
        I: IntoIterator<Item = char>,
    {
        self.abbreviations.lookup(token)
    }

    /// Length in characters of the longest listed abbreviation
    pub fn max_abbreviation_len(&self) -> usize {
        self.abbreviations.max_len()
    }

    pub fn abbreviation_policy(&self) -> AbbreviationPolicy {
        self.policy
    }

    pub fn is_sentence_starter(&self, word: &str) -> bool {
        self.starters.is_sentence_starter(word)
    }

    pub fn enclosures(&self) -> &EncTable {
        &self.enclosures
    }

    /// Whether `ch` closes a quote or bracket
    #[inline]
    pub fn is_closer(&self, ch: char) -> bool {
        self.enclosures.is_closer(ch)
    }

    pub fn exclamation_words(&self) -> &[Vec<char>] {
        &self.exclamation_words
    }

    /// Whether a baseline rule is switched off for this language
    pub fn is_rule_disabled(&self, name: &str) -> bool {
        self.disabled_rules.contains(name)
    }

    /// Extension rules in declaration order
    pub fn extensions(&self) -> &[Arc<PatternRule>] {
        &self.extensions
    }
}
