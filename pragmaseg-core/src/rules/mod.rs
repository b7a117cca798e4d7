//! Ambiguity resolution
//!
//! Each rule is a pure text transformation that masks punctuation which
//! must not end a sentence, deletes noise, or rewrites text (including
//! inserting paragraph breaks). Rules run in a fixed order grouped by
//! stage; a character masked by an earlier rule is no longer punctuation
//! for the rules that follow.

mod abbreviation;
mod ellipsis;
mod enclosure;
mod lists;
mod numbers;
mod pattern;
mod punctuation;

pub use pattern::PatternRule;

use crate::language::LanguageProfile;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A single named transformation
pub trait Rule: Send + Sync + fmt::Debug {
    /// Rule name, used in configuration and logs
    fn name(&self) -> &str;

    /// Apply the rule. Must not panic for any input.
    fn apply(&self, text: &str, profile: &LanguageProfile) -> String;
}

/// Catalog stage. Extension rules run at the end of their stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStage {
    Lists,
    Abbreviations,
    Numbers,
    Punctuation,
    Ellipsis,
    Enclosures,
    #[default]
    Extensions,
}

impl RuleStage {
    /// All stages in execution order
    pub const ALL: [RuleStage; 7] = [
        RuleStage::Lists,
        RuleStage::Abbreviations,
        RuleStage::Numbers,
        RuleStage::Punctuation,
        RuleStage::Ellipsis,
        RuleStage::Enclosures,
        RuleStage::Extensions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleStage::Lists => "lists",
            RuleStage::Abbreviations => "abbreviations",
            RuleStage::Numbers => "numbers",
            RuleStage::Punctuation => "punctuation",
            RuleStage::Ellipsis => "ellipsis",
            RuleStage::Enclosures => "enclosures",
            RuleStage::Extensions => "extensions",
        }
    }
}

impl fmt::Display for RuleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names of the built-in rules, in execution order
pub const BASELINE_RULES: &[&str] = &[
    "list_markers",
    "possessive_abbreviation",
    "kommanditgesellschaft",
    "single_letter_abbreviation",
    "listed_abbreviation",
    "multi_period_abbreviation",
    "numeric_period",
    "continuous_punctuation",
    "numbered_reference",
    "inner_word_period",
    "geo_location",
    "file_format",
    "ellipsis",
    "parens_between_quotes",
    "exclamation_words",
    "enclosed_punctuation",
    "quoted_terminal",
    "mid_sentence_exclamation",
];

fn baseline() -> Vec<(RuleStage, Arc<dyn Rule>)> {
    vec![
        (RuleStage::Lists, Arc::new(lists::ListMarkers)),
        (
            RuleStage::Abbreviations,
            Arc::new(abbreviation::PossessiveAbbreviation),
        ),
        (
            RuleStage::Abbreviations,
            Arc::new(abbreviation::Kommanditgesellschaft),
        ),
        (
            RuleStage::Abbreviations,
            Arc::new(abbreviation::SingleLetterAbbreviation),
        ),
        (
            RuleStage::Abbreviations,
            Arc::new(abbreviation::ListedAbbreviation),
        ),
        (
            RuleStage::Abbreviations,
            Arc::new(abbreviation::MultiPeriodAbbreviation),
        ),
        (RuleStage::Numbers, Arc::new(numbers::NumericPeriod)),
        (
            RuleStage::Punctuation,
            Arc::new(punctuation::ContinuousPunctuation),
        ),
        (
            RuleStage::Punctuation,
            Arc::new(punctuation::NumberedReference),
        ),
        (RuleStage::Punctuation, Arc::new(punctuation::InnerWordPeriod)),
        (RuleStage::Punctuation, Arc::new(punctuation::GeoLocation)),
        (RuleStage::Punctuation, Arc::new(punctuation::FileFormat)),
        (RuleStage::Ellipsis, Arc::new(ellipsis::Ellipsis)),
        (
            RuleStage::Enclosures,
            Arc::new(enclosure::ParensBetweenQuotes),
        ),
        (RuleStage::Enclosures, Arc::new(enclosure::ExclamationWords)),
        (
            RuleStage::Enclosures,
            Arc::new(enclosure::EnclosedPunctuation),
        ),
        (RuleStage::Enclosures, Arc::new(enclosure::QuotedTerminal)),
        (
            RuleStage::Enclosures,
            Arc::new(enclosure::MidSentenceExclamation),
        ),
    ]
}

/// Ordered rule list for one profile
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    rules: Vec<(RuleStage, Arc<dyn Rule>)>,
}

impl RuleCatalog {
    /// Baseline rules minus the profile's disabled ones, with the
    /// profile's extension rules appended to their stages
    pub fn for_profile(profile: &LanguageProfile) -> Self {
        let mut rules: Vec<(RuleStage, Arc<dyn Rule>)> = baseline()
            .into_iter()
            .filter(|(_, rule)| !profile.is_rule_disabled(rule.name()))
            .collect();

        for ext in profile.extensions() {
            let pos = rules
                .iter()
                .rposition(|(stage, _)| *stage <= ext.stage())
                .map_or(0, |p| p + 1);
            let rule: Arc<dyn Rule> = Arc::clone(ext) as Arc<dyn Rule>;
            rules.insert(pos, (ext.stage(), rule));
        }

        Self { rules }
    }

    /// Run every rule in order
    pub fn resolve(&self, text: &str, profile: &LanguageProfile) -> String {
        let mut current = text.to_string();
        for (stage, rule) in &self.rules {
            let next = rule.apply(&current, profile);
            if next != current {
                log::trace!("rule {stage}/{} changed text", rule.name());
            }
            current = next;
        }
        current
    }

    /// Rule names in execution order
    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|(_, rule)| rule.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Whether `ch` may open a token (start of text, whitespace, an opening
/// bracket or quote)
pub(crate) fn is_token_boundary(ch: Option<char>) -> bool {
    match ch {
        None => true,
        Some(c) => c.is_whitespace() || matches!(c, '(' | '[' | '{' | '"' | '“' | '‘' | '«' | '\'' | '「' | '『' | '（'),
    }
}
