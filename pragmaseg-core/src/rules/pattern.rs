//! Regex-driven extension rules declared in language files
//!
//! `mask` and `delete` operate on the characters of each match, or of the
//! first capture group when the pattern has one. Capture groups stand in
//! for lookaround, which `regex` does not support: `\d(\.)\s` masks only
//! the period.

use super::{Rule, RuleStage};
use crate::error::{Result, SegmenterError};
use crate::language::{ExtensionAction, ExtensionRule, LanguageProfile};
use crate::sentinel;
use regex::Regex;
use std::ops::Range;

/// Compiled extension rule
#[derive(Debug, Clone)]
pub struct PatternRule {
    name: String,
    stage: RuleStage,
    regex: Regex,
    action: ExtensionAction,
    target: Option<Vec<char>>,
    replacement: String,
}

impl PatternRule {
    /// Compile an extension rule
    pub fn compile(rule: &ExtensionRule) -> Result<Self> {
        let regex = Regex::new(&rule.pattern).map_err(|e| {
            SegmenterError::InvalidLanguageRules(format!(
                "extension rule '{}' has an invalid pattern: {e}",
                rule.name
            ))
        })?;
        Ok(Self {
            name: rule.name.clone(),
            stage: rule.stage,
            regex,
            action: rule.action,
            target: rule
                .target
                .as_ref()
                .map(|t| t.chars().collect::<Vec<_>>())
                .filter(|t| !t.is_empty()),
            replacement: rule.replacement.clone().unwrap_or_default(),
        })
    }

    /// Stage this rule runs in
    pub fn stage(&self) -> RuleStage {
        self.stage
    }

    pub fn action(&self) -> ExtensionAction {
        self.action
    }

    /// Byte range the action applies to within one match
    fn focus(&self, caps: &regex::Captures<'_>) -> Option<Range<usize>> {
        caps.get(1)
            .or_else(|| caps.get(0))
            .map(|m| m.range())
    }

    /// Focus ranges of all matches, including overlapping ones
    fn overlapping_ranges(&self, text: &str) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        let mut start = 0;
        while start <= text.len() {
            let Some(caps) = self.regex.captures_at(text, start) else {
                break;
            };
            let Some(whole) = caps.get(0) else { break };
            if let Some(range) = self.focus(&caps) {
                ranges.push(range);
            }
            // resume one character after the match start
            start = match text[whole.start()..].chars().next() {
                Some(c) => whole.start() + c.len_utf8(),
                None => break,
            };
        }
        ranges
    }

    fn is_target(&self, ch: char, profile: &LanguageProfile) -> bool {
        match &self.target {
            Some(target) => target.contains(&ch),
            None => profile.is_terminator(ch),
        }
    }

    fn mask(&self, text: &str, profile: &LanguageProfile) -> String {
        let mut hit = vec![false; text.len()];
        for range in self.overlapping_ranges(text) {
            hit[range].iter_mut().for_each(|h| *h = true);
        }
        text.char_indices()
            .map(|(pos, ch)| {
                if hit[pos] && self.is_target(ch, profile) {
                    sentinel::mask(ch).unwrap_or(ch)
                } else {
                    ch
                }
            })
            .collect()
    }

    fn delete(&self, text: &str) -> String {
        let Some(target) = &self.target else {
            return self.regex.replace_all(text, "").into_owned();
        };
        let mut hit = vec![false; text.len()];
        for caps in self.regex.captures_iter(text) {
            if let Some(range) = self.focus(&caps) {
                hit[range].iter_mut().for_each(|h| *h = true);
            }
        }
        text.char_indices()
            .filter(|&(pos, ch)| !(hit[pos] && target.contains(&ch)))
            .map(|(_, ch)| ch)
            .collect()
    }
}

impl Rule for PatternRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, text: &str, profile: &LanguageProfile) -> String {
        if !self.regex.is_match(text) {
            return text.to_string();
        }
        match self.action {
            ExtensionAction::Mask => self.mask(text, profile),
            ExtensionAction::Delete => self.delete(text),
            ExtensionAction::Rewrite => self
                .regex
                .replace_all(text, self.replacement.as_str())
                .into_owned(),
        }
    }
}
