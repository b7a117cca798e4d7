//! Abbreviation periods

use super::{is_token_boundary, Rule};
use crate::language::{AbbreviationKind, AbbreviationPolicy, LanguageProfile};
use crate::sentinel;
use crate::text_view::{EditBuffer, TextView};

/// The word after the whitespace that follows `i`, if any
fn next_word(view: &TextView, i: usize) -> Option<String> {
    let j = view.skip_whitespace_after(i)?;
    let word = view.word_at(j);
    (!word.is_empty()).then_some(word)
}

fn followed_by_starter(view: &TextView, i: usize, profile: &LanguageProfile) -> bool {
    next_word(view, i).is_some_and(|w| profile.is_sentence_starter(&w))
}

fn is_period(ch: Option<char>) -> bool {
    ch.is_some_and(|c| c == '.' || sentinel::is_masked(c, '.'))
}

fn finish(view: &TextView, buffer: EditBuffer, text: &str) -> String {
    if buffer.is_modified(view) {
        buffer.into_string()
    } else {
        text.to_string()
    }
}

/// `U.S.'s` and similar possessives after an abbreviation
#[derive(Debug)]
pub struct PossessiveAbbreviation;

impl Rule for PossessiveAbbreviation {
    fn name(&self) -> &str {
        "possessive_abbreviation"
    }

    fn apply(&self, text: &str, _profile: &LanguageProfile) -> String {
        if !text.contains(".'s") && !text.contains(".’s") {
            return text.to_string();
        }
        let view = TextView::new(text);
        let mut buffer = EditBuffer::from_view(&view);
        for i in 0..view.len() {
            if view.get(i) != Some('.') || !view.prev(i).is_some_and(char::is_alphabetic) {
                continue;
            }
            let apostrophe = matches!(view.after(i, 1), Some('\'') | Some('’'));
            let s = view.after(i, 2) == Some('s');
            let end = view.after(i, 3).map_or(true, char::is_whitespace);
            if apostrophe && s && end {
                buffer.mask(i);
            }
        }
        finish(&view, buffer, text)
    }
}

/// German company suffix `Co. KG`
#[derive(Debug)]
pub struct Kommanditgesellschaft;

impl Rule for Kommanditgesellschaft {
    fn name(&self) -> &str {
        "kommanditgesellschaft"
    }

    fn apply(&self, text: &str, _profile: &LanguageProfile) -> String {
        if !text.contains("Co. KG") {
            return text.to_string();
        }
        let view = TextView::new(text);
        let mut buffer = EditBuffer::from_view(&view);
        for i in 2..view.len() {
            if view.get(i) == Some('.') && view.matches_at(i - 2, "Co") && view.matches_at(i + 1, " KG") {
                buffer.mask(i);
            }
        }
        finish(&view, buffer, text)
    }
}

/// Initials: a lone capital letter followed by a period, an optional comma
/// and whitespace (`J. Smith`, `A., B. and C.`)
#[derive(Debug)]
pub struct SingleLetterAbbreviation;

impl Rule for SingleLetterAbbreviation {
    fn name(&self) -> &str {
        "single_letter_abbreviation"
    }

    fn apply(&self, text: &str, profile: &LanguageProfile) -> String {
        let view = TextView::new(text);
        let mut buffer = EditBuffer::from_view(&view);
        for i in 1..view.len() {
            if view.get(i) != Some('.') {
                continue;
            }
            let letter = i - 1;
            if !view.get(letter).is_some_and(char::is_uppercase) || !view.is_word_start(letter) {
                continue;
            }
            let after = if view.next(i) == Some(',') { i + 1 } else { i };
            if !view.next(after).is_some_and(char::is_whitespace) {
                continue;
            }
            if after == i && followed_by_starter(&view, i, profile) {
                continue;
            }
            buffer.mask(i);
        }
        finish(&view, buffer, text)
    }
}

/// Abbreviations listed in the language profile
#[derive(Debug)]
pub struct ListedAbbreviation;

impl ListedAbbreviation {
    fn should_mask(
        view: &TextView,
        i: usize,
        kind: AbbreviationKind,
        profile: &LanguageProfile,
    ) -> bool {
        let next = view.next(i);
        let next_is_space = next.is_some_and(char::is_whitespace);
        let after_space = view.skip_whitespace_after(i).and_then(|j| view.get(j));

        if kind != AbbreviationKind::Prepositive && followed_by_starter(view, i, profile) {
            return false;
        }

        let attached = matches!(next, Some('.' | ':' | '-' | '?' | ','));

        match profile.abbreviation_policy() {
            AbbreviationPolicy::Always => (next_is_space && after_space.is_some()) || attached,
            AbbreviationPolicy::Contextual => match kind {
                AbbreviationKind::Prepositive => {
                    next_is_space
                        || (next == Some(':') && view.after(i, 2).is_some_and(|c| c.is_ascii_digit()))
                }
                _ if next_is_space && after_space.is_some_and(char::is_uppercase) => false,
                AbbreviationKind::Number => {
                    next_is_space && after_space.is_some_and(|c| c.is_ascii_digit() || c == '(')
                }
                AbbreviationKind::General => {
                    attached
                        || (next_is_space
                            && after_space.is_some_and(|c| {
                                c.is_lowercase() || c.is_ascii_digit() || c == '('
                            }))
                }
            },
        }
    }
}

impl Rule for ListedAbbreviation {
    fn name(&self) -> &str {
        "listed_abbreviation"
    }

    fn apply(&self, text: &str, profile: &LanguageProfile) -> String {
        let limit = profile.max_abbreviation_len();
        if limit == 0 {
            return text.to_string();
        }
        let view = TextView::new(text);
        let mut buffer = EditBuffer::from_view(&view);
        for i in 1..view.len() {
            if view.get(i) != Some('.') {
                continue;
            }
            let Some(start) = view.token_start(i, limit) else {
                continue;
            };
            if start == i || !is_token_boundary(view.prev(start)) {
                continue;
            }
            let token = view.chars()[start..i].iter().map(|&c| sentinel::unmask(c));
            let Some(kind) = profile.abbreviation_kind(token) else {
                continue;
            };
            // inner periods of a listed entry (`c.-à-d.`) never end a sentence
            for j in start..i {
                if view.get(j) == Some('.') {
                    buffer.mask(j);
                }
            }
            if Self::should_mask(&view, i, kind, profile) {
                buffer.mask(i);
            }
        }
        finish(&view, buffer, text)
    }
}

/// Dotted letter sequences such as `U.S.A.`, `e.g.` and `p.m.`
#[derive(Debug)]
pub struct MultiPeriodAbbreviation;

impl MultiPeriodAbbreviation {
    /// Indices of the periods of a dotted sequence starting at `i`
    fn periods_at(view: &TextView, i: usize) -> Vec<usize> {
        let mut periods = Vec::new();
        let mut j = i;
        while view.get(j).is_some_and(char::is_alphabetic) && is_period(view.get(j + 1)) {
            periods.push(j + 1);
            j += 2;
        }
        if periods.len() < 2 || view.get(j).is_some_and(char::is_alphanumeric) {
            periods.clear();
        }
        periods
    }
}

impl Rule for MultiPeriodAbbreviation {
    fn name(&self) -> &str {
        "multi_period_abbreviation"
    }

    fn apply(&self, text: &str, profile: &LanguageProfile) -> String {
        let view = TextView::new(text);
        let mut buffer = EditBuffer::from_view(&view);
        let mut i = 0;
        while i < view.len() {
            let at_start = is_token_boundary(view.prev(i));
            let periods = if at_start {
                Self::periods_at(&view, i)
            } else {
                Vec::new()
            };
            let Some(&last) = periods.last() else {
                i += 1;
                continue;
            };

            let token = view.slice_restored(i, last + 1).to_lowercase();
            let keep_last = followed_by_starter(&view, last, profile)
                || ((token == "a.m." || token == "p.m.")
                    && view.followed_by_space_then(last, char::is_uppercase));

            for &p in &periods {
                if p == last && keep_last {
                    continue;
                }
                if view.get(p) == Some('.') {
                    buffer.mask(p);
                }
            }
            i = last + 1;
        }
        finish(&view, buffer, text)
    }
}
