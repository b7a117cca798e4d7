//! Quotes, brackets and exclamation words

use super::{is_token_boundary, Rule};
use crate::language::LanguageProfile;
use crate::text_view::{EditBuffer, TextView, PARAGRAPH_BREAK};

/// Longest enclosure span, in characters, that is searched for a closer
pub const MAX_ENCLOSURE_SPAN: usize = 4096;

const CLOSING_QUOTES: &[char] = &['\'', '"', '”', '’', '»'];

fn finish(view: &TextView, buffer: EditBuffer, text: &str) -> String {
    if buffer.is_modified(view) {
        buffer.into_string()
    } else {
        text.to_string()
    }
}

fn matches_seq(view: &TextView, i: usize, seq: &[char]) -> bool {
    seq.iter()
        .enumerate()
        .all(|(n, &c)| view.get(i + n) == Some(c))
}

/// `"Quote" (aside) "quote"`: the spaces around the parenthetical become
/// paragraph breaks
#[derive(Debug)]
pub struct ParensBetweenQuotes;

impl Rule for ParensBetweenQuotes {
    fn name(&self) -> &str {
        "parens_between_quotes"
    }

    fn apply(&self, text: &str, _profile: &LanguageProfile) -> String {
        if !text.contains(" (") {
            return text.to_string();
        }
        let view = TextView::new(text);
        let mut buffer = EditBuffer::from_view(&view);
        for i in 0..view.len() {
            if !matches!(view.get(i), Some('"') | Some('”'))
                || view.after(i, 1) != Some(' ')
                || view.after(i, 2) != Some('(')
            {
                continue;
            }
            let close = (i + 3..view.len().min(i + 3 + 512))
                .take_while(|&k| !matches!(view.get(k), Some('\n') | Some(PARAGRAPH_BREAK)))
                .find(|&k| view.get(k) == Some(')'));
            let Some(k) = close else { continue };
            if view.after(k, 1) == Some(' ') && matches!(view.after(k, 2), Some('"') | Some('“')) {
                buffer.set(i + 1, PARAGRAPH_BREAK);
                buffer.set(k + 1, PARAGRAPH_BREAK);
            }
        }
        finish(&view, buffer, text)
    }
}

/// Words with built-in punctuation (`Yahoo!`, `!Kung`)
#[derive(Debug)]
pub struct ExclamationWords;

impl Rule for ExclamationWords {
    fn name(&self) -> &str {
        "exclamation_words"
    }

    fn apply(&self, text: &str, profile: &LanguageProfile) -> String {
        let words = profile.exclamation_words();
        if words.is_empty() {
            return text.to_string();
        }
        let view = TextView::new(text);
        let mut buffer = EditBuffer::from_view(&view);
        for word in words {
            let Some(&first) = word.first() else { continue };
            for i in 0..view.len() {
                if view.get(i) != Some(first) || !matches_seq(&view, i, word) {
                    continue;
                }
                let end = i + word.len();
                let clean_start = !view.prev(i).is_some_and(char::is_alphanumeric);
                let clean_end = !view.get(end).is_some_and(char::is_alphanumeric);
                if !clean_start || !clean_end {
                    continue;
                }
                for p in i..end {
                    if view.get(p).is_some_and(|c| profile.is_terminator(c)) {
                        buffer.mask(p);
                    }
                }
            }
        }
        finish(&view, buffer, text)
    }
}

/// Boundary punctuation inside quotes and brackets. The punctuation right
/// before the closer is kept when the enclosure itself ends the sentence
/// (closer followed by whitespace and a capital, or by the end of the
/// line).
#[derive(Debug)]
pub struct EnclosedPunctuation;

impl EnclosedPunctuation {
    fn find_closer(view: &TextView, from: usize, close: &[char]) -> Option<usize> {
        let limit = view.len().min(from + MAX_ENCLOSURE_SPAN);
        let apostrophe = matches!(close, ['\''] | ['’']);
        (from..limit)
            .take_while(|&k| view.get(k) != Some(PARAGRAPH_BREAK))
            .find(|&k| {
                matches_seq(view, k, close)
                    && !(apostrophe && view.get(k + 1).is_some_and(char::is_alphabetic))
            })
    }
}

impl Rule for EnclosedPunctuation {
    fn name(&self) -> &str {
        "enclosed_punctuation"
    }

    fn apply(&self, text: &str, profile: &LanguageProfile) -> String {
        let view = TextView::new(text);
        let mut buffer = EditBuffer::from_view(&view);

        for pair in profile.enclosures().pairs() {
            let mut i = 0;
            while i < view.len() {
                if !matches_seq(&view, i, &pair.open) {
                    i += 1;
                    continue;
                }
                if pair.leading_space && !is_token_boundary(view.prev(i)) {
                    i += 1;
                    continue;
                }
                let body = i + pair.open.len();
                if pair.is_symmetric() && view.get(body).map_or(true, char::is_whitespace) {
                    i = body;
                    continue;
                }
                let Some(k) = Self::find_closer(&view, body, &pair.close) else {
                    i += 1;
                    continue;
                };

                let closer_end = k + pair.close.len() - 1;
                let ends_sentence = view.at_line_end(closer_end)
                    || view.followed_by_space_then(closer_end, char::is_uppercase);
                for p in body..k {
                    let is_term = view.get(p).is_some_and(|c| profile.is_terminator(c));
                    if is_term && !(ends_sentence && p + 1 == k) {
                        buffer.mask(p);
                    }
                }
                i = closer_end + 1;
            }
        }
        finish(&view, buffer, text)
    }
}

/// `?` or `!` directly before a closing quote that continues the sentence
/// (`"Why?" she asked`)
#[derive(Debug)]
pub struct QuotedTerminal;

impl Rule for QuotedTerminal {
    fn name(&self) -> &str {
        "quoted_terminal"
    }

    fn apply(&self, text: &str, profile: &LanguageProfile) -> String {
        let view = TextView::new(text);
        let mut buffer = EditBuffer::from_view(&view);
        for i in 0..view.len() {
            let Some(ch) = view.get(i) else { continue };
            if !matches!(ch, '?' | '!') || !profile.is_terminator(ch) {
                continue;
            }
            if !view.next(i).is_some_and(|c| CLOSING_QUOTES.contains(&c)) {
                continue;
            }
            let quote = i + 1;
            let ends = view.at_line_end(quote) || view.followed_by_space_then(quote, char::is_uppercase);
            if !ends {
                buffer.mask(i);
            }
        }
        finish(&view, buffer, text)
    }
}

/// `!` followed by a lowercase word (`Hey! you there`, `Oh!, he said`)
#[derive(Debug)]
pub struct MidSentenceExclamation;

impl Rule for MidSentenceExclamation {
    fn name(&self) -> &str {
        "mid_sentence_exclamation"
    }

    fn apply(&self, text: &str, _profile: &LanguageProfile) -> String {
        if !text.contains('!') {
            return text.to_string();
        }
        let view = TextView::new(text);
        let mut buffer = EditBuffer::from_view(&view);
        for i in 0..view.len() {
            if view.get(i) != Some('!') {
                continue;
            }
            let lower_at = |n: usize| view.after(i, n).is_some_and(char::is_lowercase);
            let space_at = |n: usize| view.after(i, n).is_some_and(char::is_whitespace);
            let comma_form = view.next(i) == Some(',') && space_at(2) && lower_at(3);
            let space_form = space_at(1) && lower_at(2);
            if comma_form || space_form {
                buffer.mask(i);
            }
        }
        finish(&view, buffer, text)
    }
}
