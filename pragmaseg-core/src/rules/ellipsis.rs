//! Ellipses
//!
//! An ellipsis ends a sentence only when it directly follows a word and
//! the next word is capitalized; then its last period is the boundary.
//! An ellipsis that opens a sentence stays with that sentence.

use super::Rule;
use crate::language::LanguageProfile;
use crate::text_view::{EditBuffer, TextView};

#[derive(Debug)]
pub struct Ellipsis;

impl Ellipsis {
    /// `a. . . .` after a lowercase letter, either at the end of a line
    /// (all four masked) or before a capitalized word (the last period is
    /// the boundary). Returns the periods to mask.
    fn spaced_four(view: &TextView, i: usize) -> Option<&'static [usize]> {
        if !view.prev(i).is_some_and(char::is_lowercase) {
            return None;
        }
        let spaced = [i, i + 2, i + 4, i + 6].iter().all(|&p| view.get(p) == Some('.'))
            && [i + 1, i + 3, i + 5].iter().all(|&p| view.get(p) == Some(' '));
        if !spaced {
            None
        } else if view.at_line_end(i + 6) {
            Some(&[0, 2, 4, 6][..])
        } else if view.followed_by_space_then(i + 6, char::is_uppercase) {
            Some(&[0, 2, 4][..])
        } else {
            None
        }
    }

    /// ` . . . ` surrounded by whitespace
    fn spaced_three(view: &TextView, i: usize) -> Option<[usize; 3]> {
        if !view.prev(i).is_some_and(char::is_whitespace) {
            return None;
        }
        let idx = [i, i + 2, i + 4];
        let spaced = idx.iter().all(|&p| view.get(p) == Some('.'))
            && [i + 1, i + 3].iter().all(|&p| view.get(p) == Some(' '))
            && view.after(i, 5).is_some_and(char::is_whitespace);
        spaced.then_some(idx)
    }
}

impl Rule for Ellipsis {
    fn name(&self) -> &str {
        "ellipsis"
    }

    fn apply(&self, text: &str, _profile: &LanguageProfile) -> String {
        if !text.contains("..") && !text.contains(". .") {
            return text.to_string();
        }
        let view = TextView::new(text);
        let mut buffer = EditBuffer::from_view(&view);
        let mut i = 0;
        while i < view.len() {
            if view.get(i) != Some('.') || view.prev(i) == Some('.') {
                i += 1;
                continue;
            }

            let run = view.run_length(i, '.');
            if run >= 3 {
                let last = i + run - 1;
                let after_word = view.prev(i).is_some_and(|c| !c.is_whitespace());
                let before_capital = view.followed_by_space_then(last, char::is_uppercase);
                let keep = if after_word && before_capital && (run == 3 || run == 4) {
                    1
                } else {
                    0
                };
                for p in i..=last - keep {
                    buffer.mask(p);
                }
                i = last + 1;
                continue;
            }

            if let Some(offsets) = Self::spaced_four(&view, i) {
                for &offset in offsets {
                    buffer.mask(i + offset);
                }
                i += 7;
                continue;
            }

            if let Some(idx) = Self::spaced_three(&view, i) {
                for p in idx {
                    buffer.mask(p);
                }
                i = idx[2] + 1;
                continue;
            }

            i += run;
        }

        if buffer.is_modified(&view) {
            buffer.into_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentinel;

    fn unmasked_periods(text: &str) -> usize {
        Ellipsis
            .apply(text, &LanguageProfile::fallback())
            .chars()
            .filter(|&c| c == '.')
            .count()
    }

    #[test]
    fn test_ellipsis_before_capital_keeps_last() {
        assert_eq!(unmasked_periods("I waited... Then it came"), 1);
        assert_eq!(unmasked_periods("I waited.... Then it came"), 1);
    }

    #[test]
    fn test_ellipsis_mid_sentence_masked() {
        assert_eq!(unmasked_periods("I waited... and waited"), 0);
        assert_eq!(unmasked_periods("I waited..."), 0);
    }

    #[test]
    fn test_ellipsis_at_sentence_start() {
        assert_eq!(unmasked_periods("raak. ...en toen"), 1);
        assert_eq!(unmasked_periods("... Then"), 0);
    }

    #[test]
    fn test_spaced_ellipsis() {
        assert_eq!(unmasked_periods("he said . . . no"), 0);
        assert_eq!(unmasked_periods("and so on. . . ."), 0);
        assert_eq!(unmasked_periods("One. Two"), 1);
    }

    #[test]
    fn test_spaced_four_before_capital() {
        let text = "the compounds. . . . The practice";
        assert_eq!(unmasked_periods(text), 1);
        let out = Ellipsis.apply(text, &LanguageProfile::fallback());
        assert_eq!(out.chars().nth(19), Some('.'));
    }

    #[test]
    fn test_restores_exactly() {
        let text = "Wait... What? . . . ok";
        let out = Ellipsis.apply(text, &LanguageProfile::fallback());
        assert_eq!(sentinel::restore(&out), text);
    }
}
