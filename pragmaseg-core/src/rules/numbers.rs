//! Periods inside and around numbers

use super::Rule;
use crate::language::LanguageProfile;
use crate::text_view::{EditBuffer, TextView};

/// Decimal points, version numbers, and short line-initial numbers
/// (`3.14`, `.5`, `1.2.3`, `12.` at line start)
#[derive(Debug)]
pub struct NumericPeriod;

impl NumericPeriod {
    fn should_mask(view: &TextView, i: usize) -> bool {
        let prev = view.prev(i);
        let next = view.next(i);

        if next.is_some_and(|c| c.is_ascii_digit()) {
            return true;
        }

        // closing quotes and brackets are not part of the number
        if prev.is_some_and(|c| c.is_ascii_digit()) && next.is_some_and(continues_number) {
            return true;
        }

        // "1. Foo" or "12. Foo" at the start of a line
        let digits = (1..=3)
            .take_while(|&n| view.before(i, n).is_some_and(|c| c.is_ascii_digit()))
            .count();
        if (1..=2).contains(&digits) && view.is_line_start(i - digits) {
            let space_then_text = next.is_some_and(char::is_whitespace)
                && view.after(i, 2).is_some_and(|c| !c.is_whitespace());
            return space_then_text || next == Some(')');
        }

        false
    }
}

/// Characters that keep a number going after its period: `1.5`, `3.5%`,
/// `2.€`, `4.Mai`
fn continues_number(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '%' || is_currency(ch)
}

fn is_currency(ch: char) -> bool {
    matches!(ch, '$' | '€' | '£' | '¥' | '¢' | '₹' | '₽' | '₩' | '₺' | '₴' | '₫')
}

impl Rule for NumericPeriod {
    fn name(&self) -> &str {
        "numeric_period"
    }

    fn apply(&self, text: &str, _profile: &LanguageProfile) -> String {
        let view = TextView::new(text);
        let mut buffer = EditBuffer::from_view(&view);
        for i in 0..view.len() {
            if view.get(i) == Some('.') && Self::should_mask(&view, i) {
                buffer.mask(i);
            }
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

    fn masked(text: &str) -> usize {
        NumericPeriod
            .apply(text, &LanguageProfile::fallback())
            .chars()
            .filter(|&c| sentinel::is_masked(c, '.'))
            .count()
    }

    #[test]
    fn test_decimals() {
        assert_eq!(masked("It costs $3.50 today."), 1);
        assert_eq!(masked("about .5 percent"), 1);
        assert_eq!(masked("version 1.2.3b is out"), 2);
    }

    #[test]
    fn test_number_at_sentence_end() {
        assert_eq!(masked("It was 1990. Then it ended."), 0);
        assert_eq!(masked("Raak 81 procent."), 0);
    }

    #[test]
    fn test_number_before_closer() {
        assert_eq!(masked("He said \"it was 1990.\" Then he left."), 0);
        assert_eq!(masked("We won (3 to 2.) Then we left."), 0);
        assert_eq!(masked("See [ref 12.] and 4.’"), 0);
        assert_eq!(masked("Up 3.5% or 2.€ and 4.Mai"), 3);
    }

    #[test]
    fn test_line_initial_number() {
        assert_eq!(masked("12. Item"), 1);
        assert_eq!(masked("first\r3. Item"), 1);
        assert_eq!(masked("123. Item"), 0);
        assert_eq!(masked("4.)"), 1);
    }
}
