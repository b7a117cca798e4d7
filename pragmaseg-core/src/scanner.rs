//! Boundary scanner
//!
//! Runs after ambiguity resolution: every terminator still visible is a
//! real sentence end. Paragraph breaks and single newlines are hard
//! boundaries.

use crate::language::LanguageProfile;
use crate::sentinel;
use crate::text_view::PARAGRAPH_BREAK;

/// Splits resolved text into sentences
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundaryScanner;

impl BoundaryScanner {
    /// Split `text` into trimmed, restored sentences
    pub fn split(text: &str, profile: &LanguageProfile) -> Vec<String> {
        let mut sentences = Vec::new();
        for line in text.split(|c| c == PARAGRAPH_BREAK || c == '\n') {
            Self::split_line(line, profile, &mut sentences);
        }
        sentences
    }

    fn split_line(line: &str, profile: &LanguageProfile, out: &mut Vec<String>) {
        let chars: Vec<char> = line.chars().collect();
        let mut start = 0;
        let mut i = 0;
        while i < chars.len() {
            if !profile.is_terminator(chars[i]) {
                i += 1;
                continue;
            }
            let mut end = i + 1;
            while end < chars.len() && profile.is_terminator(chars[end]) {
                end += 1;
            }
            while end < chars.len() && profile.is_closer(chars[end]) {
                end += 1;
            }
            Self::push(&chars[start..end], out);
            start = end;
            i = end;
        }
        if start < chars.len() {
            Self::push(&chars[start..], out);
        }
    }

    fn push(segment: &[char], out: &mut Vec<String>) {
        let restored: String = segment.iter().map(|&c| sentinel::unmask(c)).collect();
        let sentence = collapse_whitespace(restored.trim());
        if keep_segment(&sentence) {
            out.push(sentence);
        }
    }
}

/// Replace runs of three or more whitespace characters with one space
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = String::new();
    for c in text.chars() {
        if c.is_whitespace() {
            run.push(c);
            continue;
        }
        if run.chars().count() >= 3 {
            out.push(' ');
        } else {
            out.push_str(&run);
        }
        run.clear();
        out.push(c);
    }
    out
}

fn keep_segment(sentence: &str) -> bool {
    if sentence.is_empty() || sentence.chars().all(|c| c == '_') {
        return false;
    }
    let mut chars = sentence.chars();
    match (chars.next(), chars.next()) {
        (Some(only), None) => only.is_alphabetic(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<String> {
        BoundaryScanner::split(text, &LanguageProfile::fallback())
    }

    #[test]
    fn test_basic_split() {
        assert_eq!(split("One. Two! Three?"), vec!["One.", "Two!", "Three?"]);
    }

    #[test]
    fn test_trailing_text() {
        assert_eq!(split("One. Two"), vec!["One.", "Two"]);
    }

    #[test]
    fn test_clusters_and_closers() {
        assert_eq!(split("Really?! Yes. (He left.) \"Done.\""), vec![
            "Really?!",
            "Yes.",
            "(He left.)",
            "\"Done.\""
        ]);
    }

    #[test]
    fn test_hard_breaks() {
        assert_eq!(split("Title\rBody text\nMore"), vec!["Title", "Body text", "More"]);
    }

    #[test]
    fn test_masked_terminators_are_restored() {
        let masked: String = ['D', 'r', sentinel::mask('.').unwrap(), ' ', 'X', '.'].iter().collect();
        assert_eq!(split(&masked), vec!["Dr. X."]);
    }

    #[test]
    fn test_segment_filtering() {
        assert_eq!(split("Hi.\r___\r.\ra"), vec!["Hi.", "a"]);
        assert_eq!(split("A.   B"), vec!["A.", "B"]);
        assert_eq!(split("One     two."), vec!["One two."]);
        assert!(split("   ").is_empty());
    }
}
