//! Text normalization before boundary resolution
//!
//! The cleaner removes errant newlines, markup, inline formatting codes
//! and dot leaders, and turns paragraph separators into `\r`. It never
//! looks at the language of the text.

use crate::document::DocType;
use crate::text_view::PARAGRAPH_BREAK;
use regex::Regex;
use std::sync::LazyLock;

static HTML_BLOCK_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br\s*/?>|</(?:p|div|li|h[1-6]|tr|blockquote)\s*>")
        .expect("valid html block regex")
});

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[A-Za-z/!][^>]*>").expect("valid html tag regex"));

static ESCAPED_HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&lt;/?[^&<>]*&gt;").expect("valid escaped tag regex"));

static INLINE_FORMATTING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{b\^&gt;\d*&lt;b\^\}|\{b\^>\d*<b\^\}").expect("valid inline formatting regex")
});

static TABLE_OF_CONTENTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{5,}\s*\d+-*\d*").expect("valid dot leader regex"));

static CONSECUTIVE_PERIODS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{5,}").expect("valid period run regex"));

/// Document-type aware text cleaner
#[derive(Debug, Clone, Copy, Default)]
pub struct Cleaner {
    doc_type: DocType,
}

impl Cleaner {
    /// Create a cleaner for the given document type
    pub fn new(doc_type: DocType) -> Self {
        Self { doc_type }
    }

    /// Document type this cleaner was built for
    pub fn doc_type(&self) -> DocType {
        self.doc_type
    }

    /// Run every cleaning step in order
    pub fn clean(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let mut out = remove_newline_in_middle_of_sentence(text);
        out = remove_newline_in_middle_of_word(&out);
        out = replace_double_newlines(&out);
        out = match self.doc_type {
            DocType::Pdf => remove_pdf_line_breaks(&out),
            DocType::Plain | DocType::Html => replace_newlines(&out),
        };
        if self.doc_type == DocType::Html {
            let br = PARAGRAPH_BREAK.to_string();
            out = HTML_BLOCK_END.replace_all(&out, br.as_str()).into_owned();
        }
        out = strip_html(&out);
        out = INLINE_FORMATTING.replace_all(&out, "").into_owned();
        out = out.replace("''", "\"").replace("``", "\"");
        out = clean_table_of_contents(&out);

        log::trace!(
            "cleaned {} chars into {} chars ({})",
            text.len(),
            out.len(),
            self.doc_type
        );
        out
    }
}

/// Clean `text` for the given document type
pub fn clean(text: &str, doc_type: DocType) -> String {
    Cleaner::new(doc_type).clean(text)
}

/// Drop a newline that follows whitespace and precedes a lowercase letter
/// or an opening parenthesis.
fn remove_newline_in_middle_of_sentence(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == '\n' && i > 0 && chars[i - 1].is_whitespace() {
            if let Some(&next) = chars.get(i + 1) {
                if next.is_ascii_lowercase() || next == '(' {
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// Drop a newline followed by one or two ASCII letters and another newline
fn remove_newline_in_middle_of_word(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == '\n' {
            let letters = chars[i + 1..]
                .iter()
                .take(3)
                .take_while(|ch| ch.is_ascii_alphabetic())
                .count();
            if (1..=2).contains(&letters) && chars.get(i + 1 + letters) == Some(&'\n') {
                continue;
            }
        }
        out.push(c);
    }
    out
}

fn replace_double_newlines(text: &str) -> String {
    let br = PARAGRAPH_BREAK.to_string();
    text.replace("\n \n", &br).replace("\n\n", &br)
}

/// Non-PDF newline handling: a newline directly before `.` plus whitespace
/// is dropped, every other newline becomes a paragraph break.
fn replace_newlines(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == '\n' {
            let period_follows = chars.get(i + 1) == Some(&'.')
                && chars.get(i + 2).is_some_and(|n| n.is_whitespace());
            if !period_follows {
                out.push(PARAGRAPH_BREAK);
            }
            continue;
        }
        out.push(c);
    }
    out
}

fn remove_pdf_line_breaks(text: &str) -> String {
    // bullets
    let chars: Vec<char> = text
        .chars()
        .collect::<Vec<_>>()
        .windows(2)
        .map(|w| {
            if w[0] == '\n' && w[1] == '•' {
                PARAGRAPH_BREAK
            } else {
                w[0]
            }
        })
        .chain(text.chars().last())
        .collect();

    // "x \nY" wraps
    let mut joined: Vec<char> = Vec::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == '\n' && i >= 2 {
            let ws = chars[i - 1];
            let before = chars[i - 2];
            let next_is_text = chars.get(i + 1).is_some_and(|n| !n.is_whitespace());
            if ws.is_whitespace() && before != '\n' && next_is_text {
                continue;
            }
        }
        joined.push(c);
    }

    // "x\ny" wraps
    let mut out = String::with_capacity(text.len());
    for (i, &c) in joined.iter().enumerate() {
        if c == '\n' && joined.get(i + 1).is_some_and(|n| n.is_ascii_lowercase()) {
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    out
}

fn strip_html(text: &str) -> String {
    let without_tags = HTML_TAG.replace_all(text, "");
    ESCAPED_HTML_TAG.replace_all(&without_tags, "").into_owned()
}

fn clean_table_of_contents(text: &str) -> String {
    let br = PARAGRAPH_BREAK.to_string();
    let leaders = TABLE_OF_CONTENTS.replace_all(text, br.as_str());
    CONSECUTIVE_PERIODS.replace_all(&leaders, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(clean("", DocType::Plain), "");
    }

    #[test]
    fn test_clean_text_is_unchanged() {
        let text = "Hello world. This is fine: 3 < 4, right?";
        assert_eq!(clean(text, DocType::Plain), text);
    }

    #[test]
    fn test_mid_sentence_newline() {
        assert_eq!(
            clean("This is a sentence \ncut off.", DocType::Plain),
            "This is a sentence cut off."
        );
    }

    #[test]
    fn test_double_newline_becomes_break() {
        assert_eq!(clean("One.\n\nTwo.", DocType::Plain), "One.\rTwo.");
        assert_eq!(clean("One.\n \nTwo.", DocType::Plain), "One.\rTwo.");
    }

    #[test]
    fn test_single_newline_plain() {
        assert_eq!(clean("Title\nBody", DocType::Plain), "Title\rBody");
        assert_eq!(clean("End\n. More", DocType::Plain), "End. More");
    }

    #[test]
    fn test_newline_in_middle_of_word() {
        assert_eq!(clean("Hel\nlo\nworld", DocType::Plain), "Hello\rworld");
        assert_eq!(clean("a\nbc\nd", DocType::Plain), "abc\rd");
    }

    #[test]
    fn test_pdf_line_breaks() {
        assert_eq!(
            clean("This is a sentence\ncut off in the middle because pdf.", DocType::Pdf),
            "This is a sentence cut off in the middle because pdf."
        );
        assert_eq!(clean("Items:\n• one\n• two", DocType::Pdf), "Items:\r• one\r• two");
        assert_eq!(clean("Wrapped \nLine", DocType::Pdf), "Wrapped Line");
        assert_eq!(clean("Heading\nBody", DocType::Pdf), "Heading\nBody");
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(
            clean("<p>Hello <b>world</b>.</p><!-- note -->", DocType::Html),
            "Hello world.\r"
        );
        assert_eq!(
            clean("<p>One.</p><p>Two.</p>", DocType::Html),
            "One.\rTwo.\r"
        );
        assert_eq!(clean("<p>One.</p>", DocType::Plain), "One.");
        assert_eq!(clean("&lt;b&gt;Bold&lt;/b&gt; text.", DocType::Html), "Bold text.");
        assert_eq!(clean("if a < b then c > d.", DocType::Html), "if a < b then c > d.");
    }

    #[test]
    fn test_inline_formatting() {
        assert_eq!(clean("Text{b^&gt;12&lt;b^} here.", DocType::Plain), "Text here.");
    }

    #[test]
    fn test_quotations() {
        assert_eq!(clean("He said ''hi'' and ``bye``.", DocType::Plain), "He said \"hi\" and \"bye\".");
    }

    #[test]
    fn test_table_of_contents() {
        assert_eq!(clean("Intro.......... 5 Body", DocType::Plain), "Intro\r Body");
        assert_eq!(clean("Wait..... what", DocType::Plain), "Wait  what");
    }

    #[test]
    fn test_cleaner_doc_type() {
        assert_eq!(Cleaner::new(DocType::Pdf).doc_type(), DocType::Pdf);
        assert_eq!(Cleaner::default().doc_type(), DocType::Plain);
    }
}
