//! Punctuation inside words, references and runs

use super::Rule;
use crate::language::LanguageProfile;
use crate::sentinel;
use crate::text_view::{EditBuffer, TextView, PARAGRAPH_BREAK};

const FILE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "tif", "tiff", "pdf", "ps", "doc", "docx", "xls", "xlsx", "svg",
    "bmp", "tga", "exif", "odt", "htm", "html", "txt", "rtf", "bat", "sxw", "xml", "zip", "exe",
    "msi", "blend", "wmv", "mp3", "mp4", "ppt", "pptx", "flac", "rb", "cpp", "cs", "js",
];

fn finish(view: &TextView, buffer: EditBuffer, text: &str) -> String {
    if buffer.is_modified(view) {
        buffer.into_string()
    } else {
        text.to_string()
    }
}

/// Runs of three or more `!`/`?` that continue the sentence
#[derive(Debug)]
pub struct ContinuousPunctuation;

impl Rule for ContinuousPunctuation {
    fn name(&self) -> &str {
        "continuous_punctuation"
    }

    fn apply(&self, text: &str, _profile: &LanguageProfile) -> String {
        let view = TextView::new(text);
        let mut buffer = EditBuffer::from_view(&view);
        let is_mark = |c: Option<char>| matches!(c, Some('!') | Some('?'));
        let mut i = 0;
        while i < view.len() {
            if !is_mark(view.get(i)) || is_mark(view.prev(i)) {
                i += 1;
                continue;
            }
            let mut end = i;
            while is_mark(view.get(end)) {
                end += 1;
            }
            let last = end - 1;
            let after_text = view.prev(i).is_some_and(|c| !c.is_whitespace());
            let ends_sentence =
                view.at_line_end(last) || view.followed_by_space_then(last, char::is_uppercase);
            if end - i >= 3 && after_text && !ends_sentence {
                for j in i..end {
                    buffer.mask(j);
                }
            }
            i = end;
        }
        finish(&view, buffer, text)
    }
}

/// Footnote references after a period: `word.12 Next` or `word.[3] Next`.
/// The period is masked and the sentence break moves after the reference.
#[derive(Debug)]
pub struct NumberedReference;

impl NumberedReference {
    /// Index one past the reference starting at `i`
    fn reference_end(view: &TextView, i: usize) -> Option<usize> {
        let mut j = i;
        if view.get(j) == Some('[') {
            while view.get(j) == Some('[') {
                let mut k = j + 1;
                let mut digits = 0;
                while let Some(c) = view.get(k) {
                    if c.is_ascii_digit() {
                        digits += 1;
                    } else if !matches!(c, ',' | ' ' | '-') {
                        break;
                    }
                    k += 1;
                    if k - j > 24 {
                        return None;
                    }
                }
                if digits == 0 || view.get(k) != Some(']') {
                    return None;
                }
                j = k + 1;
            }
            return Some(j);
        }

        let digits = (0..)
            .take_while(|&n| view.get(i + n).is_some_and(|c| c.is_ascii_digit()))
            .count();
        (1..=3).contains(&digits).then_some(i + digits)
    }
}

impl Rule for NumberedReference {
    fn name(&self) -> &str {
        "numbered_reference"
    }

    fn apply(&self, text: &str, _profile: &LanguageProfile) -> String {
        let view = TextView::new(text);
        let mut buffer = EditBuffer::from_view(&view);
        for i in 1..view.len() {
            let is_period = view.get(i).is_some_and(|c| c == '.' || sentinel::is_masked(c, '.'));
            let after_word = view.prev(i).is_some_and(|c| !c.is_ascii_digit() && !c.is_whitespace());
            if !is_period || !after_word {
                continue;
            }
            let Some(end) = Self::reference_end(&view, i + 1) else {
                continue;
            };
            let space = view.get(end).is_some_and(|c| c == ' ' || c == '\t');
            let capital = view.get(end + 1).is_some_and(char::is_uppercase);
            if space && capital {
                buffer.mask(i);
                buffer.set(end, PARAGRAPH_BREAK);
            }
        }
        finish(&view, buffer, text)
    }
}

/// Periods between two word characters (`e.g`, `example.com`,
/// `john.smith`)
#[derive(Debug)]
pub struct InnerWordPeriod;

impl Rule for InnerWordPeriod {
    fn name(&self) -> &str {
        "inner_word_period"
    }

    fn apply(&self, text: &str, _profile: &LanguageProfile) -> String {
        let view = TextView::new(text);
        let mut buffer = EditBuffer::from_view(&view);
        let word_char = |c: char| c.is_alphanumeric() || c == '_';
        for i in 1..view.len() {
            if view.get(i) == Some('.')
                && view.prev(i).is_some_and(word_char)
                && view.next(i).is_some_and(word_char)
            {
                buffer.mask(i);
            }
        }
        finish(&view, buffer, text)
    }
}

/// Degree marks after a letter followed by a number: `N°. 12`
#[derive(Debug)]
pub struct GeoLocation;

impl Rule for GeoLocation {
    fn name(&self) -> &str {
        "geo_location"
    }

    fn apply(&self, text: &str, _profile: &LanguageProfile) -> String {
        if !text.contains('°') {
            return text.to_string();
        }
        let view = TextView::new(text);
        let mut buffer = EditBuffer::from_view(&view);
        for i in 2..view.len() {
            if view.get(i) != Some('.')
                || view.prev(i) != Some('°')
                || !view.before(i, 2).is_some_and(|c| c.is_ascii_alphabetic())
            {
                continue;
            }
            let mut j = i + 1;
            while view.get(j).is_some_and(char::is_whitespace) {
                j += 1;
            }
            if view.get(j).is_some_and(|c| c.is_ascii_digit()) {
                buffer.mask(i);
            }
        }
        finish(&view, buffer, text)
    }
}

/// Bare file extensions after whitespace: `the .pdf file`
#[derive(Debug)]
pub struct FileFormat;

impl Rule for FileFormat {
    fn name(&self) -> &str {
        "file_format"
    }

    fn apply(&self, text: &str, _profile: &LanguageProfile) -> String {
        let view = TextView::new(text);
        let mut buffer = EditBuffer::from_view(&view);
        for i in 1..view.len() {
            if view.get(i) != Some('.') || !view.prev(i).is_some_and(char::is_whitespace) {
                continue;
            }
            let mut end = i + 1;
            while view.get(end).is_some_and(|c| c.is_ascii_alphanumeric()) {
                end += 1;
            }
            let ext: String = view.chars()[i + 1..end].iter().collect();
            if view.get(end).is_some_and(char::is_whitespace) && FILE_EXTENSIONS.contains(&ext.as_str()) {
                buffer.mask(i);
            }
        }
        finish(&view, buffer, text)
    }
}
