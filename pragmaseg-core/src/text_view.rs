//! Character view with bounded look-behind and look-ahead
//!
//! The rule catalog needs context checks like "a period preceded by a
//! digit and followed by whitespace and a capital". `regex` has no
//! lookaround, so rules run over a `TextView` and inspect neighbours by
//! index instead. All helpers are O(1) or bounded by an explicit limit.

use crate::sentinel;

/// Paragraph break marker produced by the cleaner and rewrite rules
pub const PARAGRAPH_BREAK: char = '\r';

/// Indexed character buffer over a text value
#[derive(Debug, Clone)]
pub struct TextView {
    chars: Vec<char>,
}

impl TextView {
    /// Build a view over `text`
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    /// Number of characters
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the view is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// All characters
    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Character at `i`
    #[inline]
    pub fn get(&self, i: usize) -> Option<char> {
        self.chars.get(i).copied()
    }

    /// Character `n` positions before `i`
    #[inline]
    pub fn before(&self, i: usize, n: usize) -> Option<char> {
        i.checked_sub(n).and_then(|j| self.get(j))
    }

    /// Character `n` positions after `i`
    #[inline]
    pub fn after(&self, i: usize, n: usize) -> Option<char> {
        self.get(i + n)
    }

    /// Previous character
    #[inline]
    pub fn prev(&self, i: usize) -> Option<char> {
        self.before(i, 1)
    }

    /// Next character
    #[inline]
    pub fn next(&self, i: usize) -> Option<char> {
        self.after(i, 1)
    }

    /// Whether `i` is at text start or directly after a line break
    pub fn is_line_start(&self, i: usize) -> bool {
        match self.prev(i) {
            None => true,
            Some(c) => c == '\n' || c == PARAGRAPH_BREAK,
        }
    }

    /// Whether `i` is at text start or directly after whitespace
    pub fn is_word_start(&self, i: usize) -> bool {
        self.prev(i).map_or(true, char::is_whitespace)
    }

    /// Whether the characters starting at `i` spell `needle`
    pub fn matches_at(&self, i: usize, needle: &str) -> bool {
        let mut idx = i;
        for expected in needle.chars() {
            if self.get(idx) != Some(expected) {
                return false;
            }
            idx += 1;
        }
        true
    }

    /// Length of the run of `ch` starting at `i`
    pub fn run_length(&self, i: usize, ch: char) -> usize {
        self.chars[i.min(self.len())..]
            .iter()
            .take_while(|&&c| c == ch)
            .count()
    }

    /// Index of the first non-whitespace character after `i`, if the
    /// characters between are all whitespace and there is at least one
    pub fn skip_whitespace_after(&self, i: usize) -> Option<usize> {
        let mut j = i + 1;
        while let Some(c) = self.get(j) {
            if !c.is_whitespace() {
                break;
            }
            j += 1;
        }
        if j == i + 1 {
            None
        } else {
            Some(j)
        }
    }

    /// Whether `i` is followed by at least one whitespace character and
    /// then a character satisfying `pred`
    pub fn followed_by_space_then(&self, i: usize, pred: impl Fn(char) -> bool) -> bool {
        self.skip_whitespace_after(i)
            .and_then(|j| self.get(j))
            .is_some_and(pred)
    }

    /// Whether nothing but whitespace follows `i` up to the end of the
    /// text or the next line break
    pub fn at_line_end(&self, i: usize) -> bool {
        for &c in &self.chars[(i + 1).min(self.len())..] {
            if c == '\n' || c == PARAGRAPH_BREAK {
                return true;
            }
            if !c.is_whitespace() {
                return false;
            }
        }
        true
    }

    /// The word that starts at `start`: a maximal run of alphabetic
    /// characters, apostrophes allowed after the first letter
    pub fn word_at(&self, start: usize) -> String {
        let mut word = String::new();
        let mut j = start;
        while let Some(c) = self.get(j) {
            if c.is_alphabetic() || (!word.is_empty() && (c == '\'' || c == '’')) {
                word.push(c);
                j += 1;
            } else {
                break;
            }
        }
        word.trim_end_matches(['\'', '’']).to_string()
    }

    /// Start index of the token ending right before `end`. A token runs
    /// back over letters, digits, apostrophes, hyphens and (masked or
    /// plain) periods, and stops at whitespace, text start, or any other
    /// symbol. Returns `None` when the token is longer than `limit`.
    pub fn token_start(&self, end: usize, limit: usize) -> Option<usize> {
        let end = end.min(self.len());
        let floor = end.saturating_sub(limit);
        let mut start = end;
        while start > 0 {
            let c = sentinel::unmask(self.chars[start - 1]);
            if !(c.is_alphanumeric() || c == '.' || c == '\'' || c == '’' || c == '-') {
                break;
            }
            if start == floor {
                return None;
            }
            start -= 1;
        }
        Some(start)
    }

    /// Characters in `[start, end)` with sentinels restored
    pub fn slice_restored(&self, start: usize, end: usize) -> String {
        self.chars[start.min(self.len())..end.min(self.len())]
            .iter()
            .map(|&c| sentinel::unmask(c))
            .collect()
    }
}

/// Editable copy of a text, used by rules to mask, delete, or insert at
/// explicit indices without touching the input value.
#[derive(Debug, Clone)]
pub struct EditBuffer {
    chars: Vec<Option<char>>,
    inserts: Vec<(usize, char)>,
}

impl EditBuffer {
    /// Start editing a copy of `view`
    pub fn from_view(view: &TextView) -> Self {
        Self {
            chars: view.chars().iter().copied().map(Some).collect(),
            inserts: Vec::new(),
        }
    }

    /// Replace the character at `i` with its sentinel. Returns false when
    /// the character cannot be masked.
    pub fn mask(&mut self, i: usize) -> bool {
        match self.chars.get(i).copied().flatten().and_then(sentinel::mask) {
            Some(masked) => {
                self.chars[i] = Some(masked);
                true
            }
            None => false,
        }
    }

    /// Replace the character at `i`
    pub fn set(&mut self, i: usize, ch: char) {
        if let Some(slot) = self.chars.get_mut(i) {
            *slot = Some(ch);
        }
    }

    /// Delete the character at `i`
    pub fn delete(&mut self, i: usize) {
        if let Some(slot) = self.chars.get_mut(i) {
            *slot = None;
        }
    }

    /// Insert `ch` before index `i`
    pub fn insert_before(&mut self, i: usize, ch: char) {
        self.inserts.push((i, ch));
    }

    /// Whether any edit was recorded
    pub fn is_modified(&self, original: &TextView) -> bool {
        !self.inserts.is_empty()
            || self
                .chars
                .iter()
                .zip(original.chars())
                .any(|(edited, orig)| *edited != Some(*orig))
    }

    /// Produce the edited text
    pub fn into_string(mut self) -> String {
        self.inserts.sort_by_key(|&(i, _)| i);
        let mut out = String::with_capacity(self.chars.len() + self.inserts.len());
        let mut pending = self.inserts.into_iter().peekable();
        for (i, slot) in self.chars.into_iter().enumerate() {
            while let Some(&(at, ch)) = pending.peek() {
                if at > i {
                    break;
                }
                out.push(ch);
                pending.next();
            }
            if let Some(c) = slot {
                out.push(c);
            }
        }
        for (_, ch) in pending {
            out.push(ch);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbours() {
        let view = TextView::new("ab.c");
        assert_eq!(view.prev(2), Some('b'));
        assert_eq!(view.next(2), Some('c'));
        assert_eq!(view.before(2, 2), Some('a'));
        assert_eq!(view.before(0, 1), None);
        assert_eq!(view.after(3, 1), None);
    }

    #[test]
    fn test_line_and_word_start() {
        let view = TextView::new("a\rb c\nd");
        assert!(view.is_line_start(0));
        assert!(view.is_line_start(2));
        assert!(!view.is_line_start(4));
        assert!(view.is_word_start(4));
        assert!(view.is_line_start(6));
    }

    #[test]
    fn test_followed_by_space_then() {
        let view = TextView::new("x.  Y");
        assert!(view.followed_by_space_then(1, char::is_uppercase));
        let tight = TextView::new("x.Y");
        assert!(!tight.followed_by_space_then(1, char::is_uppercase));
    }

    #[test]
    fn test_token_start_spans_periods() {
        let view = TextView::new("see e.g.");
        assert_eq!(view.token_start(7, 8), Some(4));
        assert_eq!(view.token_start(7, 3), Some(4));
        assert_eq!(view.token_start(7, 2), None);
        assert_eq!(view.token_start(3, 8), Some(0));
        assert_eq!(view.slice_restored(4, 7), "e.g");
    }

    #[test]
    fn test_word_at() {
        let view = TextView::new("Brown's is");
        assert_eq!(view.word_at(0), "Brown's");
        let quoted = TextView::new("He' x");
        assert_eq!(quoted.word_at(0), "He");
    }

    #[test]
    fn test_run_length_and_line_end() {
        let view = TextView::new("a... \rb");
        assert_eq!(view.run_length(1, '.'), 3);
        assert!(view.at_line_end(3));
        assert!(!view.at_line_end(0));
    }

    #[test]
    fn test_edit_buffer() {
        let view = TextView::new("1. a 2. b");
        let mut buffer = EditBuffer::from_view(&view);
        buffer.mask(1);
        buffer.insert_before(5, '\r');
        buffer.delete(4);
        assert!(buffer.is_modified(&view));
        let out = buffer.into_string();
        assert_eq!(sentinel::restore(&out), "1. a\r2. b");
    }
}
