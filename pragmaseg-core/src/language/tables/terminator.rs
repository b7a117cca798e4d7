//! Boundary punctuation lookup with an ASCII fast path

use std::collections::HashSet;

/// Set of characters that end a sentence
#[derive(Debug, Clone)]
pub struct TermTable {
    ascii_table: [bool; 128],
    non_ascii: HashSet<char>,
    chars: Vec<char>,
}

impl TermTable {
    /// Create from a list of terminator characters
    pub fn new(terminators: &[char]) -> Self {
        let mut ascii_table = [false; 128];
        let mut non_ascii = HashSet::new();
        let mut chars = Vec::with_capacity(terminators.len());

        for &ch in terminators {
            if chars.contains(&ch) {
                continue;
            }
            chars.push(ch);
            if ch.is_ascii() {
                ascii_table[ch as usize] = true;
            } else {
                non_ascii.insert(ch);
            }
        }

        Self {
            ascii_table,
            non_ascii,
            chars,
        }
    }

    /// Whether `ch` ends a sentence
    #[inline]
    pub fn is_terminator(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }

    /// Terminators in configuration order
    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminator_lookup() {
        let table = TermTable::new(&['.', '!', '?', '。', '！', '？', '։']);

        assert!(table.is_terminator('.'));
        assert!(table.is_terminator('?'));
        assert!(!table.is_terminator(','));

        assert!(table.is_terminator('。'));
        assert!(table.is_terminator('։'));
        assert!(!table.is_terminator('…'));
    }

    #[test]
    fn test_duplicates_collapsed() {
        let table = TermTable::new(&['.', '.', '!']);
        assert_eq!(table.chars(), &['.', '!']);
    }
}
