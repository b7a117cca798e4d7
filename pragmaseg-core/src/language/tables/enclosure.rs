//! Enclosure pairs (brackets, quotes, dashes)

use std::collections::HashSet;

/// One opener/closer pair. Either side may span several characters
/// (`--`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enclosure {
    /// Opening sequence
    pub open: Vec<char>,
    /// Closing sequence
    pub close: Vec<char>,
    /// Opener only counts at text start or after whitespace
    pub leading_space: bool,
}

impl Enclosure {
    /// Whether opener and closer are the same sequence
    pub fn is_symmetric(&self) -> bool {
        self.open == self.close
    }
}

/// Enclosure pairs of a profile plus a lookup for single-character
/// closers, which the boundary scanner absorbs after a terminator
#[derive(Debug, Clone, Default)]
pub struct EncTable {
    pairs: Vec<Enclosure>,
    closers: HashSet<char>,
}

impl EncTable {
    /// Create from `(open, close, leading_space)` triples
    pub fn new<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str, bool)>) -> Self {
        let mut table = Self::default();
        for (open, close, leading_space) in pairs {
            let open: Vec<char> = open.chars().collect();
            let close: Vec<char> = close.chars().collect();
            if open.is_empty() || close.is_empty() || table.pairs.len() == 255 {
                continue;
            }
            if let [single] = close.as_slice() {
                table.closers.insert(*single);
            }
            table.pairs.push(Enclosure {
                open,
                close,
                leading_space,
            });
        }
        table
    }

    /// All pairs in configuration order
    pub fn pairs(&self) -> &[Enclosure] {
        &self.pairs
    }

    /// Whether `ch` closes some pair
    #[inline]
    pub fn is_closer(&self, ch: char) -> bool {
        self.closers.contains(&ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_and_closers() {
        let table = EncTable::new([("(", ")", false), ("\"", "\"", true), ("--", "--", true)]);
        assert_eq!(table.pairs().len(), 3);
        assert!(table.is_closer(')'));
        assert!(table.is_closer('"'));
        assert!(!table.is_closer('-'));
        assert!(table.pairs()[1].is_symmetric());
        assert!(!table.pairs()[0].is_symmetric());
        assert_eq!(table.pairs()[2].open, vec!['-', '-']);
    }

    #[test]
    fn test_empty_sides_skipped() {
        let table = EncTable::new([("", ")", false), ("[", "]", false)]);
        assert_eq!(table.pairs().len(), 1);
    }
}
