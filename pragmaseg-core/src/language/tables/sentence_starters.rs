//! Sentence starters
//!
//! Words that commonly open a sentence. When an abbreviation period is
//! followed by one of them, the period is kept as a boundary.

use std::collections::HashSet;

/// Exact-match set of sentence starter words
#[derive(Debug, Clone, Default)]
pub struct SentenceStarterTable {
    starters: HashSet<String>,
    max_length: usize,
}

impl SentenceStarterTable {
    /// Create from a word list
    pub fn new(words: &[String]) -> Self {
        let mut starters = HashSet::with_capacity(words.len());
        let mut max_length = 0;
        for word in words {
            let word = word.trim();
            if word.is_empty() {
                continue;
            }
            max_length = max_length.max(word.chars().count());
            starters.insert(word.to_string());
        }
        Self {
            starters,
            max_length,
        }
    }

    /// Whether `word` is a sentence starter (case-sensitive)
    pub fn is_sentence_starter(&self, word: &str) -> bool {
        if word.is_empty() || word.len() > self.max_length * 4 {
            return false;
        }
        self.starters.contains(word)
    }

    /// Number of starter words
    pub fn len(&self) -> usize {
        self.starters.len()
    }

    /// Whether no starters are configured
    pub fn is_empty(&self) -> bool {
        self.starters.is_empty()
    }
}
