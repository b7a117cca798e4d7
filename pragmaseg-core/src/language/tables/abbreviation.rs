//! Abbreviation trie keyed by the token that precedes a period
//!
//! Entries are stored without their trailing period. Multi-period
//! abbreviations keep their inner periods (`u.s`, `e.g`), so a lookup
//! with the full token before the final period finds them.

use std::collections::HashMap;

/// How an abbreviation behaves in front of the next word
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AbbreviationKind {
    /// Ordinary abbreviation (`etc`, `approx`)
    General,
    /// Usually followed by a number (`no`, `p`, `art`)
    Number,
    /// Title placed before a name (`dr`, `mr`, `prof`)
    Prepositive,
}

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<char, u32>,
    kind: Option<AbbreviationKind>,
}

/// Compact trie stored as a flat node vector
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    case_sensitive: bool,
    len: usize,
    max_len: usize,
}

impl Trie {
    /// Create an empty trie
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            case_sensitive,
            len: 0,
            max_len: 0,
        }
    }

    /// Build from the three abbreviation lists
    pub fn from_lists(
        general: &[String],
        number: &[String],
        prepositive: &[String],
        case_sensitive: bool,
    ) -> Self {
        let mut trie = Self::new(case_sensitive);
        for (list, kind) in [
            (general, AbbreviationKind::General),
            (number, AbbreviationKind::Number),
            (prepositive, AbbreviationKind::Prepositive),
        ] {
            for abbr in list {
                trie.insert(abbr, kind);
            }
        }
        trie
    }

    /// Insert an abbreviation. When the same entry appears in several
    /// lists the most specific kind wins (prepositive, then number).
    pub fn insert(&mut self, abbreviation: &str, kind: AbbreviationKind) {
        let entry = abbreviation.trim().trim_end_matches('.');
        if entry.is_empty() {
            return;
        }

        let mut current = 0usize;
        for ch in entry.chars() {
            let ch = self.normalize(ch);
            current = match self.nodes[current].children.get(&ch) {
                Some(&idx) => idx as usize,
                None => {
                    let idx = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[current].children.insert(ch, idx as u32);
                    idx
                }
            };
        }

        self.max_len = self.max_len.max(entry.chars().count());
        let node = &mut self.nodes[current];
        match node.kind {
            None => {
                node.kind = Some(kind);
                self.len += 1;
            }
            Some(existing) if kind > existing => node.kind = Some(kind),
            Some(_) => {}
        }
    }

    /// Kind of the abbreviation spelled by `token`, if any
    pub fn lookup<I>(&self, token: I) -> Option<AbbreviationKind>
    where
        I: IntoIterator<Item = char>,
    {
        let mut current = 0usize;
        for ch in token {
            let ch = self.normalize(ch);
            current = *self.nodes[current].children.get(&ch)? as usize;
        }
        self.nodes[current].kind
    }

    /// Whether `token` is an abbreviation
    pub fn contains(&self, token: &str) -> bool {
        self.lookup(token.chars()).is_some()
    }

    /// Number of stored abbreviations
    pub fn len(&self) -> usize {
        self.len
    }

    /// Length in characters of the longest entry
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Whether the trie holds no abbreviations
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn normalize(&self, ch: char) -> char {
        if self.case_sensitive {
            ch
        } else {
            ch.to_lowercase().next().unwrap_or(ch)
        }
    }
}
