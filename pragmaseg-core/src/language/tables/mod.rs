//! Lookup tables compiled from language configuration

pub mod abbreviation;
pub mod enclosure;
pub mod sentence_starters;
pub mod terminator;

pub use abbreviation::{AbbreviationKind, Trie};
pub use enclosure::{EncTable, Enclosure};
pub use sentence_starters::SentenceStarterTable;
pub use terminator::TermTable;
