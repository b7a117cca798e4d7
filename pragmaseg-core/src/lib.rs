//! Rule-based multilingual sentence segmentation
//!
//! Text goes through four stages:
//!
//! 1. **Profile resolution**: a language code selects a [`LanguageProfile`]
//!    (boundary punctuation, abbreviations, sentence starters, enclosures,
//!    extension rules), loaded from embedded TOML.
//! 2. **Cleaning**: the [`Cleaner`] removes errant newlines, markup and
//!    formatting noise according to the [`DocType`].
//! 3. **Ambiguity resolution**: the [`RuleCatalog`] masks punctuation that
//!    must not end a sentence (abbreviations, decimals, ellipses, quoted
//!    speech, list markers) by shifting it into a reserved code point range.
//! 4. **Boundary scanning**: the [`BoundaryScanner`] splits on the
//!    punctuation that is still visible and restores masked characters.
//!
//! The engine looks only at lexical and punctuation context.
//!
//! # Example
//!
//! ```rust
//! use pragmaseg_core::Segmenter;
//!
//! let segmenter = Segmenter::with_language("en");
//! let sentences = segmenter.segment("Mr. Smith paid $3.50. He left.");
//! assert_eq!(sentences, vec!["Mr. Smith paid $3.50.", "He left."]);
//! ```

pub mod api;
pub mod cleaner;
pub mod document;
pub mod error;
pub mod language;
pub mod rules;
pub mod scanner;
pub mod sentinel;
pub mod text_view;

pub use api::{segment, Config, ConfigBuilder, Segmenter};
pub use cleaner::{clean, Cleaner};
pub use document::{DocType, Document};
pub use error::{Result, SegmenterError};
pub use language::{LanguageConfig, LanguageProfile, LanguageRegistry};
pub use rules::{Rule, RuleCatalog, RuleStage};
pub use scanner::BoundaryScanner;
