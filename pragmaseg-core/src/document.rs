//! Input document and origin hint

use crate::error::{Result, SegmenterError};
use std::fmt;
use std::str::FromStr;

/// Where a text came from, which decides how line breaks are cleaned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DocType {
    /// Plain text
    #[default]
    Plain,
    /// Text extracted from a PDF, with hard-wrapped lines
    Pdf,
    /// HTML source
    Html,
}

impl DocType {
    /// Canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            DocType::Plain => "plain",
            DocType::Pdf => "pdf",
            DocType::Html => "html",
        }
    }

    /// All supported document types
    pub fn all() -> &'static [DocType] {
        &[DocType::Plain, DocType::Pdf, DocType::Html]
    }
}

impl FromStr for DocType {
    type Err = SegmenterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" | "txt" => Ok(DocType::Plain),
            "pdf" => Ok(DocType::Pdf),
            "html" | "htm" => Ok(DocType::Html),
            _ => Err(SegmenterError::InvalidDocType(s.to_string())),
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A text together with its origin hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Raw text
    pub text: String,
    /// Origin hint
    pub doc_type: DocType,
}

impl Document {
    /// Create a document
    pub fn new(text: impl Into<String>, doc_type: DocType) -> Self {
        Self {
            text: text.into(),
            doc_type,
        }
    }

    /// Plain-text document
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, DocType::Plain)
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Document::plain(text)
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Document::plain(text)
    }
}
