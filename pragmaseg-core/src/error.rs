//! Error types for configuration and profile loading
//!
//! Segmentation itself never fails; only building language profiles and
//! parsing user-supplied options can.

use thiserror::Error;

/// Errors raised while loading or validating segmenter configuration
#[derive(Debug, Error)]
pub enum SegmenterError {
    /// Configuration loading or parsing error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unsupported language requested through a strict lookup
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Invalid language rules configuration
    #[error("Invalid language rules: {0}")]
    InvalidLanguageRules(String),

    /// Unknown document type name
    #[error("Invalid document type: {0}")]
    InvalidDocType(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, SegmenterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SegmenterError::UnsupportedLanguage("xx".into()).to_string(),
            "Unsupported language: xx"
        );
        assert_eq!(
            SegmenterError::InvalidDocType("docx".into()).to_string(),
            "Invalid document type: docx"
        );
        assert!(SegmenterError::Configuration("bad toml".into())
            .to_string()
            .starts_with("Configuration error:"));
    }
}
