//! pragmaseg CLI library
//!
//! Command-line front end for the pragmaseg sentence segmenter: input
//! resolution, parallel file processing, and output formatting.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod language_source;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
