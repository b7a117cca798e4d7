//! Language profiles
//!
//! Profiles are data: each language is a TOML file compiled into lookup
//! tables and optional extension rules. Adding a language means adding a
//! file, never a code path.

pub mod config;
pub mod loader;
pub mod profile;
pub mod tables;

pub use config::{AbbreviationPolicy, ExtensionAction, ExtensionRule, LanguageConfig};
pub use loader::{embedded_config, embedded_config_text, LanguageRegistry, COMMON_LANGUAGE};
pub use profile::LanguageProfile;
pub use tables::AbbreviationKind;
