//! Language profile registry
//!
//! Embedded language configurations are parsed and compiled once, on first
//! access, and shared as `Arc<LanguageProfile>` afterwards.

use crate::error::{Result, SegmenterError};
use crate::language::config::LanguageConfig;
use crate::language::profile::LanguageProfile;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Code of the common profile that other languages inherit from and that
/// unknown languages fall back to
pub const COMMON_LANGUAGE: &str = "en";

/// Embedded language configurations, keyed by code
const EMBEDDED: &[(&str, &str)] = &[
    ("en", include_str!("../../configs/languages/en.toml")),
    ("am", include_str!("../../configs/languages/am.toml")),
    ("ar", include_str!("../../configs/languages/ar.toml")),
    ("bg", include_str!("../../configs/languages/bg.toml")),
    ("da", include_str!("../../configs/languages/da.toml")),
    ("de", include_str!("../../configs/languages/de.toml")),
    ("el", include_str!("../../configs/languages/el.toml")),
    ("es", include_str!("../../configs/languages/es.toml")),
    ("fa", include_str!("../../configs/languages/fa.toml")),
    ("fr", include_str!("../../configs/languages/fr.toml")),
    ("hi", include_str!("../../configs/languages/hi.toml")),
    ("hy", include_str!("../../configs/languages/hy.toml")),
    ("it", include_str!("../../configs/languages/it.toml")),
    ("ja", include_str!("../../configs/languages/ja.toml")),
    ("my", include_str!("../../configs/languages/my.toml")),
    ("nl", include_str!("../../configs/languages/nl.toml")),
    ("pl", include_str!("../../configs/languages/pl.toml")),
    ("pt", include_str!("../../configs/languages/pt.toml")),
    ("ru", include_str!("../../configs/languages/ru.toml")),
    ("ur", include_str!("../../configs/languages/ur.toml")),
    ("zh", include_str!("../../configs/languages/zh.toml")),
];

static COMMON: OnceLock<std::result::Result<LanguageConfig, String>> = OnceLock::new();

static GLOBAL: OnceLock<LanguageRegistry> = OnceLock::new();

/// Parsed configuration of the common profile
pub(crate) fn common_config() -> Result<&'static LanguageConfig> {
    COMMON
        .get_or_init(|| {
            LanguageConfig::from_toml(EMBEDDED[0].1)
                .map_err(|e| format!("failed to parse common language config: {e}"))
        })
        .as_ref()
        .map_err(|e| SegmenterError::Configuration(e.clone()))
}

/// Raw TOML of an embedded language
pub fn embedded_config_text(code: &str) -> Option<&'static str> {
    EMBEDDED
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, text)| *text)
}

/// Parsed configuration of an embedded language
pub fn embedded_config(code: &str) -> Option<LanguageConfig> {
    embedded_config_text(code).and_then(|text| LanguageConfig::from_toml(text).ok())
}

/// Set of language profiles addressable by code or English name
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    profiles: HashMap<String, Arc<LanguageProfile>>,
    names: HashMap<String, String>,
    default: Arc<LanguageProfile>,
}

impl LanguageRegistry {
    /// Process-wide registry of embedded profiles
    pub fn global() -> &'static LanguageRegistry {
        GLOBAL.get_or_init(Self::load_embedded)
    }

    fn load_embedded() -> Self {
        let mut profiles = Vec::with_capacity(EMBEDDED.len());
        for (code, text) in EMBEDDED {
            match LanguageConfig::from_toml(text).and_then(|c| LanguageProfile::from_config(&c)) {
                Ok(profile) => profiles.push(profile),
                Err(e) => log::error!("failed to load embedded language '{code}': {e}"),
            }
        }

        if profiles.is_empty() {
            profiles.push(LanguageProfile::fallback());
        }
        Self::from_profiles(profiles)
    }

    /// Build a registry from configurations
    pub fn from_configs(configs: impl IntoIterator<Item = LanguageConfig>) -> Result<Self> {
        let profiles = configs
            .into_iter()
            .map(|config| LanguageProfile::from_config(&config))
            .collect::<Result<Vec<_>>>()?;
        if profiles.is_empty() {
            return Err(SegmenterError::Configuration(
                "a language registry needs at least one language".into(),
            ));
        }
        Ok(Self::from_profiles(profiles))
    }

    fn from_profiles(profiles: Vec<LanguageProfile>) -> Self {
        let mut map = HashMap::with_capacity(profiles.len());
        let mut names = HashMap::with_capacity(profiles.len());
        let mut first: Option<Arc<LanguageProfile>> = None;

        for profile in profiles {
            let code = profile.code().to_lowercase();
            names.insert(profile.name().to_lowercase(), code.clone());
            let profile = Arc::new(profile);
            if first.is_none() {
                first = Some(Arc::clone(&profile));
            }
            map.insert(code, profile);
        }

        let default = map
            .get(COMMON_LANGUAGE)
            .cloned()
            .or(first)
            .unwrap_or_else(|| Arc::new(LanguageProfile::fallback()));

        Self {
            profiles: map,
            names,
            default,
        }
    }

    fn find(&self, code: &str) -> Option<&Arc<LanguageProfile>> {
        let key = code.trim().to_lowercase();
        self.profiles.get(&key).or_else(|| {
            self.names
                .get(&key)
                .and_then(|code| self.profiles.get(code))
        })
    }

    /// Strict lookup by code or English name
    pub fn lookup(&self, code: &str) -> Result<Arc<LanguageProfile>> {
        self.find(code)
            .cloned()
            .ok_or_else(|| SegmenterError::UnsupportedLanguage(code.to_string()))
    }

    /// Lookup that falls back to the default profile
    pub fn resolve(&self, code: &str) -> Arc<LanguageProfile> {
        match self.find(code) {
            Some(profile) => Arc::clone(profile),
            None => {
                log::warn!(
                    "unsupported language '{code}', falling back to '{}'",
                    self.default.code()
                );
                Arc::clone(&self.default)
            }
        }
    }

    /// The fallback profile
    pub fn default_profile(&self) -> Arc<LanguageProfile> {
        Arc::clone(&self.default)
    }

    /// Whether `code` (or an English name) is registered
    pub fn supports(&self, code: &str) -> bool {
        self.find(code).is_some()
    }

    /// Supported codes in sorted order
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.profiles.values().map(|p| p.code()).collect();
        codes.sort_unstable();
        codes
    }

    /// `(code, name)` pairs in code order
    pub fn languages(&self) -> Vec<(&str, &str)> {
        let mut langs: Vec<(&str, &str)> = self
            .profiles
            .values()
            .map(|p| (p.code(), p.name()))
            .collect();
        langs.sort_unstable();
        langs
    }
}
