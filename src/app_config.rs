use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::language_utils;

/// Application configuration module
/// This module holds the settings the host environment supplies to the
/// pipeline: which backend to call, which target languages are enabled,
/// and which words must never be translated.
/// Represents the pipeline configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code of the site content (ISO 639-1)
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target languages visitors may select
    #[serde(default = "default_enabled_languages")]
    pub enabled_languages: Vec<String>,

    /// Words and phrases that must never be sent to a backend unmodified.
    /// Raw as configured; blank entries are filtered when masking.
    #[serde(default)]
    pub excluded_words: Vec<String>,

    /// Backend settings
    #[serde(default)]
    pub backend: BackendConfig,
}

/// Translation backend type
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Self-hosted LibreTranslate engine
    #[default]
    LibreTranslate,
    /// Unofficial public Google endpoint (no key, best effort)
    GoogleFree,
    /// Official Google Cloud Translation v2 API (paid, keyed)
    GoogleCloud,
}

impl BackendKind {
    /// Stable identifier used in cache fingerprints and logs
    pub fn id(&self) -> &'static str {
        match self {
            Self::LibreTranslate => "libretranslate",
            Self::GoogleFree => "googlefree",
            Self::GoogleCloud => "googlecloud",
        }
    }

    /// Capitalized backend name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::LibreTranslate => "LibreTranslate",
            Self::GoogleFree => "Google (free endpoint)",
            Self::GoogleCloud => "Google Cloud Translation",
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl std::str::FromStr for BackendKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "libretranslate" => Ok(Self::LibreTranslate),
            "googlefree" => Ok(Self::GoogleFree),
            "googlecloud" => Ok(Self::GoogleCloud),
            _ => Err(anyhow!("Invalid backend type: {}", s)),
        }
    }
}

/// Backend connection settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BackendConfig {
    /// Which backend variant to call
    #[serde(default)]
    pub kind: BackendKind,

    /// LibreTranslate endpoint URL
    #[serde(default = "default_libretranslate_endpoint")]
    pub libretranslate_url: String,

    /// LibreTranslate API key (optional; many instances run open)
    #[serde(default = "String::new")]
    pub libretranslate_api_key: String,

    /// Google Cloud Translation API key (required for that backend)
    #[serde(default = "String::new")]
    pub google_api_key: String,

    /// Request timeout in seconds; translation of large pages is slow
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            kind: BackendKind::default(),
            libretranslate_url: default_libretranslate_endpoint(),
            libretranslate_api_key: String::new(),
            google_api_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_enabled_languages() -> Vec<String> {
    language_utils::SUPPORTED_LANGUAGES
        .iter()
        .map(|(code, _)| (*code).to_string())
        .collect()
}

fn default_libretranslate_endpoint() -> String {
    "http://localhost:5000/translate".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

impl Config {
    /// Check whether a target language is enabled for translation
    pub fn is_language_enabled(&self, code: &str) -> bool {
        let normalized = language_utils::normalize_language_code(code);
        self.enabled_languages
            .iter()
            .any(|enabled| language_utils::normalize_language_code(enabled) == normalized)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        language_utils::validate_language_code(&self.source_language)?;
        for code in &self.enabled_languages {
            language_utils::validate_language_code(code)?;
        }

        match self.backend.kind {
            BackendKind::LibreTranslate => {
                let url = self.backend.libretranslate_url.trim();
                if url.is_empty() {
                    return Err(anyhow!("LibreTranslate endpoint URL is required"));
                }
                url::Url::parse(url)
                    .map_err(|e| anyhow!("Invalid LibreTranslate endpoint URL: {}", e))?;
            }
            BackendKind::GoogleCloud => {
                if self.backend.google_api_key.trim().is_empty() {
                    return Err(anyhow!(
                        "Translation API key is required for the Google Cloud backend"
                    ));
                }
            }
            BackendKind::GoogleFree => {}
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: default_source_language(),
            enabled_languages: default_enabled_languages(),
            excluded_words: Vec::new(),
            backend: BackendConfig::default(),
        }
    }
}
