/*!
 * Content-safe translation pipeline for web page fragments.
 *
 * This module contains the core functionality for translating page content
 * through an external backend without damaging protected words or markup.
 * It is split into several submodules:
 *
 * - `core`: Orchestrator tying masking, caching and the backend together
 * - `cache`: Content-fingerprinted memoization of finished translations
 * - `masking`: Excluded-word masking and restoration
 * - `html`: HTML text-node walker used for `html`-format requests
 */

use serde::{Deserialize, Serialize};

// Re-export main types for easier usage
pub use self::cache::FingerprintCache;
pub use self::core::{DiagnosticHook, SoftFailure, TranslationRequest, Translator};
pub use self::masking::PlaceholderMap;

// Submodules
pub mod cache;
pub mod core;
pub mod html;
pub mod masking;

/// Format of the text in a translation request
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    /// Plain text; masking applies to the whole string
    #[default]
    Text,
    /// HTML fragment; masking applies to text nodes only
    Html,
}

impl TextFormat {
    /// Value sent to backends and mixed into cache fingerprints
    pub fn wire_value(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Html => "html",
        }
    }
}

impl std::fmt::Display for TextFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_value())
    }
}
