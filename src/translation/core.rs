/*!
 * Core translation orchestrator.
 *
 * This module contains the main Translator struct and its implementation,
 * which composes the masker, the fingerprint cache and the configured
 * backend into the single entry point the host calls from its rendering
 * path: mask, look up, call on miss, unmask, store.
 *
 * Nothing in here ever fails outward. Every error degrades to returning
 * the caller's text unchanged, which makes the whole pipeline safe to run
 * inside a hot page-rendering hook.
 */

use std::sync::Arc;
use std::time::Duration;

use log::warn;

use crate::app_config::{BackendKind, Config};
use crate::language_utils::normalize_language_code;
use crate::providers::google_cloud::GoogleCloud;
use crate::providers::google_free::GoogleFree;
use crate::providers::libretranslate::LibreTranslate;
use crate::providers::TranslationBackend;
use crate::store::KeyValueStore;

use super::cache::{self, FingerprintCache};
use super::masking::Masker;
use super::TextFormat;

/// Immutable input to one translation pass
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    /// The content to translate
    pub text: String,

    /// Source language code
    pub source_lang: String,

    /// Target language code
    pub target_lang: String,

    /// Whether `text` is plain text or an HTML fragment
    pub format: TextFormat,
}

impl TranslationRequest {
    /// Create a new translation request
    pub fn new(
        text: impl Into<String>,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
        format: TextFormat,
    ) -> Self {
        Self {
            text: text.into(),
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
            format,
        }
    }
}

/// Description of a degraded translation pass, passed to the diagnostic hook
#[derive(Debug, Clone)]
pub struct SoftFailure {
    /// Identifier of the backend involved
    pub backend: &'static str,

    /// What went wrong
    pub message: String,
}

/// Callback invoked once per soft failure
///
/// The pipeline does not own a logging facility; hosts that want visibility
/// into degraded requests install a hook and route it wherever they log.
pub type DiagnosticHook = Arc<dyn Fn(&SoftFailure) + Send + Sync>;

/// Main translation pipeline for page content
pub struct Translator {
    /// Backend implementation
    backend: Box<dyn TranslationBackend>,

    /// Configuration for the pipeline
    pub config: Config,

    /// Fingerprint cache over the host-supplied store
    cache: FingerprintCache,

    /// Prepared excluded-word masker
    masker: Masker,

    /// Optional callback for soft failures
    diagnostic_hook: Option<DiagnosticHook>,
}

impl Translator {
    /// Create a translator with the backend selected by the configuration
    pub fn new(config: Config, store: Arc<dyn KeyValueStore>) -> Self {
        let backend = build_backend(&config);
        Self::with_backend(config, store, backend)
    }

    /// Create a translator over an explicit backend implementation
    ///
    /// This is how hosts plug in a backend the built-in set does not cover,
    /// and how the test suite substitutes a scripted one.
    pub fn with_backend(
        config: Config,
        store: Arc<dyn KeyValueStore>,
        backend: Box<dyn TranslationBackend>,
    ) -> Self {
        let masker = Masker::new(&config.excluded_words);
        Self {
            backend,
            config,
            cache: FingerprintCache::new(store),
            masker,
            diagnostic_hook: None,
        }
    }

    /// Install a diagnostic hook invoked on each soft failure
    pub fn with_diagnostic_hook(mut self, hook: DiagnosticHook) -> Self {
        self.diagnostic_hook = Some(hook);
        self
    }

    /// Identifier of the configured backend
    pub fn backend_id(&self) -> &'static str {
        self.backend.id()
    }

    /// Cache statistics as (hits, misses, hit rate)
    pub fn cache_stats(&self) -> (usize, usize, f64) {
        self.cache.stats()
    }

    /// Translate one piece of page content
    ///
    /// Returns the translated text, or the input unchanged when there is
    /// nothing to do (blank text, same language, target not enabled) or when
    /// anything along the way degrades. Never returns an error.
    pub async fn translate(&self, request: &TranslationRequest) -> String {
        let text = &request.text;
        if text.trim().is_empty() {
            return text.clone();
        }

        let source = normalize_language_code(&request.source_lang);
        let target = normalize_language_code(&request.target_lang);
        if source == target || !self.config.is_language_enabled(&target) {
            return text.clone();
        }

        let (masked, placeholders) = self.masker.mask(text, request.format);

        // The fingerprint covers the masked text, but the stored value is
        // the finished, unmasked translation, so a hit is a pure lookup.
        let key = cache::cache_key(&masked, &source, &target, request.format, self.backend.id());
        if let Some(cached) = self.cache.get(&key) {
            return cached;
        }

        match self
            .backend
            .translate(&masked, &source, &target, request.format)
            .await
        {
            Ok(translated) => {
                let finished = Masker::unmask(&translated, &placeholders);
                self.cache.put(&key, &finished);
                finished
            }
            Err(e) => {
                self.report_soft_failure(e.to_string());
                text.clone()
            }
        }
    }

    /// Remove every cached translation, returning how many were removed
    pub fn purge_cache(&self) -> usize {
        match self.cache.purge_all() {
            Ok(count) => count,
            Err(e) => {
                self.report_soft_failure(format!("cache purge failed: {}", e));
                0
            }
        }
    }

    fn report_soft_failure(&self, message: String) {
        let failure = SoftFailure {
            backend: self.backend.id(),
            message,
        };
        warn!(
            "Translation degraded ({}): {}",
            failure.backend, failure.message
        );
        if let Some(hook) = &self.diagnostic_hook {
            hook(&failure);
        }
    }
}

/// Construct the backend client the configuration selects
fn build_backend(config: &Config) -> Box<dyn TranslationBackend> {
    let timeout = Duration::from_secs(config.backend.timeout_secs);

    match config.backend.kind {
        BackendKind::LibreTranslate => Box::new(LibreTranslate::new(
            config.backend.libretranslate_url.as_str(),
            config.backend.libretranslate_api_key.as_str(),
            timeout,
        )),
        BackendKind::GoogleFree => Box::new(GoogleFree::new(timeout)),
        BackendKind::GoogleCloud => Box::new(GoogleCloud::new(
            config.backend.google_api_key.as_str(),
            timeout,
        )),
    }
}
