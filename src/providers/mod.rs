/*!
 * Backend client implementations for the translation services.
 *
 * This module contains client implementations for the supported backends:
 * - LibreTranslate: self-hosted translation engine
 * - GoogleFree: unofficial public Google endpoint
 * - GoogleCloud: official Google Cloud Translation v2 API
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::BackendError;
use crate::translation::TextFormat;

/// Common trait for all translation backends
///
/// This trait defines the interface that all backend implementations must
/// follow, allowing them to be used interchangeably by the orchestrator.
/// Adding a backend means adding one implementation; nothing else changes.
#[async_trait]
pub trait TranslationBackend: Send + Sync + Debug {
    /// Stable identifier for this backend, mixed into cache fingerprints
    fn id(&self) -> &'static str;

    /// Translate `text` from `source` to `target`
    ///
    /// # Arguments
    /// * `text` - The (already masked) text to translate
    /// * `source` - Source language code
    /// * `target` - Target language code
    /// * `format` - Whether the text is plain or an HTML fragment
    ///
    /// # Returns
    /// * `Result<String, BackendError>` - The translated text or an error
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
        format: TextFormat,
    ) -> Result<String, BackendError>;
}

pub mod google_cloud;
pub mod google_free;
pub mod libretranslate;
