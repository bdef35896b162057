use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::errors::BackendError;
use crate::translation::TextFormat;

use super::TranslationBackend;

/// Endpoint of the unofficial web-client translation API
const GOOGLE_FREE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Client for the unofficial public Google endpoint
///
/// This is the keyless endpoint the Google Translate web client uses. It is
/// rate limited and undocumented; the response is a nested array rather than
/// an object, and only the first-position string segments carry the
/// translation. Good enough as a zero-configuration fallback, not something
/// to run a busy site on.
pub struct GoogleFree {
    /// HTTP client for API requests
    client: Client,
}

impl GoogleFree {
    /// Create a new client
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
        }
    }

    /// Reassemble the translated text from the endpoint's nested arrays
    ///
    /// The shape is `[[[translated, original, ...], [translated, ...]], ...]`:
    /// the outer value must be an array whose first element is the list of
    /// sentence segments, each contributing its first string element in order.
    fn extract_translation(payload: &Value) -> Result<String, BackendError> {
        let segments = payload
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| {
                BackendError::MalformedResponse(
                    "response is not the expected nested array".to_string(),
                )
            })?;

        let mut translated = String::new();
        for segment in segments {
            if let Some(part) = segment.get(0).and_then(Value::as_str) {
                translated.push_str(part);
            }
        }

        if translated.is_empty() {
            return Err(BackendError::MalformedResponse(
                "response contained no translated segments".to_string(),
            ));
        }

        Ok(translated)
    }
}

impl std::fmt::Debug for GoogleFree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleFree").finish()
    }
}

#[async_trait]
impl TranslationBackend for GoogleFree {
    fn id(&self) -> &'static str {
        "googlefree"
    }

    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
        _format: TextFormat,
    ) -> Result<String, BackendError> {
        // The web-client endpoint has no format switch; markup passes through
        // as-is inside the text payload.
        let response = self
            .client
            .get(GOOGLE_FREE_ENDPOINT)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            return Err(BackendError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let payload = response.json::<Value>().await?;
        Self::extract_translation(&payload)
    }
}
