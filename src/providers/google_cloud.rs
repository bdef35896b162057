use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::BackendError;
use crate::translation::TextFormat;

use super::TranslationBackend;

/// Endpoint of the Google Cloud Translation v2 API
const GOOGLE_CLOUD_ENDPOINT: &str = "https://translation.googleapis.com/language/translate/v2";

/// Client for the official Google Cloud Translation v2 API
///
/// Paid and keyed; a missing key fails fast without touching the network.
pub struct GoogleCloud {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
}

/// Cloud Translation request body
#[derive(Debug, Serialize)]
struct GoogleCloudRequest<'a> {
    /// Text to translate
    q: &'a str,
    /// Source language code
    source: &'a str,
    /// Target language code
    target: &'a str,
    /// "text" or "html"
    format: &'a str,
    /// API key
    key: &'a str,
}

/// Cloud Translation response envelope
#[derive(Debug, Deserialize)]
struct GoogleCloudResponse {
    /// Payload wrapper
    data: GoogleCloudData,
}

/// Payload of a Cloud Translation response
#[derive(Debug, Deserialize)]
struct GoogleCloudData {
    /// One entry per input text; we always send exactly one
    translations: Vec<GoogleCloudTranslation>,
}

/// A single translation result
#[derive(Debug, Deserialize)]
struct GoogleCloudTranslation {
    /// The translated text
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl GoogleCloud {
    /// Create a new client with the given API key
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
        }
    }
}

impl std::fmt::Debug for GoogleCloud {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleCloud").field("api_key", &"***").finish()
    }
}

#[async_trait]
impl TranslationBackend for GoogleCloud {
    fn id(&self) -> &'static str {
        "googlecloud"
    }

    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
        format: TextFormat,
    ) -> Result<String, BackendError> {
        if self.api_key.trim().is_empty() {
            return Err(BackendError::MissingApiKey(self.id()));
        }

        let body = GoogleCloudRequest {
            q: text,
            source,
            target,
            format: format.wire_value(),
            key: &self.api_key,
        };

        let response = self
            .client
            .post(GOOGLE_CLOUD_ENDPOINT)
            .json(&body)
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

        let parsed = response.json::<GoogleCloudResponse>().await?;

        parsed
            .data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| {
                BackendError::MalformedResponse(
                    "response has no 'data.translations' entries".to_string(),
                )
            })
    }
}
