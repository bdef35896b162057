use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::BackendError;
use crate::translation::TextFormat;

use super::TranslationBackend;

/// Client for a self-hosted LibreTranslate engine
///
/// Speaks the `/translate` endpoint of a LibreTranslate instance, by default
/// the conventional `http://localhost:5000/translate`. An API key is only
/// needed when the instance is configured to require one.
pub struct LibreTranslate {
    /// HTTP client for API requests
    client: Client,
    /// Full URL of the translate endpoint
    endpoint: String,
    /// API key, empty when the instance runs open
    api_key: String,
}

/// LibreTranslate request body
#[derive(Debug, Serialize)]
struct LibreTranslateRequest<'a> {
    /// Text to translate
    q: &'a str,
    /// Source language code
    source: &'a str,
    /// Target language code
    target: &'a str,
    /// "text" or "html"
    format: &'a str,
    /// API key, omitted when not configured
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

/// LibreTranslate response body
#[derive(Debug, Deserialize)]
struct LibreTranslateResponse {
    /// The translated text
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

impl LibreTranslate {
    /// Create a new client for the given endpoint
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

impl std::fmt::Debug for LibreTranslate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LibreTranslate")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"***")
            .finish()
    }
}

#[async_trait]
impl TranslationBackend for LibreTranslate {
    fn id(&self) -> &'static str {
        "libretranslate"
    }

    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
        format: TextFormat,
    ) -> Result<String, BackendError> {
        if self.endpoint.trim().is_empty() {
            return Err(BackendError::NotConfigured(
                "LibreTranslate endpoint URL is empty".to_string(),
            ));
        }

        let body = LibreTranslateRequest {
            q: text,
            source,
            target,
            format: format.wire_value(),
            api_key: if self.api_key.is_empty() {
                None
            } else {
                Some(&self.api_key)
            },
        };

        let response = self.client.post(&self.endpoint).json(&body).send().await?;

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

        let parsed = response.json::<LibreTranslateResponse>().await?;

        parsed.translated_text.ok_or_else(|| {
            BackendError::MalformedResponse("response has no 'translatedText' field".to_string())
        })
    }
}
