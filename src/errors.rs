/*!
 * Error types for the weblingo library.
 *
 * This module contains custom error types for different parts of the pipeline,
 * using the thiserror crate for ergonomic error definitions.
 *
 * The orchestrator in `translation::core` converts all of these into soft
 * failures (`translate` always returns usable text), so these types surface
 * to callers only through the diagnostic hook.
 */

use thiserror::Error;

/// Errors that can occur when calling a translation backend
#[derive(Error, Debug)]
pub enum BackendError {
    /// No backend is configured or the configuration is incomplete
    #[error("Backend not configured: {0}")]
    NotConfigured(String),

    /// The backend requires an API key and none was supplied
    #[error("Missing API key for backend '{0}'")]
    MissingApiKey(&'static str),

    /// Error when making the HTTP request fails (connect, DNS, timeout)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Error returned by the backend itself
    #[error("Backend responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the backend
        message: String,
    },

    /// The response body did not have the expected shape
    #[error("Malformed backend response: {0}")]
    MalformedResponse(String),
}

impl BackendError {
    /// Whether this failure happened before any network traffic
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::NotConfigured(_) | Self::MissingApiKey(_))
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::MalformedResponse(error.to_string())
        } else {
            Self::RequestFailed(error.to_string())
        }
    }
}

/// Errors that can occur in the key-value store layer
#[derive(Error, Debug)]
pub enum StoreError {
    /// Error from the SQLite backend
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Error from a filesystem operation (database directory, open)
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while rewriting HTML text nodes
#[derive(Error, Debug)]
pub enum WalkerError {
    /// Reading the input into the parser or re-serializing the mutated
    /// tree failed
    #[error("Document I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
