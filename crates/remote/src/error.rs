//! Typed error enum for the remote crate.

use thiserror::Error;

/// Transport-level failures talking to the remote endpoint.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
    #[error("all retries exhausted, last error: {0}")]
    RetriesExhausted(Box<RemoteError>),
}

impl RemoteError {
    /// Whether this error is transient and should be retried.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::HttpRequest(_) => true,
            Self::HttpStatus { code, .. } => matches!(code, 429 | 500 | 502 | 503 | 504),
            _ => false,
        }
    }
}
