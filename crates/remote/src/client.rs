use std::time::Duration;

use async_trait::async_trait;
use quotebook_core::constants::DEFAULT_REMOTE_LIMIT;
use quotebook_core::{Quote, RemoteQuoteBatch};

use crate::error::RemoteError;
use crate::source::RemoteSource;
use crate::wire_types::{NewRemoteRecord, RemoteRecord};

/// Path serving (GET) and accepting (POST) quote records.
pub const QUOTES_PATH: &str = "/posts";

const MAX_RETRIES: usize = 2;
const RETRY_DELAYS_MS: [u64; 3] = [0, 200, 500];

/// Client for the remote quote endpoint.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    client: reqwest::Client,
    base_url: String,
    limit: usize,
}

impl RemoteClient {
    /// Creates a client for `base_url` with a per-request `timeout`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RemoteError> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url, limit: DEFAULT_REMOTE_LIMIT })
    }

    /// Caps the number of records taken from one fetch.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    fn quotes_url(&self) -> String {
        format!("{}{QUOTES_PATH}", self.base_url)
    }

    async fn fetch_records(&self) -> Result<Vec<RemoteRecord>, RemoteError> {
        let mut last_error: Option<RemoteError> = None;

        for attempt in 0..=MAX_RETRIES {
            if attempt > 0 {
                let delay_ms = RETRY_DELAYS_MS.get(attempt).copied().unwrap_or(500);
                let delay = Duration::from_millis(delay_ms);
                tokio::time::sleep(delay).await;
                tracing::warn!("Remote fetch retry attempt {attempt}/{MAX_RETRIES} after {delay:?}");
            }

            let response = match self.client.get(self.quotes_url()).send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(RemoteError::HttpRequest(e));
                    continue;
                },
            };

            let status = response.status();
            if status.is_success() {
                let body = match response.text().await {
                    Ok(b) => b,
                    Err(e) => {
                        last_error = Some(RemoteError::HttpRequest(e));
                        continue;
                    },
                };
                return serde_json::from_str(&body).map_err(|e| RemoteError::JsonParse {
                    context: format!("remote quote list (body: {})", truncate(&body, 200)),
                    source: e,
                });
            }

            let body =
                response.text().await.unwrap_or_else(|_| "Could not read error body".to_owned());
            let err = RemoteError::HttpStatus { code: status.as_u16(), body };
            if err.is_transient() {
                last_error = Some(err);
                continue;
            }
            return Err(err);
        }

        Err(RemoteError::RetriesExhausted(Box::new(last_error.unwrap_or(
            RemoteError::HttpStatus { code: 0, body: "no attempt made".to_owned() },
        ))))
    }
}

#[async_trait]
impl RemoteSource for RemoteClient {
    async fn fetch_quotes(&self) -> Result<RemoteQuoteBatch, RemoteError> {
        let records = self.fetch_records().await?;
        let total = records.len();
        let quotes: Vec<Quote> =
            records.into_iter().take(self.limit).filter_map(RemoteRecord::into_quote).collect();
        tracing::debug!(total, kept = quotes.len(), "Fetched remote quotes");
        Ok(RemoteQuoteBatch::from(quotes))
    }

    async fn push_quote(&self, quote: &Quote) -> Result<(), RemoteError> {
        let response =
            self.client.post(self.quotes_url()).json(&NewRemoteRecord::from(quote)).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(RemoteError::HttpStatus { code: status.as_u16(), body })
    }
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
