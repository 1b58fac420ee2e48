use async_trait::async_trait;
use quotebook_core::{Quote, RemoteQuoteBatch};

use crate::RemoteError;

/// Fetch-like capability supplying remote quote batches.
///
/// Implemented by [`crate::RemoteClient`]; tests substitute their own.
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Retrieve the current remote batch.
    async fn fetch_quotes(&self) -> Result<RemoteQuoteBatch, RemoteError>;

    /// Mirror a newly added local quote outward.
    async fn push_quote(&self, quote: &Quote) -> Result<(), RemoteError>;
}
