//! Typed error enum for the service layer.
//!
//! Unifies domain, storage and remote failures into a single error type so
//! the outer layers can map each one to a user-facing message.

use quotebook_core::QuoteError;
use quotebook_remote::RemoteError;
use quotebook_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Validation, empty collection or import format failure.
    #[error(transparent)]
    Quote(#[from] QuoteError),

    /// Persisted state could not be read or written.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Remote endpoint failure surfaced to a caller that asked for it.
    #[error("remote: {0}")]
    Remote(#[from] RemoteError),

    /// Remote sync requested but no endpoint is configured.
    #[error("not configured: {0}")]
    NotConfigured(String),

    /// A blocking storage task panicked or was cancelled.
    #[error("background task failed: {0}")]
    Task(String),
}

impl ServiceError {
    /// Caller input was rejected (blank fields, unknown category, bad file).
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Quote(QuoteError::Validation(_) | QuoteError::Format(_)))
    }

    #[must_use]
    pub const fn is_empty_collection(&self) -> bool {
        matches!(self, Self::Quote(QuoteError::EmptyCollection))
    }

    /// Whether this error is likely transient (worth retrying).
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Storage(e) => e.is_transient(),
            Self::Remote(e) => e.is_transient(),
            _ => false,
        }
    }
}

impl From<tokio::task::JoinError> for ServiceError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Task(err.to_string())
    }
}
