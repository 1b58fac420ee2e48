use std::result::Result as StdResult;

use thiserror::Error;

/// Errors raised by the quote domain.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QuoteError {
    /// Quote text or category empty after trimming, or an unknown category selected.
    #[error("validation error: {0}")]
    Validation(String),

    /// Random pick requested from an empty subsequence.
    #[error("no quotes to choose from")]
    EmptyCollection,

    /// Import payload is malformed JSON or not an array.
    #[error("format error: {0}")]
    Format(String),
}

pub type Result<T> = StdResult<T, QuoteError>;
