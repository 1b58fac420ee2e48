//! Typed error enum for the storage layer.

use thiserror::Error;

/// Storage-layer error covering every expected failure mode of the
/// key/value backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// SQL / connection failure.
    #[cfg(feature = "sqlite")]
    #[error("database error: {0}")]
    Database(#[source] rusqlite::Error),

    /// Could not obtain a pooled connection.
    #[cfg(feature = "sqlite")]
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// Schema migration failure.
    #[error("migration error: {0}")]
    Migration(String),

    /// Value could not be serialized for storage.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An in-process lock was poisoned by a panicking writer.
    #[error("lock poisoned: {0}")]
    LockPoisoned(String),
}

impl StorageError {
    /// Whether this error is likely transient (worth retrying).
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            #[cfg(feature = "sqlite")]
            Self::Database(rusqlite::Error::SqliteFailure(err, _)) => matches!(
                err.code,
                rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
            ),
            #[cfg(feature = "sqlite")]
            Self::Pool(_) => true,
            _ => false,
        }
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database(err)
    }
}
