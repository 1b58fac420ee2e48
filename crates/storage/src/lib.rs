//! Storage layer for quotebook
//!
//! A durable key/value slot (SQLite by default, in-memory for tests and
//! ephemeral runs) and the persistence adapter that maps the quote store,
//! the last selected category and JSON export/import files onto it.

mod error;
mod kv;
#[cfg(feature = "sqlite")]
mod migrations;
mod persistence;
#[cfg(feature = "sqlite")]
mod sqlite;
#[cfg(test)]
mod tests;

pub use error::StorageError;
pub use kv::{KeyValueStore, MemoryStore};
pub use persistence::{ExportFile, ImportBatch, PersistenceAdapter};
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;
