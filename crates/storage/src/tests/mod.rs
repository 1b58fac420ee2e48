//! Test utilities and module declarations for storage tests.

use std::sync::Arc;

use quotebook_core::Quote;
use tempfile::TempDir;

use crate::{PersistenceAdapter, SqliteStore};

#[allow(clippy::unwrap_used, reason = "test code")]
pub fn create_test_store() -> (Arc<SqliteStore>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let store = SqliteStore::new(&db_path).unwrap();
    (Arc::new(store), temp_dir)
}

pub fn create_test_adapter() -> (PersistenceAdapter, TempDir) {
    let (store, dir) = create_test_store();
    (PersistenceAdapter::new(store), dir)
}

pub fn quote(text: &str, category: &str) -> Quote {
    Quote { text: text.to_owned(), category: category.to_owned() }
}
