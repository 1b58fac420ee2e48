//! `SQLite` key/value store behind an r2d2 connection pool.

use std::path::Path;

use quotebook_core::env_parse_with_default;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{Connection, OptionalExtension as _, params};

use crate::migrations;
use crate::{KeyValueStore, StorageError};

type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Durable key/value store in a single `SQLite` file.
#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: Pool<SqliteConnectionManager>,
}

fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA busy_timeout = 30000;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;",
    )?;
    Ok(())
}

fn db_pool_size() -> u32 {
    env_parse_with_default("QUOTEBOOK_DB_POOL_SIZE", 4_u32).max(1)
}

impl SqliteStore {
    /// Opens (creating if needed) the database at `db_path` and runs migrations.
    ///
    /// # Errors
    /// Returns an error if the pool cannot be built or a migration fails.
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);
        let pool = Pool::builder().max_size(db_pool_size()).build(manager)?;
        Self::from_pool(pool)
    }

    /// Private in-memory database, shared by the single pooled connection.
    ///
    /// # Errors
    /// Returns an error if the pool cannot be built or a migration fails.
    pub fn in_memory() -> Result<Self, StorageError> {
        // Each in-memory connection is its own database: keep exactly one alive.
        let pool = Pool::builder()
            .max_size(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .build(SqliteConnectionManager::memory())?;
        Self::from_pool(pool)
    }

    fn from_pool(pool: Pool<SqliteConnectionManager>) -> Result<Self, StorageError> {
        let conn = pool.get()?;
        migrations::run_migrations(&conn)
            .map_err(|e| StorageError::Migration(e.to_string()))?;
        drop(conn);

        tracing::debug!(pool_size = pool.max_size(), "SQLite key/value store initialized");
        Ok(Self { pool })
    }

    fn conn(&self) -> Result<PooledConn, StorageError> {
        Ok(self.pool.get()?)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let conn = self.conn()?;
        let value = conn
            .query_row("SELECT value FROM kv_store WHERE key = ?1", params![key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
            params![key, value],
        )?;
        Ok(())
    }
}
