//! Key/value store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the capability seam every persisted key goes through, so tests
//!   can run against in-memory connections or inject malformed payloads.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Values are opaque strings here; (de)serialization belongs to callers.
//! - `set` replaces the whole value for a key atomically.

use crate::storage::StorageError;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence-layer error for key/value access and state mapping.
#[derive(Debug)]
pub enum RepoError {
    Storage(StorageError),
    /// The connection has no key/value table; migrations did not run.
    MissingRequiredTable(&'static str),
    /// In-memory state failed to serialize; indicates a programming error.
    Serialize(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "store connection is missing required table `{table}`")
            }
            Self::Serialize(err) => write!(f, "failed to serialize state: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::MissingRequiredTable(_) => None,
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<StorageError> for RepoError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Storage(StorageError::Sqlite(value))
    }
}

/// Synchronous key/value persistence capability.
///
/// The engine's only durable side effect is writing whole values under fixed
/// keys, so this small contract is the entire swap surface for tests.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> RepoResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> RepoResult<()>;
    fn remove(&self, key: &str) -> RepoResult<()>;
}

impl<K: KeyValueStore + ?Sized> KeyValueStore for &K {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> RepoResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> RepoResult<()> {
        (**self).remove(key)
    }
}

/// SQLite-backed key/value store over the `local_storage` table.
pub struct SqliteKeyValueStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKeyValueStore<'conn> {
    /// Wraps a connection after verifying the key/value table exists, so a
    /// connection that skipped migrations fails fast instead of erroring on
    /// first access.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let table_count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'local_storage';",
            [],
            |row| row.get(0),
        )?;

        if table_count == 0 {
            return Err(RepoError::MissingRequiredTable("local_storage"));
        }

        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteKeyValueStore<'_> {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1;",
                [key],
                |row| row.get(0),
            )
            .optional()?;

        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO local_storage (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;

        Ok(())
    }

    fn remove(&self, key: &str) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM local_storage WHERE key = ?1;", [key])?;

        Ok(())
    }
}
