//! Persistent key-value store contracts and implementations.
//!
//! # Responsibility
//! - Define the string-blob `get`/`set` contract the todo list persists through.
//! - Provide an in-memory store and a SQLite-backed store.
//!
//! # Invariants
//! - `set` overwrites any prior value for the key.
//! - `get` returns `None` for keys that were never written.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Key under which the serialized todo list is stored.
pub const TODOS_STORAGE_KEY: &str = "todos";

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure reported by a store backend.
#[derive(Debug)]
pub enum StoreError {
    /// Backend refused the write, e.g. a storage quota was hit.
    WriteRejected { key: String, reason: String },
    Db(DbError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WriteRejected { key, reason } => {
                write!(f, "store rejected write for key `{key}`: {reason}")
            }
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::WriteRejected { .. } => None,
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// String-blob storage surviving across sessions.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }
}
