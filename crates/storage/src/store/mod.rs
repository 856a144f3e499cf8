#![forbid(unsafe_code)]

mod branches;
mod error;
mod franchises;
mod products;
mod requests;
mod support;
mod types;

pub use error::StoreError;
pub use requests::*;
pub use types::*;

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;
use support::*;

const DB_FILE_NAME: &str = "franchise_catalog.db";
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Relational store for the franchise → branch → product hierarchy.
///
/// Every public operation runs inside exactly one SQLite transaction. Writers
/// take `&mut self`; readers open a deferred read transaction on `&self` so a
/// detail view never observes a half-applied cascade.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
    storage_dir: Option<PathBuf>,
}

impl SqliteStore {
    pub fn open(storage_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let storage_dir = storage_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&storage_dir)?;

        let db_path = storage_dir.join(DB_FILE_NAME);
        let conn = Connection::open(&db_path)?;
        tracing::debug!(path = %db_path.display(), "opening catalog store");
        Self::from_connection(conn, Some(storage_dir))
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        tracing::debug!("opening in-memory catalog store");
        Self::from_connection(conn, None)
    }

    fn from_connection(conn: Connection, storage_dir: Option<PathBuf>) -> Result<Self, StoreError> {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        migrate_sqlite_schema(&conn)?;
        Ok(Self { conn, storage_dir })
    }

    /// Directory holding the database file; `None` for in-memory stores.
    pub fn storage_dir(&self) -> Option<&Path> {
        self.storage_dir.as_deref()
    }

    pub fn db_path(&self) -> Option<PathBuf> {
        self.storage_dir.as_ref().map(|dir| dir.join(DB_FILE_NAME))
    }
}
