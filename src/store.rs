// src/store.rs
//! Append-only SQLite table of occupancy samples.
//!
//! Schema: `OCCUPANCY(ID INTEGER PRIMARY KEY AUTOINCREMENT, DATETIME TEXT
//! NOT NULL, OCCUPANCY INT NULL)`. Existing `data.db` files with this table
//! load unchanged.
//! There is no update or delete path.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use log::{debug, info};
use rusqlite::{params, Connection, OpenFlags};

use crate::config::consts::TABLE;
use crate::error::{Error, Result};
use crate::file::ensure_parent;
use crate::sample::format_timestamp;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS OCCUPANCY (
        ID          INTEGER PRIMARY KEY AUTOINCREMENT,
        DATETIME    TEXT    NOT NULL,
        OCCUPANCY   INT     NULL
    );
    CREATE INDEX IF NOT EXISTS OCCUPANCY_DATETIME ON OCCUPANCY (DATETIME);
";

fn unavailable<E>(path: &Path, e: E) -> Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    Error::StorageUnavailable { path: path.to_path_buf(), source: Box::new(e) }
}

/// One row as stored, id included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredRow {
    pub id: i64,
    pub timestamp: String,
    pub occupancy: Option<i64>,
}

pub struct Store {
    conn: Connection,
    path: PathBuf,
}

impl Store {
    /// Open (creating if needed) the database file for writing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        ensure_parent(&path).map_err(|e| unavailable(&path, e))?;
        let conn = Connection::open(&path).map_err(|e| unavailable(&path, e))?;
        debug!("Opened store {}", path.display());
        Ok(Self { conn, path })
    }

    /// Open an existing database without the ability to create or modify it.
    pub fn open_read_only(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn =
            Connection::open_with_flags(&path, flags).map_err(|e| unavailable(&path, e))?;
        debug!("Opened store {} (read-only)", path.display());
        Ok(Self { conn, path })
    }

    pub fn open_in_memory() -> Result<Self> {
        let path = PathBuf::from(":memory:");
        let conn = Connection::open_in_memory().map_err(|e| unavailable(&path, e))?;
        Ok(Self { conn, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the table if it is missing. Existing rows are untouched.
    pub fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        info!("Store ready at {}", self.path.display());
        Ok(())
    }

    /// Insert one sample and return its id. Committed before returning.
    pub fn append(&self, timestamp: NaiveDateTime, occupancy: u8) -> Result<i64> {
        self.require_schema()?;
        self.conn.execute(
            "INSERT INTO OCCUPANCY (DATETIME, OCCUPANCY) VALUES (?1, ?2)",
            params![format_timestamp(timestamp), occupancy],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!("Appended sample #{id}: {timestamp} {occupancy}%");
        Ok(id)
    }

    /// Every sample as `(timestamp text, occupancy)`, oldest first.
    /// A NULL occupancy reads as 0.
    pub fn all_samples(&self) -> Result<Vec<(String, i64)>> {
        self.require_schema()?;
        let mut stmt = self.conn.prepare(
            "SELECT DATETIME, COALESCE(OCCUPANCY, 0)
             FROM OCCUPANCY
             ORDER BY DATETIME ASC, ID ASC",
        )?;
        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    /// Every row in insertion order, for the plain-text dump.
    pub fn rows(&self) -> Result<Vec<StoredRow>> {
        self.require_schema()?;
        let mut stmt = self
            .conn
            .prepare("SELECT ID, DATETIME, OCCUPANCY FROM OCCUPANCY ORDER BY ID ASC")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(StoredRow {
                    id: row.get(0)?,
                    timestamp: row.get(1)?,
                    occupancy: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    pub fn count(&self) -> Result<i64> {
        self.require_schema()?;
        let n = self
            .conn
            .query_row("SELECT COUNT(*) FROM OCCUPANCY", [], |row| row.get(0))?;
        Ok(n)
    }

    fn require_schema(&self) -> Result<()> {
        let n: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            params![TABLE],
            |row| row.get(0),
        )?;
        if n == 0 {
            return Err(Error::Schema { table: TABLE });
        }
        Ok(())
    }
}

#[cfg(test)]
impl Store {
    /// Insert arbitrary text, bypassing timestamp formatting.
    pub(crate) fn append_raw_for_test(&self, timestamp: &str, occupancy: i64) {
        self.conn
            .execute(
                "INSERT INTO OCCUPANCY (DATETIME, OCCUPANCY) VALUES (?1, ?2)",
                params![timestamp, occupancy],
            )
            .unwrap();
    }
}
