// src/error.rs
//! Error taxonomy for the collector / loader / chart pipeline.
//!
//! A reading that could not be extracted and a view with nothing to show are
//! *not* errors here: see `specs::occupancy::Reading::Degraded` and
//! `runner::Outcome`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("fetch failed for {url}: {reason}")]
    Network { url: String, reason: String },

    #[error("cannot open store at {path:?}: {source}")]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("table {table} is missing; the store was never initialized")]
    Schema { table: &'static str },

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("malformed timestamp in history: {value:?}")]
    MalformedTimestamp { value: String },

    #[error("malformed occupancy in history at {timestamp}: {value}")]
    MalformedOccupancy { timestamp: String, value: i64 },

    #[error("chart rendering failed: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
