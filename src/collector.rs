// src/collector.rs
//! One-shot collection: fetch the page, read the percentage, append a sample.
//! Scheduling (cron, systemd timer, ...) is up to the operator.

use chrono::{Local, NaiveDateTime};
use log::info;
use reqwest::blocking::Client;

use crate::config::options::CollectOptions;
use crate::core::net;
use crate::error::Result;
use crate::progress::Progress;
use crate::sample::truncate_to_micros;
use crate::specs::occupancy::{self, Reading};
use crate::store::Store;

/// What a successful run wrote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollectSummary {
    pub id: i64,
    pub timestamp: NaiveDateTime,
    pub reading: Reading,
}

pub struct Collector {
    options: CollectOptions,
    client: Client,
}

impl Collector {
    pub fn new(options: CollectOptions) -> Result<Self> {
        let client = net::client(&options)?;
        Ok(Self { options, client })
    }

    /// Single attempt. A failed fetch is returned as-is and leaves the
    /// database path untouched.
    pub fn run(&self, progress: &mut dyn Progress) -> Result<CollectSummary> {
        progress.log(&format!("Fetching {}", self.options.url));
        let doc = net::http_get(&self.client, &self.options.url)?;

        let store = Store::open(&self.options.db_path)?;
        record(&doc, &store, progress)
    }
}

/// Extract a reading from an already-fetched page and persist it, stamped
/// with the time parsing finished.
pub fn record(doc: &str, store: &Store, progress: &mut dyn Progress) -> Result<CollectSummary> {
    let reading = occupancy::extract(doc);
    let timestamp = truncate_to_micros(Local::now().naive_local());
    record_at(reading, timestamp, store, progress)
}

pub fn record_at(
    reading: Reading,
    timestamp: NaiveDateTime,
    store: &Store,
    progress: &mut dyn Progress,
) -> Result<CollectSummary> {
    progress.reading(reading);

    store.initialize()?;
    let id = store.append(timestamp, reading.stored_value())?;
    progress.stored(id);

    info!("Recorded {reading} at {timestamp} as sample #{id}");
    Ok(CollectSummary { id, timestamp, reading })
}
