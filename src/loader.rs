// src/loader.rs
use log::info;

use crate::config::consts::MAX_OCCUPANCY;
use crate::error::{Error, Result};
use crate::sample::{parse_timestamp, Sample};
use crate::store::Store;

/// Full history, oldest first. A row that does not parse fails the whole load:
/// a truncated history would silently skew every chart.
pub fn load_data(store: &Store) -> Result<Vec<Sample>> {
    let rows = store.all_samples()?;

    let mut series = rows
        .into_iter()
        .map(|(text, occ)| {
            let timestamp = parse_timestamp(&text)
                .ok_or_else(|| Error::MalformedTimestamp { value: text.clone() })?;
            let occupancy = u8::try_from(occ)
                .ok()
                .filter(|pct| *pct <= MAX_OCCUPANCY)
                .ok_or(Error::MalformedOccupancy { timestamp: text, value: occ })?;
            Ok(Sample::new(timestamp, occupancy))
        })
        .collect::<Result<Vec<_>>>()?;

    // Text order and time order can disagree when older rows use another layout.
    series.sort_by_key(|s| s.timestamp);

    info!("Loaded {} samples from {}", series.len(), store.path().display());
    Ok(series)
}
