// src/runner.rs
use std::path::PathBuf;

use chrono::NaiveDate;
use log::info;

use crate::config::options::{PlotOptions, View};
use crate::error::Result;
use crate::loader::load_data;
use crate::store::{StoredRow, Store};
use crate::visualize::{render, select_day, HeatmapGrid};

/// What a plot invocation produced. The no-data variants are informational,
/// not failures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Rendered(PathBuf),
    /// The store holds no samples at all.
    NoData,
    /// Samples exist, just none on this date.
    NoDataForDate(NaiveDate),
    Dumped(Vec<StoredRow>),
}

/// Top-level runner: open the store read-only and produce the selected view.
pub fn run(options: &PlotOptions) -> Result<Outcome> {
    let store = Store::open_read_only(&options.db_path)?;
    run_with_store(&store, options)
}

pub fn run_with_store(store: &Store, options: &PlotOptions) -> Result<Outcome> {
    let target = match options.view {
        View::Dump => return Ok(Outcome::Dumped(store.rows()?)),
        View::Day(target) => target,
        View::Heatmap | View::All => None,
    };

    let series = load_data(store)?;
    if series.is_empty() {
        return Ok(Outcome::NoData);
    }

    let path = match options.view {
        View::Heatmap => {
            let path = options.heatmap_chart();
            render::render_heatmap(&HeatmapGrid::from_samples(&series), &path)?;
            path
        }
        View::All => {
            let path = options.all_chart();
            render::render_all(&series, &path)?;
            path
        }
        _ => {
            let Some(day) = select_day(&series, target) else {
                return Ok(Outcome::NoData);
            };
            if day.is_empty() {
                info!("No samples on {}", day.date);
                return Ok(Outcome::NoDataForDate(day.date));
            }
            let path = options.day_chart(day.date);
            render::render_day(&day, &path)?;
            path
        }
    };
    Ok(Outcome::Rendered(path))
}
