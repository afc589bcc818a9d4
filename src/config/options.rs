// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;

use super::consts::*;

/// Which chart (or listing) the plot binary produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    /// One day; `None` means the most recent date with data.
    Day(Option<NaiveDate>),
    Heatmap,
    All,
    /// Plain-text listing of every stored row.
    Dump,
}

impl Default for View {
    fn default() -> Self { View::Day(None) }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectOptions {
    pub url: String,
    pub db_path: PathBuf,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            url: s!(FACILITY_URL),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlotOptions {
    pub view: View,
    pub db_path: PathBuf,
    pub out_dir: PathBuf,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            view: View::default(),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            out_dir: PathBuf::from(DEFAULT_CHART_DIR),
        }
    }
}

impl PlotOptions {
    pub fn day_chart(&self, date: NaiveDate) -> PathBuf {
        self.out_dir.join(format!("day_{}.png", date.format("%Y-%m-%d")))
    }
    pub fn heatmap_chart(&self) -> PathBuf {
        self.out_dir.join("heatmap.png")
    }
    pub fn all_chart(&self) -> PathBuf {
        self.out_dir.join("all.png")
    }
}
