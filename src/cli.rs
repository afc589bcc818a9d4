// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;
use clap::{ArgGroup, Parser};

use crate::collector::Collector;
use crate::config::consts::*;
use crate::config::options::{CollectOptions, PlotOptions, View};
use crate::error::Result;
use crate::progress::CliProgress;
use crate::runner::{self, Outcome};

/// Charts of recorded Nick Rec Center occupancy.
///
/// With no view flag, plots the most recent day that has data.
#[derive(Parser, Debug)]
#[command(name = "nick_rec", version)]
#[command(group(ArgGroup::new("view").args(["date", "heatmap", "all", "dump"])))]
pub struct PlotArgs {
    /// Plot a specific date
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Heatmap of average occupancy by weekday and hour
    #[arg(long)]
    pub heatmap: bool,

    /// Plot all recorded data
    #[arg(long)]
    pub all: bool,

    /// Print every stored row instead of plotting
    #[arg(long)]
    pub dump: bool,

    /// SQLite database written by `collect`
    #[arg(long, value_name = "PATH", env = ENV_DB, default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,

    /// Directory charts are written to
    #[arg(long, value_name = "DIR", env = ENV_OUT, default_value = DEFAULT_CHART_DIR)]
    pub out: PathBuf,
}

impl PlotArgs {
    pub fn view(&self) -> View {
        if self.heatmap {
            View::Heatmap
        } else if self.all {
            View::All
        } else if self.dump {
            View::Dump
        } else {
            View::Day(self.date)
        }
    }
}

impl From<PlotArgs> for PlotOptions {
    fn from(args: PlotArgs) -> Self {
        Self { view: args.view(), db_path: args.db, out_dir: args.out }
    }
}

/// Record the facility's current occupancy once.
#[derive(Parser, Debug)]
#[command(name = "collect", version)]
pub struct CollectArgs {
    /// SQLite database to append to (created if missing)
    #[arg(long, value_name = "PATH", env = ENV_DB, default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,

    /// Occupancy page to read
    #[arg(long, env = ENV_URL, default_value = FACILITY_URL)]
    pub url: String,

    /// HTTP timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = HTTP_TIMEOUT_SECS)]
    pub timeout: u64,
}

impl From<CollectArgs> for CollectOptions {
    fn from(args: CollectArgs) -> Self {
        Self {
            url: args.url,
            db_path: args.db,
            timeout: Duration::from_secs(args.timeout),
            ..CollectOptions::default()
        }
    }
}

fn parse_date(s: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD ({e})"))
}

pub fn plot(args: PlotArgs) -> Result<()> {
    let options = PlotOptions::from(args);
    match runner::run(&options)? {
        Outcome::Rendered(path) => println!("Wrote {}", path.display()),
        Outcome::NoData => println!("No data in database. Run `collect` first."),
        Outcome::NoDataForDate(date) => println!("No data for {date}"),
        Outcome::Dumped(rows) => {
            println!("ID,DATETIME,OCCUPANCY");
            for r in &rows {
                let occ = r.occupancy.map(|o| o.to_string()).unwrap_or_default();
                println!("{},{},{}", r.id, r.timestamp, occ);
            }
            println!("{} rows", rows.len());
        }
    }
    Ok(())
}

pub fn collect(args: CollectArgs) -> Result<()> {
    let collector = Collector::new(CollectOptions::from(args))?;
    collector.run(&mut CliProgress)?;
    Ok(())
}
