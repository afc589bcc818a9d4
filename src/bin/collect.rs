// src/bin/collect.rs
// Meant to be run on a schedule (cron, systemd timer); one sample per run.
use std::path::Path;

use clap::Parser;
use nick_rec::{cli, config::consts::LOG_FILE, logging};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = cli::CollectArgs::parse();
    logging::init(Path::new(LOG_FILE));

    cli::collect(args)?;
    Ok(())
}
