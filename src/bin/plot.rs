// src/bin/plot.rs
use std::path::Path;

use clap::Parser;
use nick_rec::{cli, config::consts::LOG_FILE, logging};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = cli::PlotArgs::parse();
    logging::init(Path::new(LOG_FILE));

    cli::plot(args)?;
    Ok(())
}
