//! Print the mean temperature per station and the observation time of a station NetCDF file.
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

use cdfview::Catalog;

#[derive(Parser, Debug)]
#[command(name = "cdfstations", version, about)]
struct Args {
    /// Input NetCDF file with `stationname`, `tn`, `tx` and `time`
    input: PathBuf,

    /// Log level (written to stderr)
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(args.log_level)
        .init();

    let catalog = Catalog::open(&args.input)?;

    let report = cdfview::report::read(&catalog)
        .with_context(|| format!("reading stations from {}", args.input.display()))?;

    catalog
        .close()
        .with_context(|| format!("closing {}", args.input.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report.write(&mut out, &chrono::Local)?;
    out.flush()?;

    Ok(())
}
