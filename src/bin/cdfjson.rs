//! Dump the dimensions, variables, attributes and values of a NetCDF file as JSON to stdout.
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

use cdfview::ser::Style;
use cdfview::Catalog;

#[derive(Parser, Debug)]
#[command(name = "cdfjson", version, about)]
struct Args {
    /// Input NetCDF file
    input: PathBuf,

    /// Indent the output
    #[arg(long)]
    pretty: bool,

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

    let style = if args.pretty {
        Style::Pretty
    } else {
        Style::Compact
    };

    let catalog = Catalog::open(&args.input)?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    cdfview::dump::write(&catalog, &mut out, style)
        .with_context(|| format!("dumping {}", args.input.display()))?;
    writeln!(out)?;
    out.flush()?;

    catalog
        .close()
        .with_context(|| format!("closing {}", args.input.display()))?;

    Ok(())
}
