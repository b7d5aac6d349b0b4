//! Prints the compact notation of a GraphML file.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use pgconv::compact::to_compact;
use pgconv::document::{load_document, SourceFormat};
use pgconv::ConvertError;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "graphml2yarspg")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print a GraphML graph in compact arrow/record notation")]
struct Args {
    /// GraphML input file
    file: PathBuf,

    /// Enable verbose logging (to stderr)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let doc = load_document(&args.file, SourceFormat::GraphMl).map_err(|err| match err {
        ConvertError::InputFormat { .. } => anyhow::Error::new(err)
            .context("It looks like you pointed to a file that is not GraphML"),
        other => anyhow::Error::new(other),
    })?;

    let mut out = std::io::stdout().lock();
    out.write_all(to_compact(&doc).as_bytes())?;
    out.flush()?;
    Ok(())
}
