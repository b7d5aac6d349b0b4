use std::io::Write;

use anyhow::Result;
use pgconv::config::{Args, ConvertConfig};
use pgconv::document::SourceFormat;
use pgconv::ConvertError;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let args = Args::parse_env();

    // Logging goes to stderr; stdout carries the serialized graph
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

    debug!("pgconv v{}", env!("CARGO_PKG_VERSION"));

    let config = ConvertConfig::from(&args);
    let mut out = std::io::stdout().lock();

    pgconv::run(&config, &mut out).map_err(|err| {
        let not_graphml = matches!(err, ConvertError::InputFormat { .. })
            && config.source == SourceFormat::GraphMl;
        let err = anyhow::Error::new(err);
        if not_graphml {
            err.context("It looks like you pointed to a file that is not GraphML")
        } else {
            err
        }
    })?;

    out.flush()?;
    Ok(())
}
