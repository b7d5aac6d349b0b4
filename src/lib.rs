//! Property graph to RDF conversion.
//!
//! A run loads a GraphML or YARS-PG document, maps it onto the pgo
//! vocabulary, materializes the triples in an in-memory store and writes
//! one serialization (or the compact notation) to stdout or a gzip file.
//!
//! ```ignore
//! use pgconv::config::ConvertConfig;
//! use pgconv::document::SourceFormat;
//!
//! let config = ConvertConfig::new("graph.graphml", SourceFormat::GraphMl);
//! pgconv::run(&config, &mut std::io::stdout().lock())?;
//! ```

pub mod compact;
pub mod config;
pub mod document;
pub mod error;
pub mod output;
pub mod persistence;

use std::io::Write;

use tracing::info;

pub use error::{ConvertError, Result};

use crate::config::ConvertConfig;
use crate::document::load_document;
use crate::persistence::{GraphTransformer, TripleStore};

/// Runs one conversion end to end.
///
/// Nothing is written to `out` or to disk unless every stage before output
/// succeeded.
///
/// # Errors
///
/// Returns the first [`ConvertError`] raised by loading, mapping,
/// materializing or writing.
pub fn run<W: Write>(config: &ConvertConfig, out: &mut W) -> Result<()> {
    info!(
        "Converting {} ({}) as {:?}",
        config.input.display(),
        config.source,
        config.effective_mode()
    );

    let doc = load_document(&config.input, config.source)?;
    let conversion = GraphTransformer::new(config.literal_policy).transform(&doc)?;
    let store = TripleStore::from_triples(&conversion.triples)?;
    output::dispatch(config, &conversion, &store, out)?;

    Ok(())
}
