//! RDF side of the conversion, built on Oxigraph.
//!
//! - [`ontology`] - the pgo vocabulary
//! - [`transform`] - maps a property graph document onto pgo triples
//! - [`graph`] - in-memory triple store and serialization
//!
//! # Example
//!
//! ```ignore
//! use pgconv::persistence::{GraphTransformer, RdfSyntax, TripleStore};
//!
//! let conversion = GraphTransformer::default().transform(&doc)?;
//! let store = TripleStore::from_triples(&conversion.triples)?;
//! print!("{}", store.serialize(RdfSyntax::Turtle)?);
//! ```

mod graph;
mod transform;

pub mod ontology;

pub use graph::*;
pub use transform::*;
