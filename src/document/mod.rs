//! Property graph documents and the loaders that produce them.
//!
//! Two source shapes are supported:
//!
//! - [`graphml`] - a GraphML file, read as plain XML with element names
//!   compared literally (no namespace processing)
//! - [`yarspg`] - the YAML notation with top-level `e` (edges) and `n`
//!   (nodes) sequences
//!
//! Both produce the same [`PropertyGraphDocument`]: ordered edges, then
//! ordered nodes, each node carrying exactly [`PROPERTY_SLOTS`] values.
//!
//! # Example
//!
//! ```ignore
//! use pgconv::document::{load_document, SourceFormat};
//! use std::path::Path;
//!
//! let doc = load_document(Path::new("graph.graphml"), SourceFormat::GraphMl)?;
//! println!("{} edges, {} nodes", doc.edges.len(), doc.nodes.len());
//! ```

pub mod graphml;
pub mod yarspg;

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::error::{ConvertError, Result};

/// Number of property slots captured per node.
pub const PROPERTY_SLOTS: usize = 3;

/// Keys of the property slots, in slot order.
pub const PROPERTY_KEYS: [&str; PROPERTY_SLOTS] = ["label", "0", "1"];

/// The notation the input file is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    GraphMl,
    YarsPg,
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::GraphMl => write!(f, "GraphML"),
            SourceFormat::YarsPg => write!(f, "YARS-PG"),
        }
    }
}

/// A directed edge between two node identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl EdgeRecord {
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
        }
    }
}

/// A node and its positional property values.
///
/// Slot 0 carries the `label` key, slots 1 and 2 the keys `0` and `1`.
/// Absent values are stored as empty strings, never omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRecord {
    pub id: String,
    pub properties: [String; PROPERTY_SLOTS],
}

impl NodeRecord {
    /// Builds a node from any number of values, keeping the first three and
    /// padding the rest with `""`.
    pub fn from_values<I>(id: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut properties: [String; PROPERTY_SLOTS] = Default::default();
        for (slot, value) in properties.iter_mut().zip(values) {
            *slot = value;
        }
        Self {
            id: id.into(),
            properties,
        }
    }

    pub fn label(&self) -> &str {
        &self.properties[0]
    }

    /// Iterates `(key, value)` pairs in slot order.
    pub fn keyed_properties(&self) -> impl Iterator<Item = (&'static str, &str)> {
        PROPERTY_KEYS
            .iter()
            .copied()
            .zip(self.properties.iter().map(String::as_str))
    }
}

/// A loaded property graph. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyGraphDocument {
    pub edges: Vec<EdgeRecord>,
    pub nodes: Vec<NodeRecord>,
}

impl PropertyGraphDocument {
    /// Parses document text already read into memory.
    ///
    /// `origin` only names the input in error messages.
    pub fn parse(content: &str, format: SourceFormat, origin: &Path) -> Result<Self> {
        match format {
            SourceFormat::GraphMl => graphml::parse(content, origin),
            SourceFormat::YarsPg => yarspg::parse(content, origin),
        }
    }
}

/// Reads and parses the file at `path`.
///
/// # Errors
///
/// - [`ConvertError::Io`] if the file cannot be read
/// - [`ConvertError::InputFormat`] if it does not have the expected shape
pub fn load_document(path: &Path, format: SourceFormat) -> Result<PropertyGraphDocument> {
    let content = std::fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
    let doc = PropertyGraphDocument::parse(&content, format, path)?;

    debug!(
        "Loaded {} document {}: {} edges, {} nodes",
        format,
        path.display(),
        doc.edges.len(),
        doc.nodes.len()
    );

    Ok(doc)
}
