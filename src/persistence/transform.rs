//! Mapping of property graph documents onto pgo triples.
//!
//! [`GraphTransformer`] walks a [`PropertyGraphDocument`] once and produces
//! both the ordered triple list and the compact notation of the same graph.
//!
//! # Encoding
//!
//! ```text
//! _:g  a pgo:PropertyGraph ; pgo:hasEdge _:e .
//! _:e  a pgo:Edge ; pgo:label "e1" ; pgo:startNode _:n1 ; pgo:endNode _:n2 .
//! _:n1 a pgo:Node ; pgo:label "n1" ; pgo:hasProperty _:p0 , _:p1 , _:p2 .
//! _:p0 a pgo:Property ; pgo:key "label" ; pgo:value "..." .
//! ```
//!
//! `_:g`, `_:e` and `_:pN` are fresh tokens generated per run. Node
//! resources reuse the node id itself as blank node label, which is what
//! ties `pgo:startNode`/`pgo:endNode` to the node description. A node id
//! must therefore be a valid blank node label. RDF/XML is stricter still
//! (`rdf:nodeID` is an XML NCName), which the store checks when writing it.
//!
//! # Example
//!
//! ```ignore
//! use pgconv::persistence::{GraphTransformer, LiteralPolicy};
//!
//! let conversion = GraphTransformer::new(LiteralPolicy::Strict).transform(&doc)?;
//! println!("{} triples", conversion.triples.len());
//! print!("{}", conversion.compact);
//! ```

use oxigraph::model::{vocab, BlankNode, Literal, Triple};
use tracing::debug;
use uuid::Uuid;

use crate::compact::CompactWriter;
use crate::document::{EdgeRecord, NodeRecord, PropertyGraphDocument, PROPERTY_SLOTS};
use crate::error::{ConvertError, Result};
use crate::persistence::ontology::pgo;

/// How literal values that cannot be written as a plain Turtle string are
/// handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LiteralPolicy {
    /// Reject values containing `"`, `\`, CR or LF.
    #[default]
    Strict,
    /// Accept any value; serializers escape as their syntax requires.
    Escape,
}

/// Output of one transformer pass.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Triples in emission order.
    pub triples: Vec<Triple>,
    /// Compact notation of the same graph.
    pub compact: String,
}

/// Converts documents to pgo triples.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphTransformer {
    policy: LiteralPolicy,
}

impl GraphTransformer {
    pub fn new(policy: LiteralPolicy) -> Self {
        Self { policy }
    }

    /// Transforms a whole document: all edges in document order, then all
    /// nodes in document order.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::RdfBuild`] if a node id is not a valid blank
    /// node label, or if a literal is rejected by the [`LiteralPolicy`].
    pub fn transform(&self, doc: &PropertyGraphDocument) -> Result<Conversion> {
        let capacity = doc.edges.len() * 6 + doc.nodes.len() * (5 + 3 * PROPERTY_SLOTS) + 1;
        let mut triples = Vec::with_capacity(capacity);
        let mut compact = CompactWriter::new();

        let graph = fresh_blank_node();

        for (i, edge) in doc.edges.iter().enumerate() {
            if i == 0 {
                triples.push(Triple::new(
                    graph.clone(),
                    vocab::rdf::TYPE,
                    pgo::PROPERTY_GRAPH.into_owned(),
                ));
            }
            self.transform_edge(&mut triples, &graph, edge)?;
            compact.push_edge(edge);
        }

        for node in &doc.nodes {
            self.transform_node(&mut triples, node)?;
            compact.push_node(node);
        }

        debug!(
            "Transformed {} edges and {} nodes into {} triples",
            doc.edges.len(),
            doc.nodes.len(),
            triples.len()
        );

        Ok(Conversion {
            triples,
            compact: compact.finish(),
        })
    }

    /// Emits the `pgo:hasEdge` link and the edge description.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::RdfBuild`] if the source or target id is not a
    /// valid blank node label, or the edge id is rejected as a literal.
    pub fn transform_edge(
        &self,
        triples: &mut Vec<Triple>,
        graph: &BlankNode,
        edge: &EdgeRecord,
    ) -> Result<()> {
        let edge_node = fresh_blank_node();
        let start = node_blank(&edge.source)?;
        let end = node_blank(&edge.target)?;
        let label = self.literal(&edge.id, || format!("edge '{}' label", edge.id))?;

        triples.push(Triple::new(graph.clone(), pgo::HAS_EDGE, edge_node.clone()));
        triples.push(Triple::new(
            edge_node.clone(),
            vocab::rdf::TYPE,
            pgo::EDGE.into_owned(),
        ));
        triples.push(Triple::new(edge_node.clone(), pgo::LABEL, label));
        triples.push(Triple::new(edge_node.clone(), pgo::START_NODE, start));
        triples.push(Triple::new(edge_node, pgo::END_NODE, end));

        Ok(())
    }

    /// Emits the node description and its three property resources.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::RdfBuild`] if the node id is not a valid blank
    /// node label or a value is rejected as a literal.
    pub fn transform_node(&self, triples: &mut Vec<Triple>, node: &NodeRecord) -> Result<()> {
        let subject = node_blank(&node.id)?;
        let label = self.literal(&node.id, || format!("node '{}' label", node.id))?;
        let properties: [BlankNode; PROPERTY_SLOTS] = std::array::from_fn(|_| fresh_blank_node());

        triples.push(Triple::new(
            subject.clone(),
            vocab::rdf::TYPE,
            pgo::NODE.into_owned(),
        ));
        triples.push(Triple::new(subject.clone(), pgo::LABEL, label));
        for property in &properties {
            triples.push(Triple::new(subject.clone(), pgo::HAS_PROPERTY, property.clone()));
        }

        for (property, (key, value)) in properties.into_iter().zip(node.keyed_properties()) {
            let value =
                self.literal(value, || format!("node '{}' property \"{key}\"", node.id))?;
            triples.push(Triple::new(
                property.clone(),
                vocab::rdf::TYPE,
                pgo::PROPERTY.into_owned(),
            ));
            triples.push(Triple::new(
                property.clone(),
                pgo::KEY,
                Literal::new_simple_literal(key),
            ));
            triples.push(Triple::new(property, pgo::VALUE, value));
        }

        Ok(())
    }

    fn literal(&self, value: &str, what: impl FnOnce() -> String) -> Result<Literal> {
        if self.policy == LiteralPolicy::Strict {
            if let Some(c) = value.chars().find(|c| matches!(c, '"' | '\\' | '\n' | '\r')) {
                return Err(ConvertError::rdf_build(format!(
                    "{} contains {c:?}, which cannot appear in an unescaped literal \
                     (enable literal escaping to accept it): {value:?}",
                    what()
                )));
            }
        }
        Ok(Literal::new_simple_literal(value))
    }
}

/// A new blank node with a random label, unique within the run.
///
/// Labels are `b` followed by 32 hex digits, which is valid in Turtle,
/// N-Triples and as an RDF/XML `nodeID`.
pub fn fresh_blank_node() -> BlankNode {
    BlankNode::new_unchecked(format!("b{}", Uuid::new_v4().simple()))
}

/// The blank node standing for a document node, labelled by its id.
fn node_blank(id: &str) -> Result<BlankNode> {
    BlankNode::new(id).map_err(|e| {
        ConvertError::rdf_build(format!("node id {id:?} is not a valid blank node label: {e}"))
    })
}
