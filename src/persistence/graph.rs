//! In-memory triple store and RDF serialization using Oxigraph.

use std::fmt;
use std::io::{BufReader, Cursor};

use oxigraph::io::{RdfFormat, RdfParser, RdfSerializer};
use oxigraph::model::{GraphName, NamedOrBlankNode, Quad, Term, Triple};
use oxigraph::sparql::{QueryResults, SparqlEvaluator};
use oxigraph::store::Store;
use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::persistence::ontology::{OUTPUT_PREFIXES, PGO_BASE_IRI, PGO_ONTOLOGY};

/// RDF syntaxes the store can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfSyntax {
    Turtle,
    /// One triple per line with explicit blank node labels ("labelled Turtle").
    NTriples,
    RdfXml,
    JsonLd,
}

impl RdfSyntax {
    fn format(self) -> Result<RdfFormat> {
        match self {
            RdfSyntax::Turtle => Ok(RdfFormat::Turtle),
            RdfSyntax::NTriples => Ok(RdfFormat::NTriples),
            RdfSyntax::RdfXml => Ok(RdfFormat::RdfXml),
            RdfSyntax::JsonLd => RdfFormat::from_extension("jsonld")
                .ok_or_else(|| ConvertError::rdf_build("JSON-LD support is not available")),
        }
    }
}

impl fmt::Display for RdfSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RdfSyntax::Turtle => "Turtle",
            RdfSyntax::NTriples => "N-Triples",
            RdfSyntax::RdfXml => "RDF/XML",
            RdfSyntax::JsonLd => "JSON-LD",
        };
        f.write_str(name)
    }
}

/// Triple set built for one conversion run, backed by an in-memory Oxigraph
/// [`Store`].
///
/// All triples live in the default graph. Inserting the same triple twice
/// keeps one copy.
///
/// # Example
///
/// ```ignore
/// use pgconv::persistence::{RdfSyntax, TripleStore};
///
/// let store = TripleStore::from_triples(&conversion.triples)?;
/// print!("{}", store.serialize(RdfSyntax::Turtle)?);
/// ```
pub struct TripleStore {
    store: Store,
}

impl fmt::Debug for TripleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TripleStore")
            .field("len", &self.len())
            .finish()
    }
}

impl TripleStore {
    /// Creates an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::RdfBuild`] if the store cannot be created.
    pub fn in_memory() -> Result<Self> {
        let store = Store::new()
            .map_err(|e| ConvertError::rdf_build(format!("Failed to create in-memory store: {e}")))?;
        Ok(Self { store })
    }

    /// Creates a store holding `triples`.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::RdfBuild`] if a triple cannot be inserted.
    pub fn from_triples<'a>(triples: impl IntoIterator<Item = &'a Triple>) -> Result<Self> {
        let graph = Self::in_memory()?;
        for triple in triples {
            graph.insert(triple)?;
        }
        debug!("Materialized {} triples", graph.len());
        Ok(graph)
    }

    /// Adds a triple to the default graph.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::RdfBuild`] if insertion fails.
    pub fn insert(&self, triple: &Triple) -> Result<()> {
        let quad: Quad = triple.clone().in_graph(GraphName::DefaultGraph);
        self.store
            .insert(&quad)
            .map_err(|e| ConvertError::rdf_build(format!("Failed to insert triple: {e}")))?;
        Ok(())
    }

    /// Parses Turtle text into the store.
    ///
    /// Blank node labels are kept as written.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::RdfBuild`] if parsing or insertion fails.
    pub fn import_turtle(&self, turtle: &str) -> Result<()> {
        let parser = RdfParser::from_format(RdfFormat::Turtle)
            .with_base_iri(PGO_BASE_IRI)
            .map_err(|e| ConvertError::rdf_build(format!("Invalid base IRI: {e}")))?;

        let reader = BufReader::new(Cursor::new(turtle));
        for quad_result in parser.for_reader(reader) {
            let quad = quad_result
                .map_err(|e| ConvertError::rdf_build(format!("Failed to parse Turtle: {e}")))?;
            self.store
                .insert(&quad)
                .map_err(|e| ConvertError::rdf_build(format!("Failed to insert quad: {e}")))?;
        }

        Ok(())
    }

    /// Loads the pgo vocabulary description.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::RdfBuild`] if the ontology cannot be parsed.
    pub fn load_ontology(&self) -> Result<()> {
        self.import_turtle(PGO_ONTOLOGY)
    }

    /// Evaluates a SPARQL ASK query.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::RdfBuild`] if the query is invalid or not an
    /// ASK query.
    pub fn ask(&self, sparql: &str) -> Result<bool> {
        let results = SparqlEvaluator::new()
            .parse_query(sparql)
            .map_err(|e| ConvertError::rdf_build(format!("Failed to parse query: {e}")))?
            .on_store(&self.store)
            .execute()
            .map_err(|e| ConvertError::rdf_build(format!("Query execution failed: {e}")))?;

        match results {
            QueryResults::Boolean(result) => Ok(result),
            _ => Err(ConvertError::rdf_build("Expected ASK query")),
        }
    }

    /// Number of triples in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len().unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serializes the whole store.
    ///
    /// Statements are written in a stable order and the `rdf:` and `pgo:`
    /// prefixes are declared where the syntax supports prefixes. The
    /// returned text ends with exactly one newline.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::RdfBuild`] if serialization fails.
    pub fn serialize(&self, syntax: RdfSyntax) -> Result<String> {
        let mut quads = self
            .store
            .iter()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| ConvertError::rdf_build(format!("Failed to read quad: {e}")))?;
        quads.sort_by_cached_key(|quad| quad.to_string());

        if syntax == RdfSyntax::RdfXml {
            check_rdfxml_node_ids(&quads)?;
        }

        let mut serializer = RdfSerializer::from_format(syntax.format()?);
        for (name, iri) in OUTPUT_PREFIXES {
            serializer = serializer
                .with_prefix(name, iri)
                .map_err(|e| ConvertError::rdf_build(format!("Invalid prefix {name}: {e}")))?;
        }

        let mut writer = serializer.for_writer(Vec::new());
        for quad in &quads {
            writer
                .serialize_quad(quad)
                .map_err(|e| ConvertError::rdf_build(format!("Failed to serialize quad: {e}")))?;
        }
        let buffer = writer
            .finish()
            .map_err(|e| ConvertError::rdf_build(format!("Failed to finish serialization: {e}")))?;

        let mut text = String::from_utf8(buffer)
            .map_err(|e| ConvertError::rdf_build(format!("Invalid UTF-8 in output: {e}")))?;
        let trimmed = text.trim_end_matches(['\n', '\r']).len();
        text.truncate(trimmed);
        text.push('\n');

        debug!("Serialized {} triples as {syntax}", quads.len());
        Ok(text)
    }
}

/// RDF/XML writes blank nodes as `rdf:nodeID`, which must be an XML NCName.
/// Node ids are used as blank labels verbatim, so an id like `1` is a valid
/// Turtle label but not a valid `nodeID`.
fn check_rdfxml_node_ids(quads: &[Quad]) -> Result<()> {
    for quad in quads {
        let subject = match &quad.subject {
            NamedOrBlankNode::BlankNode(b) => Some(b),
            _ => None,
        };
        let object = match &quad.object {
            Term::BlankNode(b) => Some(b),
            _ => None,
        };
        for blank in [subject, object].into_iter().flatten() {
            if !is_ncname(blank.as_str()) {
                return Err(ConvertError::rdf_build(format!(
                    "node id {:?} is not a valid RDF/XML rdf:nodeID \
                     (it must start with a letter or '_')",
                    blank.as_str()
                )));
            }
        }
    }
    Ok(())
}

fn is_ncname(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | '\u{B7}'))
}
