//! Property Graph Ontology (pgo) vocabulary.
//!
//! The fixed vocabulary used to encode a property graph as RDF:
//!
//! ## Classes
//!
//! - `pgo:PropertyGraph` - The graph container (one per conversion run)
//! - `pgo:Edge` - A directed edge
//! - `pgo:Node` - A node
//! - `pgo:Property` - A key/value pair attached to a node
//!
//! ## Object Properties
//!
//! - `pgo:hasEdge` - Graph contains an edge
//! - `pgo:startNode` - Edge starts at a node
//! - `pgo:endNode` - Edge ends at a node
//! - `pgo:hasProperty` - Node carries a property
//!
//! ## Data Properties
//!
//! - `pgo:label` - Identifier of an edge or node, as a literal
//! - `pgo:key` - Property key
//! - `pgo:value` - Property value

use oxigraph::model::NamedNodeRef;

/// Namespace IRI of the pgo vocabulary.
pub const PGO_BASE_IRI: &str = "http://ii.uwb.edu.pl/pgo/";

/// Namespace IRI of the RDF vocabulary, declared as `rdf:` on output.
pub const RDF_BASE_IRI: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// Prefixes declared on every serialization that supports them.
pub const OUTPUT_PREFIXES: [(&str, &str); 2] = [("rdf", RDF_BASE_IRI), ("pgo", PGO_BASE_IRI)];

/// Term constants, in the style of `oxigraph::model::vocab`.
pub mod pgo {
    use super::NamedNodeRef;

    pub const PROPERTY_GRAPH: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://ii.uwb.edu.pl/pgo/PropertyGraph");
    pub const EDGE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://ii.uwb.edu.pl/pgo/Edge");
    pub const NODE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://ii.uwb.edu.pl/pgo/Node");
    pub const PROPERTY: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://ii.uwb.edu.pl/pgo/Property");

    pub const HAS_EDGE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://ii.uwb.edu.pl/pgo/hasEdge");
    pub const START_NODE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://ii.uwb.edu.pl/pgo/startNode");
    pub const END_NODE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://ii.uwb.edu.pl/pgo/endNode");
    pub const HAS_PROPERTY: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://ii.uwb.edu.pl/pgo/hasProperty");

    pub const LABEL: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://ii.uwb.edu.pl/pgo/label");
    pub const KEY: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://ii.uwb.edu.pl/pgo/key");
    pub const VALUE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://ii.uwb.edu.pl/pgo/value");
}

/// The pgo vocabulary described in Turtle.
///
/// Not part of conversion output; it documents the terms the transformer
/// emits and lets tests check that every emitted term is declared.
pub const PGO_ONTOLOGY: &str = r#"@prefix pgo: <http://ii.uwb.edu.pl/pgo/> .
@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .

<http://ii.uwb.edu.pl/pgo/> a owl:Ontology ;
    rdfs:label "Property Graph Ontology" ;
    rdfs:comment "Vocabulary for representing property graphs as RDF" .

# ===== Classes =====

pgo:PropertyGraph a owl:Class ;
    rdfs:label "Property Graph" ;
    rdfs:comment "A property graph made of nodes and edges" .

pgo:Edge a owl:Class ;
    rdfs:label "Edge" ;
    rdfs:comment "A directed edge between two nodes" .

pgo:Node a owl:Class ;
    rdfs:label "Node" ;
    rdfs:comment "A node of a property graph" .

pgo:Property a owl:Class ;
    rdfs:label "Property" ;
    rdfs:comment "A key/value pair" .

# ===== Object Properties =====

pgo:hasEdge a owl:ObjectProperty ;
    rdfs:domain pgo:PropertyGraph ;
    rdfs:range pgo:Edge ;
    rdfs:label "has edge" .

pgo:startNode a owl:ObjectProperty ;
    rdfs:domain pgo:Edge ;
    rdfs:range pgo:Node ;
    rdfs:label "start node" .

pgo:endNode a owl:ObjectProperty ;
    rdfs:domain pgo:Edge ;
    rdfs:range pgo:Node ;
    rdfs:label "end node" .

pgo:hasProperty a owl:ObjectProperty ;
    rdfs:domain pgo:Node ;
    rdfs:range pgo:Property ;
    rdfs:label "has property" .

# ===== Data Properties =====

pgo:label a owl:DatatypeProperty ;
    rdfs:range xsd:string ;
    rdfs:label "label" ;
    rdfs:comment "Identifier of a node or edge in the source document" .

pgo:key a owl:DatatypeProperty ;
    rdfs:domain pgo:Property ;
    rdfs:range xsd:string ;
    rdfs:label "key" .

pgo:value a owl:DatatypeProperty ;
    rdfs:domain pgo:Property ;
    rdfs:range xsd:string ;
    rdfs:label "value" .
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_live_in_pgo_namespace() {
        for term in [
            pgo::PROPERTY_GRAPH,
            pgo::EDGE,
            pgo::NODE,
            pgo::PROPERTY,
            pgo::HAS_EDGE,
            pgo::START_NODE,
            pgo::END_NODE,
            pgo::HAS_PROPERTY,
            pgo::LABEL,
            pgo::KEY,
            pgo::VALUE,
        ] {
            assert!(term.as_str().starts_with(PGO_BASE_IRI), "{term}");
        }
    }

    #[test]
    fn test_ontology_defines_classes() {
        assert!(PGO_ONTOLOGY.contains("pgo:PropertyGraph a owl:Class"));
        assert!(PGO_ONTOLOGY.contains("pgo:Edge a owl:Class"));
        assert!(PGO_ONTOLOGY.contains("pgo:Node a owl:Class"));
        assert!(PGO_ONTOLOGY.contains("pgo:Property a owl:Class"));
    }

    #[test]
    fn test_ontology_defines_properties() {
        assert!(PGO_ONTOLOGY.contains("pgo:hasEdge a owl:ObjectProperty"));
        assert!(PGO_ONTOLOGY.contains("pgo:startNode a owl:ObjectProperty"));
        assert!(PGO_ONTOLOGY.contains("pgo:endNode a owl:ObjectProperty"));
        assert!(PGO_ONTOLOGY.contains("pgo:hasProperty a owl:ObjectProperty"));
        assert!(PGO_ONTOLOGY.contains("pgo:key a owl:DatatypeProperty"));
        assert!(PGO_ONTOLOGY.contains("pgo:value a owl:DatatypeProperty"));
    }
}
