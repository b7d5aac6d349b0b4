//! Compact arrow/record notation of a property graph.
//!
//! ```text
//! (n1)-[]->(n2)
//! n1:{label:"Alice",0:"42",1:""}
//! ```
//!
//! One line per edge, then one line per node. Values are written verbatim.

use crate::document::{EdgeRecord, NodeRecord, PropertyGraphDocument};

/// Accumulates compact notation line by line.
#[derive(Debug, Default)]
pub struct CompactWriter {
    buf: String,
}

impl CompactWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_edge(&mut self, edge: &EdgeRecord) {
        self.buf
            .push_str(&format!("({})-[]->({})\n", edge.source, edge.target));
    }

    pub fn push_node(&mut self, node: &NodeRecord) {
        let [label, first, second] = &node.properties;
        self.buf.push_str(&format!(
            "{}:{{label:\"{label}\",0:\"{first}\",1:\"{second}\"}}\n",
            node.id
        ));
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// Renders a whole document: edges in order, then nodes in order.
pub fn to_compact(doc: &PropertyGraphDocument) -> String {
    let mut writer = CompactWriter::new();
    for edge in &doc.edges {
        writer.push_edge(edge);
    }
    for node in &doc.nodes {
        writer.push_node(node);
    }
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reads compact notation back into `(source, target)` pairs and
    /// `(id, [values])` tuples. Assumes values contain no `"`.
    fn parse_compact(text: &str) -> (Vec<(String, String)>, Vec<(String, [String; 3])>) {
        let mut edges = Vec::new();
        let mut nodes = Vec::new();
        for line in text.lines() {
            if let Some(rest) = line.strip_prefix('(') {
                let (source, rest) = rest.split_once(")-[]->(").unwrap();
                let target = rest.strip_suffix(')').unwrap();
                edges.push((source.to_string(), target.to_string()));
            } else {
                let (id, record) = line.split_once(":{").unwrap();
                let values: Vec<String> = record
                    .trim_end_matches('}')
                    .split(',')
                    .map(|kv| {
                        let (_, v) = kv.split_once(':').unwrap();
                        v.trim_matches('"').to_string()
                    })
                    .collect();
                nodes.push((id.to_string(), [values[0].clone(), values[1].clone(), values[2].clone()]));
            }
        }
        (edges, nodes)
    }

    fn sample() -> PropertyGraphDocument {
        PropertyGraphDocument {
            edges: vec![EdgeRecord::new("e1", "n1", "n2")],
            nodes: vec![
                NodeRecord::from_values("n1", Vec::new()),
                NodeRecord::from_values("n2", Vec::new()),
            ],
        }
    }

    #[test]
    fn test_single_edge_two_nodes() {
        assert_eq!(
            to_compact(&sample()),
            "(n1)-[]->(n2)\nn1:{label:\"\",0:\"\",1:\"\"}\nn2:{label:\"\",0:\"\",1:\"\"}\n"
        );
    }

    #[test]
    fn test_node_values_in_slot_order() {
        let mut writer = CompactWriter::new();
        writer.push_node(&NodeRecord::from_values(
            "p",
            vec!["Alice".into(), "42".into(), "x".into()],
        ));
        assert_eq!(writer.finish(), "p:{label:\"Alice\",0:\"42\",1:\"x\"}\n");
    }

    #[test]
    fn test_parse_back_recovers_graph() {
        let doc = PropertyGraphDocument {
            edges: vec![
                EdgeRecord::new("e1", "a", "b"),
                EdgeRecord::new("e2", "b", "c"),
                EdgeRecord::new("e3", "a", "c"),
            ],
            nodes: vec![
                NodeRecord::from_values("a", vec!["A".into(), "1".into()]),
                NodeRecord::from_values("b", vec!["B".into()]),
                NodeRecord::from_values("c", vec!["C".into(), "3".into(), "z".into()]),
            ],
        };

        let (edges, nodes) = parse_compact(&to_compact(&doc));

        let want_edges: Vec<_> = doc
            .edges
            .iter()
            .map(|e| (e.source.clone(), e.target.clone()))
            .collect();
        let want_nodes: Vec<_> = doc
            .nodes
            .iter()
            .map(|n| (n.id.clone(), n.properties.clone()))
            .collect();
        assert_eq!(edges, want_edges);
        assert_eq!(nodes, want_nodes);
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(to_compact(&PropertyGraphDocument::default()), "");
    }
}
