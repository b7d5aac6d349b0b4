//! GraphML reader.
//!
//! Expects `<graphml><graph>` with `edge` and `node` children. Element and
//! attribute names are matched literally, so a prefixed root such as
//! `<g:graphml>` is rejected. Node properties are the text of the node's
//! `data` children taken by position; their `key` attributes are ignored.

use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::warn;

use super::{EdgeRecord, NodeRecord, PropertyGraphDocument};
use crate::error::{ConvertError, Result};

const ROOT: &str = "graphml";
const GRAPH: &str = "graph";
const EDGE: &str = "edge";
const NODE: &str = "node";
const DATA: &str = "data";

/// A node whose closing tag has not been seen yet.
struct OpenNode {
    id: String,
    values: Vec<String>,
}

/// Parses GraphML text into a document.
///
/// # Errors
///
/// Returns [`ConvertError::InputFormat`] when the text is not well-formed XML,
/// the root is not `graphml`, there is no `graph` element, the graph has no
/// `edge` or no `node` element, or a required id attribute is missing.
pub fn parse(content: &str, origin: &Path) -> Result<PropertyGraphDocument> {
    let fail = |reason: String| ConvertError::input_format(origin, reason);

    let mut reader = Reader::from_str(content);
    let mut doc = PropertyGraphDocument::default();

    // Names of the currently open elements, outermost first.
    let mut stack: Vec<String> = Vec::new();
    let mut saw_root = false;
    let mut graphs_seen = 0usize;
    let mut open_node: Option<OpenNode> = None;
    let mut data_text: Option<String> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| fail(format!("malformed XML at byte {}: {e}", reader.buffer_position())))?;

        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let is_empty = matches!(event, Event::Empty(_));
                let name = element_name(e);

                if !saw_root {
                    if name != ROOT {
                        return Err(fail(format!("root element is <{name}>, expected <{ROOT}>")));
                    }
                    saw_root = true;
                } else if in_element_path(&stack, &[ROOT]) && name == GRAPH {
                    graphs_seen += 1;
                    if graphs_seen > 1 {
                        warn!("Ignoring additional <graph> element #{graphs_seen}");
                    }
                } else if graphs_seen == 1 && in_element_path(&stack, &[ROOT, GRAPH]) {
                    match name.as_str() {
                        EDGE => doc.edges.push(edge_record(e).map_err(fail)?),
                        NODE => {
                            let id = required_attribute(e, NODE, "id").map_err(fail)?;
                            let node = OpenNode {
                                id,
                                values: Vec::new(),
                            };
                            if is_empty {
                                doc.nodes.push(finish_node(node));
                            } else {
                                open_node = Some(node);
                            }
                        }
                        _ => {}
                    }
                } else if name == DATA && in_element_path(&stack, &[ROOT, GRAPH, NODE]) {
                    if let Some(node) = open_node.as_mut() {
                        if is_empty {
                            node.values.push(String::new());
                        } else {
                            data_text = Some(String::new());
                        }
                    }
                }

                if !is_empty {
                    stack.push(name);
                }
            }
            Event::Text(ref t) => {
                if let Some(text) = data_text.as_mut() {
                    if stack.len() == 4 {
                        let unescaped = t
                            .unescape()
                            .map_err(|e| fail(format!("invalid text content: {e}")))?;
                        text.push_str(&unescaped);
                    }
                }
            }
            Event::CData(c) => {
                if let Some(text) = data_text.as_mut() {
                    if stack.len() == 4 {
                        text.push_str(&String::from_utf8_lossy(&c.into_inner()));
                    }
                }
            }
            Event::End(_) => {
                let closed = stack.pop().unwrap_or_default();

                if closed == DATA && stack.len() == 3 {
                    if let (Some(node), Some(text)) = (open_node.as_mut(), data_text.take()) {
                        node.values.push(text.trim().to_string());
                    }
                } else if closed == NODE && stack.len() == 2 {
                    if let Some(node) = open_node.take() {
                        doc.nodes.push(finish_node(node));
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(fail(format!("unexpected end of document inside <{}>", stack.join("><"))));
    }
    if !saw_root {
        return Err(fail(format!("no <{ROOT}> root element")));
    }
    if graphs_seen == 0 {
        return Err(fail(format!("missing <{GRAPH}> element under <{ROOT}>")));
    }
    if doc.edges.is_empty() {
        return Err(fail(format!("<{GRAPH}> has no <{EDGE}> elements")));
    }
    if doc.nodes.is_empty() {
        return Err(fail(format!("<{GRAPH}> has no <{NODE}> elements")));
    }

    Ok(doc)
}

fn element_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

/// True when the open elements are exactly `path`.
fn in_element_path(stack: &[String], path: &[&str]) -> bool {
    stack.len() == path.len() && stack.iter().zip(path).all(|(open, want)| open == want)
}

fn finish_node(node: OpenNode) -> NodeRecord {
    NodeRecord::from_values(node.id, node.values)
}

fn edge_record(e: &BytesStart<'_>) -> std::result::Result<EdgeRecord, String> {
    Ok(EdgeRecord {
        id: required_attribute(e, EDGE, "id")?,
        source: required_attribute(e, EDGE, "source")?,
        target: required_attribute(e, EDGE, "target")?,
    })
}

fn required_attribute(
    e: &BytesStart<'_>,
    element: &str,
    name: &str,
) -> std::result::Result<String, String> {
    attribute(e, name)?.ok_or_else(|| format!("<{element}> without `{name}` attribute"))
}

fn attribute(e: &BytesStart<'_>, name: &str) -> std::result::Result<Option<String>, String> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| format!("invalid attribute: {err}"))?;
        if attr.key.as_ref() == name.as_bytes() {
            let value = attr
                .unescape_value()
                .map_err(|err| format!("invalid attribute value: {err}"))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}
