//! YARS-PG (YAML) reader.
//!
//! ```yaml
//! e:
//!   - {id: e1, s: n1, t: n2}
//! n:
//!   - {id: n1, d: [Alice, 42]}
//!   - {id: n2}
//! ```
//!
//! Scalars are rendered as plain text, so `id: 7` and `id: "7"` are the same
//! node. A missing `d`, a null entry or a short `d` list yields empty slots.

use std::path::Path;

use serde_yaml::Value;

use super::{EdgeRecord, NodeRecord, PropertyGraphDocument};
use crate::error::{ConvertError, Result};

/// Parses YARS-PG text into a document.
///
/// # Errors
///
/// Returns [`ConvertError::InputFormat`] on YAML syntax errors, when `e` or
/// `n` is missing or not a sequence, or when an entry lacks a required key.
pub fn parse(content: &str, origin: &Path) -> Result<PropertyGraphDocument> {
    let fail = |reason: String| ConvertError::input_format(origin, reason);

    let root: Value = serde_yaml::from_str(content).map_err(|e| fail(e.to_string()))?;

    let edges = sequence(&root, "e")
        .map_err(fail)?
        .iter()
        .enumerate()
        .map(|(i, entry)| edge_record(entry).map_err(|reason| fail(format!("e[{i}]: {reason}"))))
        .collect::<Result<Vec<_>>>()?;

    let nodes = sequence(&root, "n")
        .map_err(fail)?
        .iter()
        .enumerate()
        .map(|(i, entry)| node_record(entry).map_err(|reason| fail(format!("n[{i}]: {reason}"))))
        .collect::<Result<Vec<_>>>()?;

    Ok(PropertyGraphDocument { edges, nodes })
}

fn sequence<'a>(root: &'a Value, key: &str) -> std::result::Result<&'a [Value], String> {
    match root.get(key).map(untagged) {
        Some(Value::Sequence(items)) => Ok(items),
        Some(Value::Null) => Ok(&[]),
        Some(_) => Err(format!("top-level `{key}` must be a sequence")),
        None => Err(format!("missing top-level `{key}` key")),
    }
}

fn edge_record(entry: &Value) -> std::result::Result<EdgeRecord, String> {
    Ok(EdgeRecord {
        id: required_scalar(entry, "id")?,
        source: required_scalar(entry, "s")?,
        target: required_scalar(entry, "t")?,
    })
}

fn node_record(entry: &Value) -> std::result::Result<NodeRecord, String> {
    let id = required_scalar(entry, "id")?;

    let values = match entry.get("d").map(untagged) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Sequence(items)) => items
            .iter()
            .map(|v| scalar_text(v).ok_or_else(|| "`d` values must be scalars".to_string()))
            .collect::<std::result::Result<Vec<_>, _>>()?,
        Some(_) => return Err("`d` must be a sequence".to_string()),
    };

    Ok(NodeRecord::from_values(id, values))
}

fn required_scalar(entry: &Value, key: &str) -> std::result::Result<String, String> {
    match entry.get(key).map(untagged) {
        None | Some(Value::Null) => Err(format!("missing `{key}`")),
        Some(value) => scalar_text(value).ok_or_else(|| format!("`{key}` must be a scalar")),
    }
}

/// Plain text of a scalar; `null` becomes `""`. Collections yield `None`.
fn scalar_text(value: &Value) -> Option<String> {
    match untagged(value) {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
    }
}

fn untagged(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untagged(&tagged.value),
        other => other,
    }
}
