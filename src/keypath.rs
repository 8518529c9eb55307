//! Key-path resolution over JSON data
//!
//! Supports:
//! - `a.b.c` (dot notation into nested objects)
//! - `items.0` (all-digit segments index sequences)
//! - `a.*.c` (`*` resolves as a literal field name, no fan-out)
//!
//! Absent keys, scalar intermediates, and `null` intermediates all
//! short-circuit to `None`; resolution never fails and never panics.

use serde_json::Value;

/// A parsed key-path segment
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Object field access: `.field`
    Field(String),
    /// Sequence index access: `.0`
    Index(usize),
}

/// Split a dotted key into segments
///
/// Examples:
/// - "price.currency" → [Field("price"), Field("currency")]
/// - "items.0.name" → [Field("items"), Index(0), Field("name")]
pub fn parse(key: &str) -> Vec<Segment> {
    key.split('.')
        .map(|part| match part.parse::<usize>() {
            Ok(index) => Segment::Index(index),
            Err(_) => Segment::Field(part.to_string()),
        })
        .collect()
}

/// Apply key-path segments to a JSON value
///
/// Uses references internally, only clones once at the end. An `Index`
/// segment also reads object keys spelled as digits, and a `Field` segment
/// whose text parses as a number still indexes sequences.
pub fn apply(data: &Value, segments: &[Segment]) -> Option<Value> {
    let mut current = data;

    for segment in segments {
        current = match segment {
            Segment::Field(name) => match current {
                Value::Object(map) => map.get(name)?,
                Value::Array(items) => items.get(name.parse::<usize>().ok()?)?,
                _ => return None,
            },
            Segment::Index(index) => match current {
                Value::Array(items) => items.get(*index)?,
                Value::Object(map) => map.get(&index.to_string())?,
                _ => return None,
            },
        };
    }

    Some(current.clone())
}

/// Parse and apply in one step
pub fn resolve(data: &Value, key: &str) -> Option<Value> {
    apply(data, &parse(key))
}
