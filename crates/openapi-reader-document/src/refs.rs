//! Local `$ref` resolution against the document's `components` object.
//!
//! Only same-document references of the form `#/components/{section}/{name}`
//! are followed. External documents are never fetched.

use openapi_reader_core::constants::MAX_REF_DEPTH;
use serde_json::{Map, Value};

/// Outcome of following a possible `$ref` chain.
#[derive(Debug, PartialEq)]
pub(crate) enum RefTarget<'a> {
    /// The value (inline, or the end of a reference chain).
    Found(&'a Value),
    /// A reference that could not be followed.
    Dangling(String),
}

/// Returns the `$ref` string if `value` is a Reference Object.
pub(crate) fn reference_of(value: &Value) -> Option<&str> {
    value.get("$ref").and_then(Value::as_str)
}

/// Follows `$ref` hops inside `components.{section}` until an inline value is reached.
pub(crate) fn resolve_component<'a>(
    value: &'a Value,
    components: &'a Map<String, Value>,
    section: &str,
) -> RefTarget<'a> {
    let mut current = value;
    for _ in 0..=MAX_REF_DEPTH {
        let Some(reference) = reference_of(current) else {
            return if current.is_null() {
                RefTarget::Dangling("null".to_string())
            } else {
                RefTarget::Found(current)
            };
        };
        let Some(name) = extract_component_name(reference, section) else {
            return RefTarget::Dangling(reference.to_string());
        };
        match components
            .get(section)
            .and_then(|entries| entries.get(name.as_str()))
        {
            Some(next) => current = next,
            None => return RefTarget::Dangling(reference.to_string()),
        }
    }
    RefTarget::Dangling(reference_of(current).unwrap_or_default().to_string())
}

/// Extracts a component name from a `$ref` if it points to `#/components/{section}/{name}`.
pub(crate) fn extract_component_name(reference: &str, section: &str) -> Option<String> {
    let pointer = reference.strip_prefix("#/")?;
    let mut segments = pointer.split('/');
    if segments.next()? != "components" || segments.next()? != section {
        return None;
    }
    let name = decode_pointer_segment(segments.next()?);
    if segments.next().is_some() || name.is_empty() {
        return None;
    }
    Some(name)
}

/// Decodes a JSON Pointer segment (handles `~1` and `~0`).
pub(crate) fn decode_pointer_segment(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}
