use crate::details::ApiDetails;
use crate::resolve::Lookup;
use serde::Serialize;

/// Render a lookup as the text payload of a tool result.
///
/// A match becomes pretty-printed JSON (two-space indent). A miss and an
/// encoding failure become plain sentences; none of these are errors.
pub fn render_lookup(lookup: &Lookup) -> String {
    match lookup {
        Lookup::Found(details) => render_details(details),
        Lookup::NotFound { operation_id } => not_found_message(operation_id),
    }
}

pub fn not_found_message(operation_id: &str) -> String {
    format!(
        "Operation with ID '{}' not found in the OpenAPI specification",
        operation_id
    )
}

fn render_details(details: &ApiDetails) -> String {
    render_json(details)
}

fn render_json<T: Serialize>(value: &T) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("failed to encode API details: {}", e);
            format!("Failed to encode API details: {}", e)
        }
    }
}
