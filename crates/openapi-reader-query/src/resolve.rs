use crate::details::{ApiDetails, ParameterDetails, RequestBodyDetails, non_empty};
use indexmap::IndexMap;
use openapi_reader_document::{Description, HttpMethod, Operation, Resolved};
use tracing::debug;

/// Outcome of an operation lookup. `NotFound` is a normal result, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(ApiDetails),
    NotFound { operation_id: String },
}

impl Lookup {
    pub fn details(&self) -> Option<&ApiDetails> {
        match self {
            Self::Found(details) => Some(details),
            Self::NotFound { .. } => None,
        }
    }
}

/// Find the operation carrying `operation_id` and project it.
///
/// Paths are scanned in the description's order and verbs in
/// [`HttpMethod::ALL`] order; the first exact match wins. When the same
/// identifier appears on several paths, which one is returned depends on
/// path order.
pub fn find_operation_details(description: &Description, operation_id: &str) -> Lookup {
    let found = description.paths().find_map(|(path, item)| {
        HttpMethod::ALL.into_iter().find_map(|method| {
            item.operation(method)
                .filter(|op| op.operation_id.as_deref() == Some(operation_id))
                .map(|op| project(path, method, op))
        })
    });

    match found {
        Some(details) => {
            debug!(
                operation_id,
                method = %details.method,
                path = %details.path,
                "operation resolved"
            );
            Lookup::Found(details)
        }
        None => {
            debug!(operation_id, "operation not found");
            Lookup::NotFound {
                operation_id: operation_id.to_string(),
            }
        }
    }
}

fn project(path: &str, method: HttpMethod, operation: &Operation) -> ApiDetails {
    let parameters: Vec<ParameterDetails> = operation
        .parameters
        .iter()
        .filter_map(Resolved::value)
        .map(ParameterDetails::from)
        .collect();

    let request_body = operation
        .request_body
        .as_ref()
        .and_then(Resolved::value)
        .map(RequestBodyDetails::from);

    let responses: IndexMap<String, serde_json::Value> = operation
        .responses
        .iter()
        .filter_map(|(status, slot)| slot.value().map(|v| (status.clone(), v.clone())))
        .collect();

    ApiDetails {
        operation_id: operation.operation_id.clone().unwrap_or_default(),
        method: method.as_str().to_string(),
        path: path.to_string(),
        summary: non_empty(operation.summary.as_deref()),
        description: non_empty(operation.description.as_deref()),
        parameters: (!parameters.is_empty()).then_some(parameters),
        request_body,
        responses: (!responses.is_empty()).then_some(responses),
    }
}
