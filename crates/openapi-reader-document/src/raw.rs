//! Intermediate deserialization layer.
//!
//! These structs map directly onto OpenAPI objects as they appear in the
//! document. Anything that may be a Reference Object stays a raw
//! [`Value`] until the loader resolves it.

use crate::model::ParameterLocation;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub(crate) struct RawDocument {
    pub openapi: Option<Value>,
    pub swagger: Option<Value>,
    #[serde(default)]
    pub paths: Map<String, Value>,
    #[serde(default)]
    pub components: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawPathItem {
    pub get: Option<RawOperation>,
    pub post: Option<RawOperation>,
    pub put: Option<RawOperation>,
    pub delete: Option<RawOperation>,
    pub patch: Option<RawOperation>,
    pub head: Option<RawOperation>,
    pub options: Option<RawOperation>,
    pub trace: Option<RawOperation>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawOperation {
    #[serde(rename = "operationId")]
    pub operation_id: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: Vec<Value>,
    #[serde(rename = "requestBody")]
    pub request_body: Option<Value>,
    #[serde(default)]
    pub responses: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawParameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    #[serde(default)]
    pub required: bool,
    pub description: Option<String>,
    pub schema: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawRequestBody {
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub content: Map<String, Value>,
}

impl RawPathItem {
    /// Operations keyed by verb, in the fixed verb order.
    pub fn into_operations(self) -> [(crate::model::HttpMethod, Option<RawOperation>); 8] {
        use crate::model::HttpMethod;
        [
            (HttpMethod::Get, self.get),
            (HttpMethod::Post, self.post),
            (HttpMethod::Put, self.put),
            (HttpMethod::Delete, self.delete),
            (HttpMethod::Patch, self.patch),
            (HttpMethod::Head, self.head),
            (HttpMethod::Options, self.options),
            (HttpMethod::Trace, self.trace),
        ]
    }
}
