use indexmap::IndexMap;
use openapi_reader_document::{Parameter, RequestBody};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Flat summary of a single operation, as returned by `get_api_details`.
///
/// Optional fields are omitted from serialization rather than emitted as
/// empty values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiDetails {
    pub operation_id: String,
    pub method: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ParameterDetails>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBodyDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responses: Option<IndexMap<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDetails {
    pub name: String,
    #[serde(rename = "in")]
    pub location: String,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBodyDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<IndexMap<String, Value>>,
}

impl From<&Parameter> for ParameterDetails {
    fn from(param: &Parameter) -> Self {
        Self {
            name: param.name.clone(),
            location: param.location.as_str().to_string(),
            required: param.required,
            description: non_empty(param.description.as_deref()),
            schema: param.schema.clone(),
        }
    }
}

impl From<&RequestBody> for RequestBodyDetails {
    fn from(body: &RequestBody) -> Self {
        Self {
            description: non_empty(body.description.as_deref()),
            required: body.required,
            content: (!body.content.is_empty()).then(|| body.content.clone()),
        }
    }
}

/// Empty strings count as absent.
pub(crate) fn non_empty(text: Option<&str>) -> Option<String> {
    text.filter(|t| !t.is_empty()).map(str::to_string)
}
