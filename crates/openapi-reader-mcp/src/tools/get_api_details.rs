use super::ToolDefinition;
use openapi_reader_core::constants::GET_API_DETAILS_TOOL;
use serde::Deserialize;
use serde_json::json;

/// Arguments accepted by `get_api_details`.
#[derive(Debug, Clone, Deserialize)]
pub struct GetApiDetailsArgs {
    pub operation_id: String,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: GET_API_DETAILS_TOOL.into(),
        description: "Get API details by operationId from OpenAPI specification loaded at startup"
            .into(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "operation_id": {
                    "type": "string",
                    "description": "the operationId to get details for"
                }
            },
            "required": ["operation_id"]
        }),
    }
}
