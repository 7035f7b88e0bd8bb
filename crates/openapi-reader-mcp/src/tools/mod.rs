pub mod get_api_details;

use serde::{Deserialize, Serialize};

/// MCP tool definition for tools/list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

/// Return all tool definitions.
pub fn list_tools() -> Vec<ToolDefinition> {
    vec![get_api_details::definition()]
}
