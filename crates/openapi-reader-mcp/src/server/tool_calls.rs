use super::*;
use crate::protocol::INVALID_PARAMS;
use crate::tools::get_api_details::GetApiDetailsArgs;
use openapi_reader_query::{find_operation_details, render_lookup};

pub(super) struct ToolCallParams<'a> {
    pub id: Option<Value>,
    pub tool_name: &'a str,
    pub arguments: &'a Value,
    pub description: &'a Description,
}

pub(super) fn handle_tool_call(params: ToolCallParams<'_>) -> JsonRpcResponse {
    let ToolCallParams {
        id,
        tool_name,
        arguments,
        description,
    } = params;

    match tool_name {
        constants::GET_API_DETAILS_TOOL => handle_get_api_details(id, arguments, description),
        _ => JsonRpcResponse::error(id, METHOD_NOT_FOUND, format!("Unknown tool: {}", tool_name)),
    }
}

/// Not-found and encoding failures are reported in the text payload; only
/// malformed arguments produce a JSON-RPC error.
fn handle_get_api_details(
    id: Option<Value>,
    arguments: &Value,
    description: &Description,
) -> JsonRpcResponse {
    let args: GetApiDetailsArgs = match serde_json::from_value(arguments.clone()) {
        Ok(args) => args,
        Err(e) => {
            return JsonRpcResponse::error(
                id,
                INVALID_PARAMS,
                format!("Invalid arguments for {}: {}", constants::GET_API_DETAILS_TOOL, e),
            );
        }
    };

    let lookup = find_operation_details(description, &args.operation_id);
    tool_text_response(id, render_lookup(&lookup))
}

/// Helper: wrap text as MCP tool text content response.
pub(crate) fn tool_text_response(id: Option<Value>, text: String) -> JsonRpcResponse {
    JsonRpcResponse::success(
        id,
        json!({
            "content": [{"type": "text", "text": text}]
        }),
    )
}
