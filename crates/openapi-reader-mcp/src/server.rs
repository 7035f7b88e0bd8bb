use crate::protocol::{JsonRpcRequest, JsonRpcResponse, METHOD_NOT_FOUND, PARSE_ERROR};
use crate::tools;
use openapi_reader_core::constants;
use openapi_reader_core::error::McpError;
use openapi_reader_document::Description;
use serde_json::{Value, json};
use std::io::{self, BufRead, Write};
use tracing::{debug, error, info};

use self::tool_calls::{ToolCallParams, handle_tool_call};

/// Run the MCP server loop on stdin/stdout.
///
/// Returns when stdin reaches end of file.
pub fn run_server(description: &Description) -> Result<(), McpError> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    info!(
        paths = description.paths.len(),
        operations = description.operation_count(),
        "MCP server started"
    );
    serve_lines(description, stdin.lock(), stdout.lock())
}

/// Serve newline-delimited JSON-RPC from `input`, writing responses to `output`.
pub fn serve_lines<R: BufRead, W: Write>(
    description: &Description,
    input: R,
    mut output: W,
) -> Result<(), McpError> {
    let ctx = RequestContext { description };

    for line in input.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!("stdin read error: {}", e);
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let request: JsonRpcRequest = match serde_json::from_str(&line) {
            Ok(r) => r,
            Err(e) => {
                let resp = JsonRpcResponse::error(None, PARSE_ERROR, format!("Parse error: {}", e));
                write_response(&mut output, &resp)?;
                continue;
            }
        };

        if request.is_notification() {
            debug!(method = %request.method, "notification received");
            continue;
        }

        let response = handle_request_with_ctx(&request, &ctx);
        write_response(&mut output, &response)?;
    }

    info!("MCP server stopped");
    Ok(())
}

/// Dispatch one request against the loaded description.
pub fn handle_request(request: &JsonRpcRequest, description: &Description) -> JsonRpcResponse {
    handle_request_with_ctx(request, &RequestContext { description })
}

/// Write a JSON-RPC response as a single line.
fn write_response<W: Write>(writer: &mut W, response: &JsonRpcResponse) -> Result<(), McpError> {
    let serialized =
        serde_json::to_string(response).map_err(|e| McpError::Internal(e.to_string()))?;
    writeln!(writer, "{}", serialized)?;
    writer.flush()?;
    Ok(())
}

struct RequestContext<'a> {
    description: &'a Description,
}

fn handle_request_with_ctx(request: &JsonRpcRequest, ctx: &RequestContext<'_>) -> JsonRpcResponse {
    match request.method.as_str() {
        "initialize" => JsonRpcResponse::success(
            request.id.clone(),
            json!({
                "protocolVersion": constants::MCP_PROTOCOL_VERSION,
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": constants::SERVER_NAME,
                    "version": env!("CARGO_PKG_VERSION")
                }
            }),
        ),
        "ping" => JsonRpcResponse::success(request.id.clone(), json!({})),
        "tools/list" => {
            let tools = tools::list_tools();
            JsonRpcResponse::success(request.id.clone(), json!({ "tools": tools }))
        }
        "tools/call" => {
            let tool_name = request
                .params
                .get("name")
                .and_then(|v| v.as_str())
                .unwrap_or("");
            let arguments = request
                .params
                .get("arguments")
                .cloned()
                .unwrap_or(json!({}));

            handle_tool_call(ToolCallParams {
                id: request.id.clone(),
                tool_name,
                arguments: &arguments,
                description: ctx.description,
            })
        }
        _ => JsonRpcResponse::error(
            request.id.clone(),
            METHOD_NOT_FOUND,
            format!("Method not found: {}", request.method),
        ),
    }
}

mod tool_calls;

#[cfg(test)]
mod tests;
