use super::*;
use openapi_reader_document::parse_description;
use serde_json::json;

const PETSTORE: &str = r#"
openapi: 3.0.3
info:
  title: Petstore
  version: 1.0.0
paths:
  /pets/{id}:
    get:
      operationId: getPet
      parameters:
        - name: id
          in: path
          required: true
  /orders:
    post:
      operationId: createOrder
      requestBody:
        required: true
        content:
          application/json:
            schema:
              type: object
      responses:
        '201':
          description: created
        '400':
          description: bad request
"#;

fn petstore() -> Description {
    parse_description(PETSTORE, "petstore.yaml").unwrap()
}

fn make_request(method: &str, params: Value) -> JsonRpcRequest {
    JsonRpcRequest {
        jsonrpc: "2.0".into(),
        id: Some(json!(1)),
        method: method.into(),
        params,
    }
}

fn call_tool(arguments: Value) -> JsonRpcResponse {
    let request = make_request(
        "tools/call",
        json!({"name": "get_api_details", "arguments": arguments}),
    );
    handle_request(&request, &petstore())
}

fn tool_text(response: &JsonRpcResponse) -> String {
    assert!(response.error.is_none(), "expected success, got {response:?}");
    let result = response.result.as_ref().expect("result should be present");
    let content = result["content"].as_array().expect("content array");
    assert_eq!(content.len(), 1);
    assert_eq!(content[0]["type"], "text");
    content[0]["text"].as_str().expect("text").to_string()
}

#[test]
fn initialize_reports_server_info_and_tool_capability() {
    let response = handle_request(&make_request("initialize", json!({})), &petstore());
    let result = response.result.unwrap();
    assert_eq!(result["protocolVersion"], "2024-11-05");
    assert_eq!(result["serverInfo"]["name"], "openapi-reader");
    assert!(result["capabilities"]["tools"].is_object());
}

#[test]
fn tools_list_returns_single_tool() {
    let response = handle_request(&make_request("tools/list", json!({})), &petstore());
    let result = response.result.expect("result should be present");
    let tools = result["tools"].as_array().expect("'tools' should be an array");

    assert_eq!(tools.len(), 1);
    let tool = &tools[0];
    assert_eq!(tool["name"], "get_api_details");
    assert!(!tool["description"].as_str().unwrap().is_empty());
    assert!(tool["inputSchema"].is_object());
    assert_eq!(tool["inputSchema"]["required"], json!(["operation_id"]));
}

#[test]
fn tools_call_returns_pretty_json_for_known_operation() {
    let text = tool_text(&call_tool(json!({"operation_id": "getPet"})));
    assert!(text.starts_with("{\n  \"operation_id\": \"getPet\""), "text: {text}");

    let parsed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        parsed,
        json!({
            "operation_id": "getPet",
            "method": "GET",
            "path": "/pets/{id}",
            "parameters": [{"name": "id", "in": "path", "required": true}]
        })
    );
}

#[test]
fn tools_call_projects_request_body_and_responses() {
    let text = tool_text(&call_tool(json!({"operation_id": "createOrder"})));
    let parsed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["request_body"]["required"], true);
    let statuses: Vec<&String> = parsed["responses"].as_object().unwrap().keys().collect();
    assert_eq!(statuses, vec!["201", "400"]);
    assert!(parsed.get("parameters").is_none());
}

#[test]
fn tools_call_not_found_is_a_successful_text_result() {
    let text = tool_text(&call_tool(json!({"operation_id": "doesNotExist"})));
    assert_eq!(
        text,
        "Operation with ID 'doesNotExist' not found in the OpenAPI specification"
    );
}

#[test]
fn tools_call_without_operation_id_is_invalid_params() {
    let response = call_tool(json!({}));
    let error = response.error.expect("error expected");
    assert_eq!(error.code, crate::protocol::INVALID_PARAMS);
    assert!(error.message.contains("operation_id"), "message: {}", error.message);

    let response = call_tool(json!({"operation_id": 42}));
    assert_eq!(response.error.unwrap().code, crate::protocol::INVALID_PARAMS);
}

#[test]
fn unknown_tool_and_method_are_rejected() {
    let request = make_request("tools/call", json!({"name": "search_code", "arguments": {}}));
    let response = handle_request(&request, &petstore());
    assert_eq!(response.error.unwrap().code, METHOD_NOT_FOUND);

    let response = handle_request(&make_request("resources/list", json!({})), &petstore());
    let error = response.error.unwrap();
    assert_eq!(error.code, METHOD_NOT_FOUND);
    assert_eq!(error.message, "Method not found: resources/list");
}

#[test]
fn serve_lines_answers_requests_and_skips_notifications() {
    let input = [
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        "",
        "not json",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"get_api_details","arguments":{"operation_id":"getPet"}}}"#,
    ]
    .join("\n");
    let mut output = Vec::new();

    serve_lines(&petstore(), input.as_bytes(), &mut output).unwrap();

    let lines: Vec<JsonRpcResponse> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);

    assert_eq!(lines[0].id, Some(json!(1)));
    assert!(lines[0].result.is_some());

    assert_eq!(lines[1].id, None);
    assert_eq!(lines[1].error.as_ref().unwrap().code, PARSE_ERROR);

    assert_eq!(lines[2].id, Some(json!(2)));
    let text = tool_text(&lines[2]);
    assert!(text.contains("\"path\": \"/pets/{id}\""));
}
