//! End-to-end tests: fixture on disk -> loader -> resolver -> MCP stdio loop.

use std::path::PathBuf;

use openapi_reader_core::config::Config;
use openapi_reader_document::{Description, LoadOptions, load_description};
use openapi_reader_query::{Lookup, find_operation_details, render_lookup};
use serde_json::{Value, json};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn fixture_path(name: &str) -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .join("../../testdata/fixtures")
        .join(name)
        .canonicalize()
        .unwrap_or_else(|_| panic!("fixture must exist at testdata/fixtures/{name}"))
}

fn load_fixture(name: &str) -> Description {
    let path = fixture_path(name);
    load_description(&path.to_string_lossy(), &LoadOptions::default()).expect("load fixture")
}

fn lookup_json(description: &Description, operation_id: &str) -> Value {
    let text = render_lookup(&find_operation_details(description, operation_id));
    serde_json::from_str(&text).expect("found lookups render as JSON")
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[test]
fn directory_probe_finds_yaml_document() {
    let description = load_fixture("petstore");
    assert_eq!(description.paths.len(), 3);
    assert_eq!(description.operation_count(), 3);
    assert!(description.duplicate_operation_ids().is_empty());
}

#[test]
fn directory_probe_falls_back_to_yml() {
    let description = load_fixture("petstore-yml");
    assert_eq!(
        lookup_json(&description, "getStock"),
        json!({
            "operation_id": "getStock",
            "method": "GET",
            "path": "/stock",
            "summary": "Current stock levels"
        })
    );
}

#[test]
fn explicit_file_path_is_used_as_is() {
    let path = fixture_path("petstore").join("openapi.yaml");
    let description =
        load_description(&path.to_string_lossy(), &LoadOptions::default()).expect("load file");
    assert_eq!(description.operation_count(), 3);
}

#[test]
fn empty_directory_fails_to_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_description(&dir.path().to_string_lossy(), &LoadOptions::default())
        .expect_err("no document in directory");
    assert!(err.to_string().contains("openapi.yaml or openapi.yml not found"));
}

// ---------------------------------------------------------------------------
// Lookup scenarios
// ---------------------------------------------------------------------------

#[test]
fn get_pet_projects_path_parameter_only() {
    let description = load_fixture("petstore");
    assert_eq!(
        lookup_json(&description, "getPet"),
        json!({
            "operation_id": "getPet",
            "method": "GET",
            "path": "/pets/{id}",
            "parameters": [{"name": "id", "in": "path", "required": true}]
        })
    );
}

#[test]
fn create_order_resolves_component_references() {
    let description = load_fixture("petstore");
    let details = lookup_json(&description, "createOrder");

    assert_eq!(details["method"], "POST");
    assert_eq!(details["summary"], "Place an order");
    assert_eq!(details["request_body"]["required"], true);
    assert_eq!(
        details["request_body"]["content"]["application/json"]["schema"]["type"],
        "object"
    );
    assert_eq!(details["responses"]["400"]["description"], "bad request");
    assert!(details.get("parameters").is_none());
}

#[test]
fn list_pets_keeps_parameter_schema_and_description() {
    let description = load_fixture("petstore");
    let details = lookup_json(&description, "listPets");
    let param = &details["parameters"][0];
    assert_eq!(param["in"], "query");
    assert_eq!(param["required"], false);
    assert_eq!(param["description"], "How many items to return at one time");
    assert_eq!(param["schema"], json!({"type": "integer", "format": "int32"}));
}

#[test]
fn unknown_operation_renders_not_found_sentence() {
    let description = load_fixture("petstore");
    let lookup = find_operation_details(&description, "doesNotExist");
    assert!(matches!(lookup, Lookup::NotFound { .. }));
    assert_eq!(
        render_lookup(&lookup),
        "Operation with ID 'doesNotExist' not found in the OpenAPI specification"
    );
}

// ---------------------------------------------------------------------------
// MCP stdio round trip
// ---------------------------------------------------------------------------

#[test]
fn stdio_session_answers_tool_calls() {
    let description = load_fixture("petstore");
    let input = [
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
        r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"get_api_details","arguments":{"operation_id":"createOrder"}}}"#,
    ]
    .join("\n");
    let mut output = Vec::new();

    openapi_reader_mcp::server::serve_lines(&description, input.as_bytes(), &mut output)
        .expect("serve session");

    let responses: Vec<Value> = String::from_utf8(output)
        .expect("utf8 output")
        .lines()
        .map(|line| serde_json::from_str(line).expect("one JSON frame per line"))
        .collect();
    assert_eq!(responses.len(), 3);
    assert_eq!(responses[1]["result"]["tools"][0]["name"], "get_api_details");

    let text = responses[2]["result"]["content"][0]["text"]
        .as_str()
        .expect("text content");
    let details: Value = serde_json::from_str(text).expect("details JSON");
    assert_eq!(details["path"], "/orders");
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn explicit_config_file_sets_document_location() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("reader.toml");
    let location = fixture_path("petstore");
    std::fs::write(
        &config_path,
        format!(
            "[document]\nlocation = {:?}\nstrict_operation_ids = true\n",
            location.to_string_lossy()
        ),
    )
    .expect("write config");

    let config = Config::load_with_file(Some(dir.path()), Some(&config_path)).expect("config");
    assert!(config.document.strict_operation_ids);

    let description = load_description(
        &config.document.location,
        &LoadOptions::from_config(&config.document),
    )
    .expect("load via config");
    assert_eq!(description.operation_count(), 3);
}
