use crate::location::{DocumentSource, resolve_document_location};
use crate::model::{Description, Operation, Parameter, PathItem, RequestBody, Resolved};
use crate::raw::{RawDocument, RawOperation, RawParameter, RawPathItem, RawRequestBody};
use crate::refs::{RefTarget, resolve_component};
use indexmap::IndexMap;
use openapi_reader_core::config::DocumentConfig;
use openapi_reader_core::error::LoadError;
use reqwest::blocking::Client;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Knobs for [`load_description`].
#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub fetch_timeout: Duration,
    pub strict_operation_ids: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::from_config(&DocumentConfig::default())
    }
}

impl LoadOptions {
    pub fn from_config(config: &DocumentConfig) -> Self {
        Self {
            fetch_timeout: Duration::from_secs(config.fetch_timeout_secs.max(1)),
            strict_operation_ids: config.strict_operation_ids,
        }
    }
}

/// Locate, read and parse the description document.
///
/// Duplicate operation identifiers are logged, or rejected when
/// `strict_operation_ids` is set.
pub fn load_description(location: &str, options: &LoadOptions) -> Result<Description, LoadError> {
    let source = resolve_document_location(location)?;
    let content = read_source(&source, options.fetch_timeout)?;
    let description = parse_description(&content, &source.to_string())?;

    let duplicates = description.duplicate_operation_ids();
    if !duplicates.is_empty() {
        if options.strict_operation_ids {
            return Err(LoadError::DuplicateOperationIds { ids: duplicates });
        }
        for id in &duplicates {
            warn!(
                operation_id = %id,
                "operationId is declared more than once; lookups return the first match"
            );
        }
    }

    info!(
        source = %source,
        paths = description.paths.len(),
        operations = description.operation_count(),
        "OpenAPI description loaded"
    );
    Ok(description)
}

/// Read the raw document text from a file or URL.
pub fn read_source(source: &DocumentSource, fetch_timeout: Duration) -> Result<String, LoadError> {
    match source {
        DocumentSource::File(path) => std::fs::read_to_string(path)
            .map_err(|e| LoadError::io(path.display().to_string(), e)),
        DocumentSource::Url(url) => fetch_url(url, fetch_timeout),
    }
}

fn fetch_url(url: &str, timeout: Duration) -> Result<String, LoadError> {
    debug!(url, timeout_ms = timeout.as_millis() as u64, "fetching OpenAPI document");
    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| LoadError::fetch(url, e))?;
    let response = client.get(url).send().map_err(|e| LoadError::fetch(url, e))?;
    if !response.status().is_success() {
        return Err(LoadError::HttpStatus {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }
    response.text().map_err(|e| LoadError::fetch(url, e))
}

/// Parse document text (JSON or YAML) into a [`Description`].
///
/// `origin` names the document in error messages.
pub fn parse_description(content: &str, origin: &str) -> Result<Description, LoadError> {
    let value = document_value(content, origin)?;
    let raw: RawDocument = serde_json::from_value(value).map_err(|e| LoadError::parse(origin, e))?;
    check_version(&raw, origin)?;

    let mut paths = IndexMap::with_capacity(raw.paths.len());
    for (path, value) in raw.paths {
        if path.starts_with("x-") {
            continue;
        }
        let raw_item: RawPathItem = if value.is_null() {
            RawPathItem::default()
        } else {
            serde_json::from_value(value)
                .map_err(|e| LoadError::parse(origin, format!("path item '{}': {}", path, e)))?
        };

        let mut item = PathItem::default();
        for (method, raw_operation) in raw_item.into_operations() {
            if let Some(raw_operation) = raw_operation {
                let at = format!("{} {}", method, path);
                let operation = build_operation(raw_operation, &raw.components, origin, &at)?;
                *item.operation_mut(method) = Some(operation);
            }
        }
        paths.insert(path, item);
    }

    Ok(Description::new(paths))
}

fn check_version(raw: &RawDocument, origin: &str) -> Result<(), LoadError> {
    let openapi = raw.openapi.as_ref().map(version_text);
    let swagger = raw.swagger.as_ref().map(version_text);
    match (openapi, swagger) {
        (Some(version), _) if version.starts_with("3.") => Ok(()),
        (Some(version), _) | (None, Some(version)) => {
            Err(LoadError::UnsupportedVersion { version })
        }
        (None, None) => Err(LoadError::parse(origin, "missing `openapi` version field")),
    }
}

/// Version fields are strings, but unquoted YAML such as `openapi: 3.0` parses as a number.
fn version_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        other => other.to_string(),
    }
}

fn build_operation(
    raw: RawOperation,
    components: &Map<String, Value>,
    origin: &str,
    at: &str,
) -> Result<Operation, LoadError> {
    let mut parameters = Vec::with_capacity(raw.parameters.len());
    for (idx, value) in raw.parameters.iter().enumerate() {
        let slot = match resolve_component(value, components, "parameters") {
            RefTarget::Found(found) => {
                let param: RawParameter = serde_json::from_value(found.clone()).map_err(|e| {
                    LoadError::parse(origin, format!("{} parameter #{}: {}", at, idx, e))
                })?;
                Resolved::Value(Parameter {
                    name: param.name,
                    location: param.location,
                    required: param.required,
                    description: param.description,
                    schema: param
                        .schema
                        .as_ref()
                        .and_then(|schema| parameter_schema(schema, components, at)),
                })
            }
            RefTarget::Dangling(reference) => unresolved(at, "parameter", reference),
        };
        parameters.push(slot);
    }

    let request_body = match raw.request_body.as_ref() {
        None => None,
        Some(value) => Some(match resolve_component(value, components, "requestBodies") {
            RefTarget::Found(found) => {
                let body: RawRequestBody = serde_json::from_value(found.clone())
                    .map_err(|e| LoadError::parse(origin, format!("{} requestBody: {}", at, e)))?;
                Resolved::Value(RequestBody {
                    description: body.description,
                    required: body.required,
                    content: body.content.into_iter().collect(),
                })
            }
            RefTarget::Dangling(reference) => unresolved(at, "requestBody", reference),
        }),
    };

    let mut responses = IndexMap::with_capacity(raw.responses.len());
    for (status, value) in &raw.responses {
        if status.starts_with("x-") {
            continue;
        }
        let slot = match resolve_component(value, components, "responses") {
            RefTarget::Found(found) => Resolved::Value(found.clone()),
            RefTarget::Dangling(reference) => unresolved(at, "response", reference),
        };
        responses.insert(status.clone(), slot);
    }

    Ok(Operation {
        operation_id: raw.operation_id,
        summary: raw.summary,
        description: raw.description,
        parameters,
        request_body,
        responses,
    })
}

/// Top-level schema `$ref`s are inlined; a dangling one drops the schema.
fn parameter_schema(schema: &Value, components: &Map<String, Value>, at: &str) -> Option<Value> {
    match resolve_component(schema, components, "schemas") {
        RefTarget::Found(found) => Some(found.clone()),
        RefTarget::Dangling(reference) => {
            debug!(operation = at, reference = %reference, "unresolved parameter schema dropped");
            None
        }
    }
}

fn unresolved<T>(at: &str, kind: &str, reference: String) -> Resolved<T> {
    debug!(operation = at, kind, reference = %reference, "unresolved reference skipped");
    Resolved::Unresolved { reference }
}

/// Parse document text into a JSON value, preserving key order.
fn document_value(content: &str, origin: &str) -> Result<Value, LoadError> {
    if content.trim_start().starts_with('{') {
        return serde_json::from_str(content).map_err(|e| LoadError::parse(origin, e));
    }
    let yaml: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| LoadError::parse(origin, e))?;
    yaml_to_json(yaml).map_err(|reason| LoadError::parse(origin, reason))
}

/// Convert YAML into JSON. Scalar mapping keys (status codes written as
/// bare integers) become strings.
fn yaml_to_json(value: serde_yaml::Value) -> Result<Value, String> {
    use serde_yaml::Value as Yaml;
    Ok(match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => yaml_number(&n)?,
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Yaml::Mapping(mapping) => {
            let mut map = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                map.insert(yaml_key(key)?, yaml_to_json(value)?);
            }
            Value::Object(map)
        }
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}

fn yaml_number(n: &serde_yaml::Number) -> Result<Value, String> {
    if let Some(i) = n.as_i64() {
        return Ok(Value::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Ok(Value::from(u));
    }
    n.as_f64()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| format!("number {} cannot be represented in JSON", n))
}

fn yaml_key(key: serde_yaml::Value) -> Result<String, String> {
    use serde_yaml::Value as Yaml;
    match key {
        Yaml::String(s) => Ok(s),
        Yaml::Number(n) => Ok(n.to_string()),
        Yaml::Bool(b) => Ok(b.to_string()),
        Yaml::Null => Ok("null".to_string()),
        Yaml::Tagged(tagged) => yaml_key(tagged.value),
        Yaml::Sequence(_) | Yaml::Mapping(_) => {
            Err("mapping keys must be scalars".to_string())
        }
    }
}
