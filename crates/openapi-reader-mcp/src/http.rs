//! HTTP transport for the MCP server.
//!
//! Provides a JSON-RPC over HTTP endpoint that reuses the same dispatch as
//! the stdio transport. Routes:
//! - `GET /health`: loaded description summary
//! - `POST /`: JSON-RPC MCP handler

use crate::protocol::{INTERNAL_ERROR, JsonRpcRequest, JsonRpcResponse, PARSE_ERROR};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use openapi_reader_core::constants;
use openapi_reader_document::Description;
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Shared state for the HTTP transport.
pub struct HttpState {
    pub description: Arc<Description>,
    pub server_start: Instant,
}

/// Build the router for the given description.
pub fn router(description: Arc<Description>) -> Router {
    let state = Arc::new(HttpState {
        description,
        server_start: Instant::now(),
    });

    Router::new()
        .route("/health", get(health_handler))
        .route("/", post(jsonrpc_handler))
        .with_state(state)
}

/// Start the HTTP transport server on the given bind address and port.
pub async fn run_http_server(
    description: Arc<Description>,
    bind_addr: &str,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = router(description);

    let addr = format!("{}:{}", bind_addr, port);
    info!("MCP HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// GET /health
async fn health_handler(State(state): State<Arc<HttpState>>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "server": constants::SERVER_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "paths": state.description.paths.len(),
        "operations": state.description.operation_count(),
        "uptime_seconds": state.server_start.elapsed().as_secs(),
    }))
}

/// POST /: JSON-RPC MCP handler.
async fn jsonrpc_handler(State(state): State<Arc<HttpState>>, body: Bytes) -> impl IntoResponse {
    let request: JsonRpcRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(e) => {
            let resp = JsonRpcResponse::error(None, PARSE_ERROR, format!("Parse error: {}", e));
            return (StatusCode::BAD_REQUEST, Json(resp)).into_response();
        }
    };

    if request.is_notification() {
        return StatusCode::ACCEPTED.into_response();
    }

    let result = tokio::task::spawn_blocking({
        let state = Arc::clone(&state);
        move || crate::server::handle_request(&request, &state.description)
    })
    .await;

    match result {
        Ok(response) => Json(response).into_response(),
        Err(e) => {
            let resp = JsonRpcResponse::error(None, INTERNAL_ERROR, format!("Internal error: {}", e));
            Json(resp).into_response()
        }
    }
}
