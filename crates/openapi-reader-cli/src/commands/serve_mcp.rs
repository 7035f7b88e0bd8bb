use anyhow::{Context, Result};
use openapi_reader_core::config::Config;
use std::sync::Arc;

pub fn run(location: &str, config: &Config) -> Result<()> {
    let description = super::load(location, config)?;

    openapi_reader_mcp::server::run_server(&description)
        .map_err(|e| anyhow::anyhow!("MCP server error: {}", e))
}

/// Start the MCP server in HTTP transport mode.
pub fn run_http(location: &str, config: &Config, bind_addr: &str, port: u16) -> Result<()> {
    let description = Arc::new(super::load(location, config)?);

    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    rt.block_on(openapi_reader_mcp::http::run_http_server(
        description,
        bind_addr,
        port,
    ))
    .map_err(|e| anyhow::anyhow!("MCP HTTP server error: {}", e))
}
