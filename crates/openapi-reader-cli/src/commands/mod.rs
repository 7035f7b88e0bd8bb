pub mod lookup;
pub mod serve_mcp;

use anyhow::{Context, Result};
use openapi_reader_core::config::Config;
use openapi_reader_document::{Description, LoadOptions, load_description};

/// Load the description named by `location`; any failure is fatal for the caller.
pub fn load(location: &str, config: &Config) -> Result<Description> {
    let options = LoadOptions::from_config(&config.document);
    load_description(location, &options)
        .with_context(|| format!("Failed to load OpenAPI description from '{}'", location))
}
