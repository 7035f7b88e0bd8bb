use anyhow::Result;
use openapi_reader_core::config::Config;
use openapi_reader_query::{find_operation_details, render_lookup};

pub fn run(location: &str, operation_id: &str, config: &Config) -> Result<()> {
    let description = super::load(location, config)?;
    let lookup = find_operation_details(&description, operation_id);
    println!("{}", render_lookup(&lookup));
    Ok(())
}
