mod commands;

use clap::{Parser, Subcommand};
use openapi_reader_core::config::Config;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "openapi-reader",
    version,
    about = "Serve OpenAPI operation details to AI coding assistants over MCP",
    long_about = "openapi-reader loads an OpenAPI 3.x description once at startup and exposes\n\
        a single MCP tool, get_api_details, that looks up an operation by operationId.\n\n\
        Quick start:\n  \
        openapi-reader lookup getPet --spec ./openapi.yaml\n  \
        openapi-reader serve-mcp --spec ./openapi.yaml"
)]
struct Cli {
    /// Enable verbose logging (set log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (default: .openapi-reader/config.toml)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP server (stdio or HTTP JSON-RPC transport)
    ///
    /// Loads the description before serving; a load failure exits non-zero.
    ///
    /// Examples:
    ///   openapi-reader serve-mcp --spec ./api
    ///   openapi-reader serve-mcp --spec https://example.com/openapi.yaml
    ///   openapi-reader serve-mcp --transport http --port 9100
    ServeMcp {
        /// Description file, directory containing openapi.yaml/openapi.yml, or http(s) URL
        #[arg(long)]
        spec: Option<String>,

        /// Transport mode: "stdio" or "http" (default from config: stdio)
        #[arg(long)]
        transport: Option<String>,

        /// HTTP server port (only used with --transport http)
        #[arg(long)]
        port: Option<u16>,

        /// HTTP server bind address (only used with --transport http)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Print the details the get_api_details tool returns for an operationId
    ///
    /// Example: openapi-reader lookup createOrder --spec ./openapi.yaml
    Lookup {
        /// operationId to look up (exact, case-sensitive)
        operation_id: String,

        /// Description file, directory containing openapi.yaml/openapi.yml, or http(s) URL
        #[arg(long)]
        spec: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let config_file = cli.config.as_deref().map(std::path::Path::new);
    let config = Config::load_with_file(Some(&cwd), config_file)?;

    // stdout belongs to the stdio transport
    let filter = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Commands::ServeMcp {
            spec,
            transport,
            port,
            bind,
        } => {
            let transport = transport.unwrap_or_else(|| config.server.transport.clone());
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            let port = port.unwrap_or(config.server.port);
            let location = spec.unwrap_or_else(|| config.document.location.clone());
            match transport.as_str() {
                "stdio" => commands::serve_mcp::run(&location, &config)?,
                "http" => commands::serve_mcp::run_http(&location, &config, &bind, port)?,
                other => {
                    anyhow::bail!("unknown transport '{}' (expected stdio or http)", other);
                }
            }
        }
        Commands::Lookup { operation_id, spec } => {
            let location = spec.unwrap_or_else(|| config.document.location.clone());
            commands::lookup::run(&location, &operation_id, &config)?;
        }
    }

    Ok(())
}
