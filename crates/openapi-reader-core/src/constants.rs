/// Server name reported in the MCP `initialize` handshake.
pub const SERVER_NAME: &str = "openapi-reader";

/// MCP protocol revision implemented by both transports.
pub const MCP_PROTOCOL_VERSION: &str = "2024-11-05";

/// Default data directory name under home.
pub const DEFAULT_DATA_DIR: &str = ".openapi-reader";

/// Project config file name, relative to the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".openapi-reader/config.toml";

/// File names probed, in order, when the document location is a directory.
pub const DOCUMENT_FILE_CANDIDATES: [&str; 2] = ["openapi.yaml", "openapi.yml"];

/// Default document location (current directory).
pub const DEFAULT_DOCUMENT_LOCATION: &str = ".";

/// Default timeout for fetching a remote document.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Default HTTP transport bind address.
pub const DEFAULT_BIND: &str = "127.0.0.1";

/// Default HTTP transport port.
pub const DEFAULT_PORT: u16 = 9100;

/// Maximum number of `$ref` hops followed for a single component.
pub const MAX_REF_DEPTH: usize = 16;

/// Name of the single tool exposed over MCP.
pub const GET_API_DETAILS_TOOL: &str = "get_api_details";
