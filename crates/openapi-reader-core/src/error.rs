use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("load error: {0}")]
    Load(#[from] LoadError),

    #[error("mcp error: {0}")]
    Mcp(#[from] McpError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: String },

    #[error("failed to parse config: {0}")]
    ParseError(String),

    #[error("invalid config value: {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures while locating, fetching or parsing the description document.
///
/// All of these are fatal at startup: no query capability exists without a
/// loaded description.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("path does not exist: {path}")]
    PathNotFound { path: String },

    #[error("openapi.yaml or openapi.yml not found in directory: {dir}")]
    NoDocumentInDirectory { dir: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("failed to fetch {url}: HTTP status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("failed to parse OpenAPI document {origin}: {reason}")]
    Parse { origin: String, reason: String },

    #[error("unsupported OpenAPI version: {version}")]
    UnsupportedVersion { version: String },

    #[error("duplicate operationId values: {}", ids.join(", "))]
    DuplicateOperationIds { ids: Vec<String> },
}

impl LoadError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn fetch<E: std::fmt::Display>(url: impl Into<String>, e: E) -> Self {
        Self::Fetch {
            url: url.into(),
            reason: e.to_string(),
        }
    }

    pub fn parse<E: std::fmt::Display>(origin: impl Into<String>, e: E) -> Self {
        Self::Parse {
            origin: origin.into(),
            reason: e.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum McpError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("method not found: {method}")]
    MethodNotFound { method: String },

    #[error("internal error: {0}")]
    Internal(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
