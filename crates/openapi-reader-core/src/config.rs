use crate::constants;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub document: DocumentConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentConfig {
    /// File, directory or http(s) URL of the description document.
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
    /// Refuse to start when two operations share an operationId.
    #[serde(default)]
    pub strict_operation_ids: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_transport")]
    pub transport: String,
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_location() -> String {
    constants::DEFAULT_DOCUMENT_LOCATION.into()
}
fn default_fetch_timeout_secs() -> u64 {
    constants::DEFAULT_FETCH_TIMEOUT_SECS
}
fn default_transport() -> String {
    "stdio".into()
}
fn default_bind() -> String {
    constants::DEFAULT_BIND.into()
}
fn default_port() -> u16 {
    constants::DEFAULT_PORT
}
fn default_log_level() -> String {
    "info".into()
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            strict_operation_ids: false,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: default_transport(),
            bind: default_bind(),
            port: default_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration with layered precedence:
    /// 1. Environment overrides (`OPENAPI_READER_<SECTION>_<KEY>`, highest priority)
    /// 2. Explicit config file (from `--config` flag)
    /// 3. Project config: `<root>/.openapi-reader/config.toml`
    /// 4. Global config: `~/.openapi-reader/config.toml`
    /// 5. Built-in defaults (lowest priority)
    ///
    /// Only fields explicitly set in a higher-priority layer override lower layers.
    pub fn load_with_file(
        root: Option<&Path>,
        config_file: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let mut merged = toml::Value::Table(toml::map::Map::new());

        if let Some(home) = dirs::home_dir() {
            let global_path = home.join(constants::DEFAULT_DATA_DIR).join("config.toml");
            if global_path.exists() {
                let raw = load_toml_value(&global_path)?;
                merge_toml_values(&mut merged, &raw);
            }
        }

        if let Some(root) = root {
            let project_path = root.join(constants::PROJECT_CONFIG_FILE);
            if project_path.exists() {
                let raw = load_toml_value(&project_path)?;
                merge_toml_values(&mut merged, &raw);
            }
        }

        if let Some(cf) = config_file {
            if !cf.exists() {
                return Err(ConfigError::NotFound {
                    path: cf.display().to_string(),
                });
            }
            let raw = load_toml_value(cf)?;
            merge_toml_values(&mut merged, &raw);
        }

        let config_str =
            toml::to_string(&merged).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        let mut config: Config =
            toml::from_str(&config_str).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        apply_env_overrides(&mut config);
        config.normalize()?;

        Ok(config)
    }

    fn normalize(&mut self) -> Result<(), ConfigError> {
        self.server.transport = self.server.transport.trim().to_ascii_lowercase();
        if !matches!(self.server.transport.as_str(), "stdio" | "http") {
            return Err(ConfigError::InvalidValue {
                field: "server.transport".into(),
                reason: format!("expected \"stdio\" or \"http\", got {:?}", self.server.transport),
            });
        }
        if self.document.location.trim().is_empty() {
            self.document.location = default_location();
        }
        if self.document.fetch_timeout_secs == 0 {
            self.document.fetch_timeout_secs = default_fetch_timeout_secs();
        }
        self.logging.level = normalize_log_level(&self.logging.level);
        Ok(())
    }
}

/// Load a TOML file as a raw `toml::Value` (preserving only explicitly-set fields).
fn load_toml_value(path: &Path) -> Result<toml::Value, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    content
        .parse::<toml::Value>()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Deep-merge `overlay` into `base`. Only keys present in `overlay` are written.
fn merge_toml_values(base: &mut toml::Value, overlay: &toml::Value) {
    if let (toml::Value::Table(base_map), toml::Value::Table(overlay_map)) = (base, overlay) {
        for (key, overlay_val) in overlay_map {
            if let Some(base_val) = base_map.get_mut(key) {
                if base_val.is_table() && overlay_val.is_table() {
                    merge_toml_values(base_val, overlay_val);
                } else {
                    *base_val = overlay_val.clone();
                }
            } else {
                base_map.insert(key.clone(), overlay_val.clone());
            }
        }
    }
}

/// Apply environment variable overrides to config fields.
/// Convention: `OPENAPI_READER_<SECTION>_<KEY>` in UPPER_SNAKE_CASE.
fn apply_env_overrides(config: &mut Config) {
    if let Ok(v) = std::env::var("OPENAPI_READER_DOCUMENT_LOCATION") {
        config.document.location = v;
    }
    if let Ok(v) = std::env::var("OPENAPI_READER_DOCUMENT_FETCH_TIMEOUT_SECS")
        && let Ok(n) = v.parse()
    {
        config.document.fetch_timeout_secs = n;
    }
    if let Ok(v) = std::env::var("OPENAPI_READER_DOCUMENT_STRICT_OPERATION_IDS") {
        config.document.strict_operation_ids = v == "true" || v == "1";
    }
    if let Ok(v) = std::env::var("OPENAPI_READER_SERVER_TRANSPORT") {
        config.server.transport = v;
    }
    if let Ok(v) = std::env::var("OPENAPI_READER_SERVER_BIND") {
        config.server.bind = v;
    }
    if let Ok(v) = std::env::var("OPENAPI_READER_SERVER_PORT")
        && let Ok(n) = v.parse()
    {
        config.server.port = n;
    }
    if let Ok(v) = std::env::var("OPENAPI_READER_LOGGING_LEVEL") {
        config.logging.level = v;
    }
}

fn normalize_log_level(raw: &str) -> String {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => "trace".to_string(),
        "debug" => "debug".to_string(),
        "warn" | "warning" => "warn".to_string(),
        "error" => "error".to_string(),
        _ => "info".to_string(),
    }
}
