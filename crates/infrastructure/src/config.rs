//! Application configuration

use std::fmt;
use std::path::Path;

use application::ApplicationError;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::adapters::DocumentFormat;

/// Prefix for environment variable overrides (e.g. `WSCONFIG_LOGGING__FORMAT=json`)
pub const ENV_PREFIX: &str = "WSCONFIG";

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "wsconfig";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Structured JSON lines
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    #[validate(nested)]
    pub logging: LoggingConfig,

    /// Document loading configuration
    #[serde(default)]
    #[validate(nested)]
    pub documents: DocumentsConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggingConfig {
    /// Log format: "json" for structured JSON logs, "text" for human-readable
    #[serde(default)]
    pub format: LogFormat,

    /// Log level filter (e.g. "warn", "application=debug")
    #[serde(default = "default_log_filter")]
    #[validate(length(min = 1))]
    pub filter: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            filter: default_log_filter(),
        }
    }
}

/// Document loading configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DocumentsConfig {
    /// Format used for files without a recognised extension
    #[serde(default)]
    pub default_format: DocumentFormat,

    /// Largest accepted document, in bytes
    #[serde(default = "default_max_bytes")]
    #[validate(range(min = 1))]
    pub max_bytes: u64,
}

const fn default_max_bytes() -> u64 {
    1024 * 1024
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            default_format: DocumentFormat::default(),
            max_bytes: default_max_bytes(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional file and the environment
    ///
    /// Without `path`, `wsconfig.{toml,yaml,json}` in the working directory is
    /// used if it exists. An explicit `path` must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ApplicationError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config: Self = config::Config::builder()
            // Start with defaults
            .set_default("logging.format", "text")
            .and_then(|b| b.set_default("logging.filter", default_log_filter()))
            .and_then(|b| b.set_default("documents.default_format", "json"))
            .and_then(|b| b.set_default("documents.max_bytes", default_max_bytes()))
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?
            // Load from file if exists
            .add_source(file)
            // Override with environment variables (e.g., WSCONFIG_DOCUMENTS__MAX_BYTES)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(config::Config::try_deserialize)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

        config
            .validate()
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

        Ok(config)
    }
}
